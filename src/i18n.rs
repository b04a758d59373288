// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库
// 支持俄文（默认）和英文
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// ==========================================

use crate::importer::row_parser::COLUMN_COUNT;

/// 表头列键（顺序即列顺序）
const HEADER_KEYS: [&str; COLUMN_COUNT] = [
    "report.header.number",
    "report.header.supplier",
    "report.header.name",
    "report.header.units",
    "report.header.amount",
    "report.header.price",
    "report.header.cost",
];

/// 是否存在该语言的翻译
pub fn is_supported(locale: &str) -> bool {
    rust_i18n::available_locales!().iter().any(|l| *l == locale)
}

/// 翻译消息（指定语言,不读写全局语言）
fn t_in(key: &str, locale: &str) -> String {
    rust_i18n::t!(key, locale = locale).to_string()
}

/// 七列表头标题
pub fn header_titles(locale: &str) -> Vec<String> {
    HEADER_KEYS.iter().map(|key| t_in(key, locale)).collect()
}

/// 小计行标签
pub fn subtotal_label(locale: &str) -> String {
    t_in("report.subtotal", locale)
}

use crate::engine::strategy::ReportStrategy;
use crate::exporter::xlsx_sink::StyleSettings;
use crate::importer::unit_parser::DEFAULT_COUNTABLE_MARKER;
use serde::{Deserialize, Serialize};

/// 报表配置（持久化对象）
///
/// 存储位置：JSON 文件；缺失的键取默认值
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// 输出策略（aggregated/per_row/subtotal）
    pub strategy: ReportStrategy,

    /// 表头语言（ru/en）
    pub locale: String,

    /// 字体名称
    pub font_name: String,

    /// 字号（磅）
    pub font_size: f64,

    /// 单价/金额数字格式
    pub precision_format: String,

    /// 计件单位标记（单位包含该子串即按整数取整）
    pub countable_marker: String,

    /// 输出文件名后缀（`<stem><suffix>.xlsx`）
    pub output_suffix: String,

    /// 问题文件留存目录
    pub problem_files_dir: String,

    /// CSV 分隔符（单个 ASCII 字符）
    pub csv_delimiter: char,
}

impl Default for ReportConfig {
    fn default() -> Self {
        let style = StyleSettings::default();
        Self {
            strategy: ReportStrategy::default(),
            locale: "ru".to_string(),
            font_name: style.font_name,
            font_size: style.font_size,
            precision_format: style.precision_format,
            countable_marker: DEFAULT_COUNTABLE_MARKER.to_string(),
            output_suffix: "_processed".to_string(),
            problem_files_dir: "problemFiles".to_string(),
            csv_delimiter: ',',
        }
    }
}

impl ReportConfig {
    pub fn style_settings(&self) -> StyleSettings {
        StyleSettings {
            font_name: self.font_name.clone(),
            font_size: self.font_size,
            precision_format: self.precision_format.clone(),
        }
    }
}

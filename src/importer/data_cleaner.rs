// ==========================================
// 采购明细汇总报表 - 单元格文本清洗
// ==========================================
// 职责: TRIM / 缺失单元格标准化 / 小数分隔符与倍数标注处理
// ==========================================

/// 单元格文本提取: 去首尾空白,缺失单元格返回空串
pub fn cell_text(cell: Option<&str>) -> String {
    cell.map(|v| v.trim().to_string()).unwrap_or_default()
}

/// 截断数量尾部的倍数标注（如 "3 x2" → "3"）
pub fn strip_multiplier_annotation(value: &str) -> &str {
    match value.find(" x") {
        Some(pos) => &value[..pos],
        None => value,
    }
}

/// 小数逗号统一为小数点
pub fn normalize_decimal(value: &str) -> String {
    value.replace(',', ".")
}

/// 是否为负数调整行（退货/冲销）
pub fn is_negative_adjustment(amount_text: &str) -> bool {
    amount_text.starts_with('-')
}

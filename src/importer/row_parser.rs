// ==========================================
// 采购明细汇总报表 - 行解析器
// ==========================================
// 版式: 序号 | 供应商 | 名称 | 单位 | 数量 | 单价 | 金额
// 职责: 源行 → MaterialInfo（倍数换算 + 计件取整）
// ==========================================

use crate::domain::material::{MaterialInfo, MaterialInfoBuilder};
use crate::importer::data_cleaner::{normalize_decimal, strip_multiplier_annotation};
use crate::importer::error::{ReportError, ReportResult};
use crate::importer::unit_parser::{parse_unit, DEFAULT_COUNTABLE_MARKER};
use crate::importer::workbook_source::SourceRow;

// 列号（0 基）;序号列(0)与金额列(6)不参与解析
pub const COL_SUPPLIER: usize = 1;
pub const COL_NAME: usize = 2;
pub const COL_UNITS: usize = 3;
pub const COL_AMOUNT: usize = 4;
pub const COL_PRICE: usize = 5;

/// 报表固定列数
pub const COLUMN_COUNT: usize = 7;

pub struct RowParser {
    countable_marker: String,
}

impl Default for RowParser {
    fn default() -> Self {
        Self::new(DEFAULT_COUNTABLE_MARKER)
    }
}

impl RowParser {
    pub fn new(countable_marker: impl Into<String>) -> Self {
        Self {
            countable_marker: countable_marker.into(),
        }
    }

    /// 解析一行
    ///
    /// # 参数
    /// - sheet: 工作表名（用于错误定位）
    /// - row: 源行
    ///
    /// # 错误
    /// - ReportError::MalformedNumber: 数量/单价/倍数无法解析
    pub fn parse(&self, sheet: &str, row: &SourceRow) -> ReportResult<MaterialInfo> {
        let malformed = |column: usize, value: &str| ReportError::MalformedNumber {
            sheet: sheet.to_string(),
            row: row.number,
            column,
            value: value.to_string(),
        };

        let builder = MaterialInfoBuilder::new()
            .supplier(row.text(COL_SUPPLIER))
            .name(row.text(COL_NAME));

        let unit_spec = parse_unit(&row.text(COL_UNITS), &self.countable_marker)
            .map_err(|count| malformed(COL_UNITS, &count))?;
        let multiplier = f64::from(unit_spec.multiplier);

        let amount_text = row.text(COL_AMOUNT);
        let mut amount = parse_decimal(strip_multiplier_annotation(&amount_text))
            .ok_or_else(|| malformed(COL_AMOUNT, &amount_text))?
            * multiplier;
        if unit_spec.is_countable {
            // 四舍五入（远离零）,保留浮点表示
            amount = amount.round();
        }

        let price_text = row.text(COL_PRICE);
        let price = parse_decimal(&price_text).ok_or_else(|| malformed(COL_PRICE, &price_text))?
            / multiplier;

        builder
            .units(unit_spec.unit)
            .amount(amount)
            .price(price)
            .build()
    }
}

/// 十进制数解析;`inf`/`NaN` 等非有限值视为格式错误
fn parse_decimal(value: &str) -> Option<f64> {
    normalize_decimal(value.trim())
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

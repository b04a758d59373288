// ==========================================
// 采购明细汇总报表 - 领域类型定义
// ==========================================
// 输出单元格的值类型与样式句柄
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// 单元格样式 (Cell Style)
// ==========================================
// 四种预注册样式,按引用复用,不逐行创建
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellStyle {
    Plain,         // 普通
    Precision,     // 两位小数
    Bold,          // 加粗（主供应商）
    BoldPrecision, // 加粗 + 两位小数
}

impl CellStyle {
    /// 按行样式与单元格是否为金额组合出最终样式
    pub fn compose(bold: bool, precision: bool) -> Self {
        match (bold, precision) {
            (true, true) => CellStyle::BoldPrecision,
            (true, false) => CellStyle::Bold,
            (false, true) => CellStyle::Precision,
            (false, false) => CellStyle::Plain,
        }
    }

    pub fn is_bold(&self) -> bool {
        matches!(self, CellStyle::Bold | CellStyle::BoldPrecision)
    }
}

// ==========================================
// 单元格值 (Cell Value)
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Formula(String), // 仅限简单跨单元格运算,如 "=E2*F2"
    Empty,
}

/// 输出单元格
#[derive(Debug, Clone, PartialEq)]
pub struct OutputCell {
    pub value: CellValue,
    pub style: CellStyle,
}

impl OutputCell {
    pub fn text(value: impl Into<String>, style: CellStyle) -> Self {
        Self {
            value: CellValue::Text(value.into()),
            style,
        }
    }

    pub fn number(value: f64, style: CellStyle) -> Self {
        Self {
            value: CellValue::Number(value),
            style,
        }
    }

    pub fn formula(formula: impl Into<String>, style: CellStyle) -> Self {
        Self {
            value: CellValue::Formula(formula.into()),
            style,
        }
    }

    pub fn empty(style: CellStyle) -> Self {
        Self {
            value: CellValue::Empty,
            style,
        }
    }
}

/// 输出行（0 行为表头）
#[derive(Debug, Clone, PartialEq)]
pub struct OutputRow {
    pub index: u32,
    pub style: CellStyle, // 行级样式
    pub cells: Vec<OutputCell>,
}

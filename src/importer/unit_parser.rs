// ==========================================
// 采购明细汇总报表 - 单位解析器
// ==========================================
// 输入: 单位列原文,如 "10 кг" / "шт"
// 输出: 规范单位 + 包装倍数 + 是否计件
// ==========================================

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // "<倍数> <单位>" 整串匹配
    static ref UNIT_PATTERN: Regex = Regex::new(r"^(?P<count>[0-9]+)\s+(?P<unit>.+)$").unwrap();
}

/// 计件单位默认标记
pub const DEFAULT_COUNTABLE_MARKER: &str = "шт";

/// 单位解析结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitSpec {
    pub unit: String,
    pub multiplier: u32,
    pub is_countable: bool,
}

/// 解析单位文本
///
/// # 返回
/// - Ok(UnitSpec): 不匹配 "<倍数> <单位>" 时倍数为 1,单位原样保留
/// - Err(String): 倍数为 0 或超出 u32 范围（返回原始倍数文本）
pub fn parse_unit(raw: &str, countable_marker: &str) -> Result<UnitSpec, String> {
    let (unit, multiplier) = match UNIT_PATTERN.captures(raw) {
        Some(caps) => {
            let count = &caps["count"];
            let multiplier = count
                .parse::<u32>()
                .ok()
                .filter(|m| *m > 0)
                .ok_or_else(|| count.to_string())?;
            (caps["unit"].to_string(), multiplier)
        }
        None => (raw.to_string(), 1),
    };

    let is_countable = !countable_marker.is_empty() && unit.contains(countable_marker);

    Ok(UnitSpec {
        unit,
        multiplier,
        is_countable,
    })
}

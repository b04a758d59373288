// ==========================================
// 采购明细汇总报表 - 输出策略定义
// ==========================================
// 用途:
// - aggregated: 次要供应商合并,预计算金额（默认）
// - per_row: 每个源行一条输出,不合并
// - subtotal: 同 aggregated,金额写公式并在每个层级后追加小计行

use serde::{Deserialize, Serialize};

/// 报表输出策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStrategy {
    Aggregated,
    PerRow,
    Subtotal,
}

impl ReportStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStrategy::Aggregated => "aggregated",
            ReportStrategy::PerRow => "per_row",
            ReportStrategy::Subtotal => "subtotal",
        }
    }

    /// 是否合并次要供应商重复物料并过滤零金额
    pub fn aggregates(&self) -> bool {
        !matches!(self, ReportStrategy::PerRow)
    }
}

impl Default for ReportStrategy {
    fn default() -> Self {
        ReportStrategy::Aggregated
    }
}

impl std::fmt::Display for ReportStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ReportStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "aggregated" => Ok(ReportStrategy::Aggregated),
            "per_row" | "per-row" => Ok(ReportStrategy::PerRow),
            "subtotal" => Ok(ReportStrategy::Subtotal),
            other => Err(format!("未知策略类型: {}", other)),
        }
    }
}

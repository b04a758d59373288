// ==========================================
// 采购明细汇总报表 - 聚合引擎
// ==========================================
// 流程: 负数行过滤 → 行解析 → 零金额过滤 → 主/次供应商分区
//       → 次要供应商合并 → 拼接 + 稳定排序
// 红线: 主供应商重复行保留为独立明细,不合并
// ==========================================

use crate::domain::material::{Material, MaterialInfo};
use crate::engine::strategy::ReportStrategy;
use crate::importer::data_cleaner::is_negative_adjustment;
use crate::importer::error::ReportResult;
use crate::importer::row_parser::{RowParser, COL_AMOUNT};
use crate::importer::workbook_source::SourceSheet;
use indexmap::map::Entry;
use indexmap::IndexMap;
use tracing::debug;

pub struct AggregationEngine {
    row_parser: RowParser,
    strategy: ReportStrategy,
}

impl AggregationEngine {
    pub fn new(row_parser: RowParser, strategy: ReportStrategy) -> Self {
        Self {
            row_parser,
            strategy,
        }
    }

    pub fn strategy(&self) -> ReportStrategy {
        self.strategy
    }

    /// 聚合一个工作表
    ///
    /// # 返回
    /// - Ok(Vec<MaterialInfo>): 已排序的输出记录
    /// - Err: 任意一行解析失败即整表失败（不跳过该行）
    pub fn aggregate(&self, sheet: &SourceSheet) -> ReportResult<Vec<MaterialInfo>> {
        // === 步骤 1: 负数调整行整行剔除 ===
        let rows: Vec<_> = sheet
            .rows
            .iter()
            .filter(|row| !is_negative_adjustment(&row.text(COL_AMOUNT)))
            .collect();
        debug!(
            sheet = %sheet.name,
            total = sheet.rows.len(),
            kept = rows.len(),
            "负数调整行过滤完成"
        );

        // === 步骤 2: 行解析 ===
        let infos = rows
            .into_iter()
            .map(|row| self.row_parser.parse(&sheet.name, row))
            .collect::<ReportResult<Vec<_>>>()?;

        if !self.strategy.aggregates() {
            return Ok(sort_for_report(infos));
        }

        // === 步骤 3: 零金额过滤 ===
        let infos: Vec<_> = infos.into_iter().filter(|info| info.cost() != 0.0).collect();

        // === 步骤 4: 主/次供应商分区 ===
        let (main_supplier, secondary_supplier): (Vec<_>, Vec<_>) = infos
            .into_iter()
            .partition(|info| info.material.is_main_supplier());

        // === 步骤 5: 次要供应商合并 ===
        let merged = merge_duplicates(secondary_supplier)?;
        debug!(
            sheet = %sheet.name,
            main = main_supplier.len(),
            secondary = merged.len(),
            "供应商分区与合并完成"
        );

        // === 步骤 6: 拼接 + 排序 ===
        let mut result = main_supplier;
        result.extend(merged);
        Ok(sort_for_report(result))
    }
}

/// 按物料身份分组（保持首次出现顺序）并累加数量
pub fn merge_duplicates(infos: Vec<MaterialInfo>) -> ReportResult<Vec<MaterialInfo>> {
    let mut groups: IndexMap<Material, MaterialInfo> = IndexMap::new();
    for info in infos {
        match groups.entry(info.material.clone()) {
            Entry::Occupied(mut entry) => {
                let merged = entry.get().clone().merge(info)?;
                entry.insert(merged);
            }
            Entry::Vacant(entry) => {
                entry.insert(info);
            }
        }
    }
    Ok(groups.into_values().collect())
}

/// 稳定排序: 主供应商在前,同层级按名称
pub fn sort_for_report(mut infos: Vec<MaterialInfo>) -> Vec<MaterialInfo> {
    infos.sort_by(|a, b| a.material.report_order(&b.material));
    infos
}

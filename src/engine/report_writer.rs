// ==========================================
// 采购明细汇总报表 - 报表行生成器
// ==========================================
// 版式: 序号 | 供应商 | 名称 | 单位 | 数量 | 单价 | 金额
// 样式: 主供应商整行加粗;单价/金额两位小数（与加粗叠加）
// ==========================================

use crate::domain::material::MaterialInfo;
use crate::domain::types::{CellStyle, OutputCell, OutputRow};
use crate::engine::strategy::ReportStrategy;
use crate::i18n;
use crate::importer::row_parser::COLUMN_COUNT;

pub struct ReportRowWriter {
    strategy: ReportStrategy,
    locale: String,
}

impl ReportRowWriter {
    pub fn new(strategy: ReportStrategy, locale: impl Into<String>) -> Self {
        Self {
            strategy,
            locale: locale.into(),
        }
    }

    /// 表头行（第 0 行,普通样式）
    pub fn header_row(&self) -> OutputRow {
        OutputRow {
            index: 0,
            style: CellStyle::Plain,
            cells: i18n::header_titles(&self.locale)
                .into_iter()
                .map(|title| OutputCell::text(title, CellStyle::Plain))
                .collect(),
        }
    }

    /// 数据行（从第 1 行开始）
    pub fn data_rows(&self, infos: &[MaterialInfo]) -> Vec<OutputRow> {
        match self.strategy {
            ReportStrategy::Aggregated | ReportStrategy::PerRow => infos
                .iter()
                .enumerate()
                .map(|(i, info)| {
                    let index = i as u32 + 1;
                    let cost = OutputCell::number(
                        info.cost(),
                        CellStyle::compose(info.material.is_main_supplier(), true),
                    );
                    record_row(index, index, info, cost)
                })
                .collect(),
            ReportStrategy::Subtotal => self.rows_with_subtotals(infos),
        }
    }

    fn rows_with_subtotals(&self, infos: &[MaterialInfo]) -> Vec<OutputRow> {
        let split = infos
            .iter()
            .position(|info| !info.material.is_main_supplier())
            .unwrap_or(infos.len());
        let (main_block, secondary_block) = infos.split_at(split);

        let mut rows = Vec::with_capacity(infos.len() + 2);
        let mut next_index: u32 = 1;
        let mut sequence: u32 = 1;

        for block in [main_block, secondary_block] {
            if block.is_empty() {
                continue;
            }

            let first_index = next_index;
            for info in block {
                // 行号 0 基,Excel 行号 1 基
                let excel_row = next_index + 1;
                let cost = OutputCell::formula(
                    format!("=E{}*F{}", excel_row, excel_row),
                    CellStyle::compose(info.material.is_main_supplier(), true),
                );
                rows.push(record_row(next_index, sequence, info, cost));
                next_index += 1;
                sequence += 1;
            }

            rows.push(self.subtotal_row(next_index, first_index + 1, next_index));
            next_index += 1;
        }

        rows
    }

    fn subtotal_row(&self, index: u32, first_excel_row: u32, last_excel_row: u32) -> OutputRow {
        let mut cells: Vec<OutputCell> = (0..COLUMN_COUNT)
            .map(|_| OutputCell::empty(CellStyle::Bold))
            .collect();
        cells[2] = OutputCell::text(i18n::subtotal_label(&self.locale), CellStyle::Bold);
        cells[6] = OutputCell::formula(
            format!("=SUM(G{}:G{})", first_excel_row, last_excel_row),
            CellStyle::BoldPrecision,
        );
        OutputRow {
            index,
            style: CellStyle::Bold,
            cells,
        }
    }
}

fn record_row(index: u32, sequence: u32, info: &MaterialInfo, cost: OutputCell) -> OutputRow {
    let bold = info.material.is_main_supplier();
    let plain = CellStyle::compose(bold, false);
    let precision = CellStyle::compose(bold, true);

    OutputRow {
        index,
        style: plain,
        cells: vec![
            OutputCell::number(f64::from(sequence), plain),
            OutputCell::text(info.material.supplier.clone(), plain),
            OutputCell::text(info.material.name.clone(), plain),
            OutputCell::text(info.material.units.clone(), plain),
            OutputCell::number(info.amount, plain),
            OutputCell::number(info.material.price, precision),
            cost,
        ],
    }
}

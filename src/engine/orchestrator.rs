// ==========================================
// 采购明细汇总报表 - 工作簿处理器
// ==========================================
// 职责: 逐表驱动 聚合 → 生成报表行 → 写出
// 隔离: 单表数据错误只影响该表（仅输出表头）
// 红线: 程序缺陷类错误不吞掉,直接终止整次运行
// ==========================================

use crate::config::ReportConfigReader;
use crate::engine::aggregation::AggregationEngine;
use crate::engine::report_writer::ReportRowWriter;
use crate::exporter::sheet_sink::SheetSink;
use crate::importer::error::ReportResult;
use crate::importer::row_parser::RowParser;
use crate::importer::workbook_source::{SourceSheet, WorkbookSource};
use serde::Serialize;
use tracing::{error, info, instrument, warn, Span};
use uuid::Uuid;

/// 单表处理结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SheetOutcome {
    pub name: String,
    pub source_rows: usize,
    pub rows_written: usize, // 不含表头
    pub error: Option<String>,
}

impl SheetOutcome {
    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }
}

/// 整次运行汇总
#[derive(Debug, Clone, Serialize)]
pub struct ProcessSummary {
    pub run_id: String,
    pub strategy: String,
    pub sheets: Vec<SheetOutcome>,
}

impl ProcessSummary {
    pub fn failed_sheets(&self) -> Vec<&str> {
        self.sheets
            .iter()
            .filter(|s| s.is_failed())
            .map(|s| s.name.as_str())
            .collect()
    }
}

// ==========================================
// WorkbookProcessor - 工作簿处理器
// ==========================================
pub struct WorkbookProcessor {
    engine: AggregationEngine,
    writer: ReportRowWriter,
}

impl WorkbookProcessor {
    /// 按配置构建处理器
    pub fn new<C: ReportConfigReader + ?Sized>(config: &C) -> Self {
        let strategy = config.strategy();
        Self {
            engine: AggregationEngine::new(RowParser::new(config.countable_marker()), strategy),
            writer: ReportRowWriter::new(strategy, config.locale()),
        }
    }

    /// 处理整个工作簿
    ///
    /// # 返回
    /// - Ok(ProcessSummary): 每个工作表的处理结果（失败表已输出表头）
    /// - Err: 读取/写出失败或程序缺陷
    #[instrument(skip(self, source, sink), fields(run_id = tracing::field::Empty))]
    pub fn process(
        &self,
        source: &mut dyn WorkbookSource,
        sink: &mut dyn SheetSink,
    ) -> ReportResult<ProcessSummary> {
        let run_id = Uuid::new_v4().to_string();
        Span::current().record("run_id", run_id.as_str());

        let sheets = source.read_sheets()?;
        info!(sheets = sheets.len(), strategy = %self.engine.strategy(), "开始处理");

        let mut outcomes = Vec::with_capacity(sheets.len());
        for sheet in &sheets {
            outcomes.push(self.process_sheet(sheet, sink)?);
        }

        sink.finish()?;

        let failed = outcomes.iter().filter(|o| o.is_failed()).count();
        info!(sheets = outcomes.len(), failed, "处理结束");

        Ok(ProcessSummary {
            run_id,
            strategy: self.engine.strategy().to_string(),
            sheets: outcomes,
        })
    }

    fn process_sheet(
        &self,
        sheet: &SourceSheet,
        sink: &mut dyn SheetSink,
    ) -> ReportResult<SheetOutcome> {
        info!(sheet = %sheet.name, rows = sheet.rows.len(), "开始处理工作表");

        sink.create_sheet(&sheet.name)?;
        sink.write_row(&self.writer.header_row())?;

        // 全部记录计算完毕后才写数据行,失败表不会留下残缺数据
        let infos = match self.engine.aggregate(sheet) {
            Ok(infos) => infos,
            Err(e) if e.is_defect() => {
                error!(sheet = %sheet.name, error = %e, "程序缺陷,终止处理");
                return Err(e);
            }
            Err(e) => {
                warn!(sheet = %sheet.name, error = %e, "工作表处理失败,仅输出表头");
                return Ok(SheetOutcome {
                    name: sheet.name.clone(),
                    source_rows: sheet.rows.len(),
                    rows_written: 0,
                    error: Some(e.to_string()),
                });
            }
        };

        let rows = self.writer.data_rows(&infos);
        for row in &rows {
            sink.write_row(row)?;
        }

        info!(sheet = %sheet.name, records = infos.len(), rows = rows.len(), "工作表处理完成");
        Ok(SheetOutcome {
            name: sheet.name.clone(),
            source_rows: sheet.rows.len(),
            rows_written: rows.len(),
            error: None,
        })
    }
}

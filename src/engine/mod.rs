// ==========================================
// 采购明细汇总报表 - 引擎层
// ==========================================
// 职责: 行规范化与聚合、报表行生成、工作簿处理编排
// ==========================================

pub mod aggregation;
pub mod orchestrator;
pub mod report_writer;
pub mod strategy;

pub use aggregation::AggregationEngine;
pub use orchestrator::{ProcessSummary, SheetOutcome, WorkbookProcessor};
pub use report_writer::ReportRowWriter;
pub use strategy::ReportStrategy;

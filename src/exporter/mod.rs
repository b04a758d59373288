// ==========================================
// 采购明细汇总报表 - 导出层
// ==========================================
// 职责: 将报表行写入输出工作簿
// 支持: XLSX（rust_xlsxwriter）, 内存（测试）
// ==========================================

pub mod memory_sink;
pub mod sheet_sink;
pub mod xlsx_sink;

pub use memory_sink::{MemorySheet, MemorySheetSink};
pub use sheet_sink::SheetSink;
pub use xlsx_sink::{output_path_for, StyleSettings, XlsxSheetSink};

// ==========================================
// 采购明细汇总报表 - 导入层
// ==========================================
// 职责: 外部表格读取 → 单元格清洗 → 单位解析 → 行解析
// 支持: Excel, CSV, 内存数据
// ==========================================

pub mod data_cleaner;
pub mod error;
pub mod file_parser;
pub mod row_parser;
pub mod unit_parser;
pub mod workbook_source;

pub use error::{ReportError, ReportResult};
pub use file_parser::{CsvWorkbookSource, ExcelWorkbookSource, UniversalFileParser};
pub use row_parser::RowParser;
pub use unit_parser::{parse_unit, UnitSpec};
pub use workbook_source::{MemoryWorkbookSource, SourceRow, SourceSheet, WorkbookSource};

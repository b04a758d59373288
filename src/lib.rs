// ==========================================
// 采购明细汇总报表 - 核心库
// ==========================================
// 技术栈: Rust + calamine + rust_xlsxwriter
// 系统定位: 采购明细 → 规范化、聚合、带样式的汇总报表
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "ru");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 物料与输出单元格
pub mod domain;

// 导入层 - 表格读取与行解析
pub mod importer;

// 引擎层 - 聚合与报表生成
pub mod engine;

// 导出层 - 输出工作簿
pub mod exporter;

// 配置层 - 报表配置
pub mod config;

// 问题文件留存
pub mod diagnostics;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// ==========================================
// 重导出核心类型
// ==========================================

pub use config::{ConfigManager, ReportConfig, ReportConfigReader};
pub use domain::{CellStyle, CellValue, Material, MaterialInfo, MaterialInfoBuilder, OutputRow};
pub use engine::{
    AggregationEngine, ProcessSummary, ReportRowWriter, ReportStrategy, SheetOutcome,
    WorkbookProcessor,
};
pub use exporter::{MemorySheetSink, SheetSink, XlsxSheetSink};
pub use importer::{
    MemoryWorkbookSource, ReportError, ReportResult, RowParser, UniversalFileParser,
    WorkbookSource,
};

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "procurement-report";

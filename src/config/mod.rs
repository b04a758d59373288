// ==========================================
// 采购明细汇总报表 - 配置层
// ==========================================
// 职责: 报表配置管理,支持文件/环境变量/命令行多级覆写
// 存储: JSON 文件
// ==========================================

pub mod config_manager;
pub mod report_config;
pub mod report_config_trait;

// 重导出核心配置管理器
pub use config_manager::{config_keys, ConfigManager};
pub use report_config::ReportConfig;
pub use report_config_trait::ReportConfigReader;

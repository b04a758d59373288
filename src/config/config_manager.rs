// ==========================================
// 采购明细汇总报表 - 配置管理器
// ==========================================
// 职责: 配置加载、查询、覆写管理
// 优先级: 命令行 > 环境变量 > 配置文件 > 默认值
// ==========================================

use crate::config::report_config::ReportConfig;
use crate::config::report_config_trait::ReportConfigReader;
use crate::engine::strategy::ReportStrategy;
use crate::exporter::xlsx_sink::StyleSettings;
use crate::i18n;
use crate::importer::error::{ReportError, ReportResult};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// 环境变量键
pub mod config_keys {
    pub const STRATEGY: &str = "PROCUREMENT_REPORT_STRATEGY";
    pub const LOCALE: &str = "PROCUREMENT_REPORT_LOCALE";
    pub const PROBLEM_DIR: &str = "PROCUREMENT_REPORT_PROBLEM_DIR";

    /// 默认配置文件位置: <config_dir>/procurement-report/config.json
    pub const APP_DIR: &str = crate::APP_NAME;
    pub const FILE_NAME: &str = "config.json";
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ConfigManager {
    config: ReportConfig,
    source: Option<PathBuf>,
}

impl ConfigManager {
    /// 默认配置
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: ReportConfig) -> Self {
        Self {
            config,
            source: None,
        }
    }

    /// 加载配置并应用环境变量覆写
    ///
    /// # 参数
    /// - path: 显式配置文件路径;None 时尝试默认位置,不存在则使用默认值
    pub fn load(path: Option<&Path>) -> ReportResult<Self> {
        let mut manager = match path {
            Some(p) => Self::from_file(p)?,
            None => match Self::default_config_path().filter(|p| p.exists()) {
                Some(p) => Self::from_file(&p)?,
                None => {
                    debug!("未找到配置文件,使用默认配置");
                    Self::new()
                }
            },
        };

        manager.apply_overrides(|key| std::env::var(key).ok())?;
        manager.validate()?;
        Ok(manager)
    }

    /// 从 JSON 文件读取配置
    pub fn from_file(path: &Path) -> ReportResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| ReportError::ConfigReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let config: ReportConfig =
            serde_json::from_str(&raw).map_err(|e| ReportError::ConfigReadError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        info!(path = %path.display(), "配置文件已加载");
        Ok(Self {
            config,
            source: Some(path.to_path_buf()),
        })
    }

    /// 默认配置文件路径
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(config_keys::APP_DIR).join(config_keys::FILE_NAME))
    }

    /// 应用外部覆写（lookup 通常为环境变量读取）
    pub fn apply_overrides<F>(&mut self, lookup: F) -> ReportResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(config_keys::STRATEGY) {
            self.set_strategy_str(config_keys::STRATEGY, &value)?;
        }
        if let Some(value) = lookup(config_keys::LOCALE) {
            self.config.locale = value.trim().to_string();
        }
        if let Some(value) = lookup(config_keys::PROBLEM_DIR) {
            self.config.problem_files_dir = value.trim().to_string();
        }
        Ok(())
    }

    fn set_strategy_str(&mut self, key: &str, value: &str) -> ReportResult<()> {
        self.config.strategy = value
            .parse::<ReportStrategy>()
            .map_err(|message| ReportError::ConfigValueError {
                key: key.to_string(),
                value: value.to_string(),
                message,
            })?;
        Ok(())
    }

    pub fn set_strategy(&mut self, strategy: ReportStrategy) {
        self.config.strategy = strategy;
    }

    pub fn set_locale(&mut self, locale: &str) -> ReportResult<()> {
        self.config.locale = locale.trim().to_string();
        self.validate()
    }

    /// 校验配置值
    pub fn validate(&self) -> ReportResult<()> {
        if !i18n::is_supported(&self.config.locale) {
            return Err(ReportError::ConfigValueError {
                key: "locale".to_string(),
                value: self.config.locale.clone(),
                message: "不支持的语言".to_string(),
            });
        }
        if !self.config.csv_delimiter.is_ascii() {
            return Err(ReportError::ConfigValueError {
                key: "csv_delimiter".to_string(),
                value: self.config.csv_delimiter.to_string(),
                message: "CSV 分隔符必须为 ASCII 字符".to_string(),
            });
        }
        if !(self.config.font_size > 0.0) {
            return Err(ReportError::ConfigValueError {
                key: "font_size".to_string(),
                value: self.config.font_size.to_string(),
                message: "字号必须为正数".to_string(),
            });
        }
        Ok(())
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// 获取当前配置的快照（JSON格式,用于运行日志）
    pub fn get_config_snapshot(&self) -> ReportResult<String> {
        serde_json::to_string(&self.config).map_err(|e| ReportError::Other(e.into()))
    }
}

impl ReportConfigReader for ConfigManager {
    fn strategy(&self) -> ReportStrategy {
        self.config.strategy
    }

    fn locale(&self) -> String {
        self.config.locale.clone()
    }

    fn countable_marker(&self) -> String {
        self.config.countable_marker.clone()
    }

    fn style_settings(&self) -> StyleSettings {
        self.config.style_settings()
    }

    fn output_suffix(&self) -> String {
        self.config.output_suffix.clone()
    }

    fn problem_files_dir(&self) -> String {
        self.config.problem_files_dir.clone()
    }

    fn csv_delimiter(&self) -> u8 {
        // validate() 保证为 ASCII
        u8::try_from(self.config.csv_delimiter).unwrap_or(b',')
    }
}

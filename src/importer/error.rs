// ==========================================
// 采购明细汇总报表 - 错误类型
// ==========================================
// 工具: thiserror 派生宏
// 分级: 用户数据错误（隔离到工作表） / 程序缺陷（终止整次运行）
// ==========================================

use thiserror::Error;

/// 报表处理错误类型
#[derive(Error, Debug)]
pub enum ReportError {
    // ===== 文件相关错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件格式不支持: {0}（仅支持 .xlsx/.xlsm/.xls/.ods/.csv）")]
    UnsupportedFormat(String),

    #[error("文件读取失败: {0}")]
    FileReadError(String),

    #[error("Excel 解析失败: {0}")]
    ExcelParseError(String),

    #[error("CSV 解析失败: {0}")]
    CsvParseError(String),

    #[error("报表写出失败: {0}")]
    WriteError(String),

    // ===== 数据错误 =====
    #[error("数值格式错误 (工作表 {sheet}, 行 {row}, 列 {column}): {value:?}")]
    MalformedNumber {
        sheet: String,
        row: usize,
        column: usize,
        value: String,
    },

    // ===== 程序缺陷 =====
    #[error("合并了不同物料的记录: {left} / {right}")]
    IncompatibleMerge { left: String, right: String },

    #[error("物料记录缺少字段: {0}")]
    MissingField(&'static str),

    // ===== 配置错误 =====
    #[error("配置读取失败 (path: {path}): {message}")]
    ConfigReadError { path: String, message: String },

    #[error("配置值格式错误 (key: {key}, value: {value}): {message}")]
    ConfigValueError {
        key: String,
        value: String,
        message: String,
    },

    // ===== 通用错误 =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ReportError {
    /// 是否为程序缺陷（不可在工作表级别吞掉）
    pub fn is_defect(&self) -> bool {
        matches!(
            self,
            ReportError::IncompatibleMerge { .. } | ReportError::MissingField(_)
        )
    }
}

impl From<std::io::Error> for ReportError {
    fn from(err: std::io::Error) -> Self {
        ReportError::FileReadError(err.to_string())
    }
}

impl From<csv::Error> for ReportError {
    fn from(err: csv::Error) -> Self {
        ReportError::CsvParseError(err.to_string())
    }
}

impl From<calamine::Error> for ReportError {
    fn from(err: calamine::Error) -> Self {
        ReportError::ExcelParseError(err.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for ReportError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        ReportError::WriteError(err.to_string())
    }
}

/// Result 类型别名
pub type ReportResult<T> = Result<T, ReportError>;

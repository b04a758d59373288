// ==========================================
// 采购明细汇总报表 - 配置读取 Trait
// ==========================================
// 职责: 定义处理流程所需的配置读取接口（不包含实现）
// 红线: 不包含配置写入、不包含业务逻辑
// ==========================================

use crate::engine::strategy::ReportStrategy;
use crate::exporter::xlsx_sink::StyleSettings;

// ==========================================
// ReportConfigReader Trait
// ==========================================
// 用途: 工作簿处理器所需的配置读取接口
// 实现者: ConfigManager
pub trait ReportConfigReader {
    /// 获取输出策略
    ///
    /// # 默认值
    /// - aggregated
    fn strategy(&self) -> ReportStrategy;

    /// 获取表头语言
    ///
    /// # 默认值
    /// - ru
    fn locale(&self) -> String;

    /// 获取计件单位标记
    ///
    /// # 默认值
    /// - шт
    fn countable_marker(&self) -> String;

    /// 获取字体与数字格式设置
    ///
    /// # 默认值
    /// - Times New Roman / 10 / 0.00
    fn style_settings(&self) -> StyleSettings;

    /// 获取输出文件名后缀
    ///
    /// # 默认值
    /// - _processed
    fn output_suffix(&self) -> String;

    /// 获取问题文件留存目录
    ///
    /// # 默认值
    /// - problemFiles
    fn problem_files_dir(&self) -> String;

    /// 获取 CSV 分隔符
    ///
    /// # 默认值
    /// - ,
    fn csv_delimiter(&self) -> u8;
}

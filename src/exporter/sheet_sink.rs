// ==========================================
// 采购明细汇总报表 - 输出工作簿接口
// ==========================================
// 职责: 定义写出端协作接口（不包含实现）
// ==========================================

use crate::domain::types::OutputRow;
use crate::importer::error::ReportResult;

// ==========================================
// SheetSink Trait
// ==========================================
// 用途: 写出端协作接口
// 实现者: XlsxSheetSink, MemorySheetSink
pub trait SheetSink {
    /// 新建工作表,后续行写入该表
    fn create_sheet(&mut self, name: &str) -> ReportResult<()>;

    /// 写入一行到当前工作表
    ///
    /// # 说明
    /// - 单元格样式只能取预注册的四种样式之一
    /// - 行级样式加粗时同时设置行格式
    fn write_row(&mut self, row: &OutputRow) -> ReportResult<()>;

    /// 完成写出（落盘或收尾）
    fn finish(&mut self) -> ReportResult<()>;
}

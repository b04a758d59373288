// ==========================================
// 采购明细汇总报表 - 内存输出工作簿
// ==========================================
// 用途: 测试与预览,保留写入的全部行
// ==========================================

use crate::domain::types::OutputRow;
use crate::exporter::sheet_sink::SheetSink;
use crate::importer::error::{ReportError, ReportResult};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemorySheet {
    pub name: String,
    pub rows: Vec<OutputRow>,
}

impl MemorySheet {
    /// 数据行（不含表头）
    pub fn data_rows(&self) -> &[OutputRow] {
        self.rows.get(1..).unwrap_or(&[])
    }
}

#[derive(Debug, Default)]
pub struct MemorySheetSink {
    sheets: Vec<MemorySheet>,
    finished: bool,
}

impl MemorySheetSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sheets(&self) -> &[MemorySheet] {
        &self.sheets
    }

    pub fn sheet(&self, name: &str) -> Option<&MemorySheet> {
        self.sheets.iter().find(|s| s.name == name)
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl SheetSink for MemorySheetSink {
    fn create_sheet(&mut self, name: &str) -> ReportResult<()> {
        self.sheets.push(MemorySheet {
            name: name.to_string(),
            rows: Vec::new(),
        });
        Ok(())
    }

    fn write_row(&mut self, row: &OutputRow) -> ReportResult<()> {
        let sheet = self
            .sheets
            .last_mut()
            .ok_or_else(|| ReportError::WriteError("尚未创建工作表".to_string()))?;
        sheet.rows.push(row.clone());
        Ok(())
    }

    fn finish(&mut self) -> ReportResult<()> {
        self.finished = true;
        Ok(())
    }
}

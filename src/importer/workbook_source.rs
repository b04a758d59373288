// ==========================================
// 采购明细汇总报表 - 源工作簿接口
// ==========================================
// 职责: 定义读取端协作接口（不包含实现）
// 约定: 每个工作表 = 名称 + 行序列,单元格按 0 基列号取文本
// ==========================================

use crate::importer::data_cleaner::cell_text;
use crate::importer::error::ReportResult;

/// 源数据行
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SourceRow {
    /// 源文件中的行号（1 基,用于错误定位）
    pub number: usize,
    /// 原始单元格文本;None 表示单元格不存在
    pub cells: Vec<Option<String>>,
}

impl SourceRow {
    pub fn new(number: usize, cells: Vec<Option<String>>) -> Self {
        Self { number, cells }
    }

    /// 便于测试构造: 全部单元格均存在
    pub fn from_texts(number: usize, texts: &[&str]) -> Self {
        Self {
            number,
            cells: texts.iter().map(|t| Some(t.to_string())).collect(),
        }
    }

    /// 取单元格文本（去首尾空白,缺失为空串）
    pub fn text(&self, index: usize) -> String {
        cell_text(self.cells.get(index).and_then(|c| c.as_deref()))
    }

    /// 是否整行为空
    pub fn is_blank(&self) -> bool {
        self.cells
            .iter()
            .all(|c| c.as_deref().map_or(true, |v| v.trim().is_empty()))
    }
}

/// 源工作表
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SourceSheet {
    pub name: String,
    pub rows: Vec<SourceRow>,
}

// ==========================================
// WorkbookSource Trait
// ==========================================
// 用途: 读取端协作接口
// 实现者: ExcelWorkbookSource, CsvWorkbookSource, MemoryWorkbookSource
pub trait WorkbookSource {
    /// 按源顺序读出全部工作表（整体物化到内存）
    ///
    /// # 返回
    /// - Ok(Vec<SourceSheet>): 工作表列表
    /// - Err: 文件读取或解析错误（整次运行失败）
    fn read_sheets(&mut self) -> ReportResult<Vec<SourceSheet>>;
}

// ==========================================
// MemoryWorkbookSource - 内存数据源
// ==========================================
// 用途: 测试与已在内存中的数据
#[derive(Debug, Clone, Default)]
pub struct MemoryWorkbookSource {
    sheets: Vec<SourceSheet>,
}

impl MemoryWorkbookSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一个工作表,行号从 1 开始自动编号
    pub fn with_sheet(mut self, name: &str, rows: Vec<Vec<&str>>) -> Self {
        let rows = rows
            .iter()
            .enumerate()
            .map(|(idx, texts)| SourceRow::from_texts(idx + 1, texts))
            .collect();
        self.sheets.push(SourceSheet {
            name: name.to_string(),
            rows,
        });
        self
    }
}

impl WorkbookSource for MemoryWorkbookSource {
    fn read_sheets(&mut self) -> ReportResult<Vec<SourceSheet>> {
        Ok(self.sheets.clone())
    }
}

// ==========================================
// 采购明细汇总报表 - 文件解析器实现
// ==========================================
// 支持: Excel (.xlsx/.xlsm/.xls/.ods) / CSV (.csv)
// 约定: 源文件无表头,第 0 行即数据行
// ==========================================

use crate::importer::error::{ReportError, ReportResult};
use crate::importer::workbook_source::{SourceRow, SourceSheet, WorkbookSource};
use calamine::{open_workbook_auto, Data, Range, Reader};
use csv::ReaderBuilder;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::debug;

const EXCEL_EXTENSIONS: [&str; 4] = ["xlsx", "xlsm", "xls", "ods"];
const SHEET_NAME_MAX_CHARS: usize = 31;
const DEFAULT_SHEET_NAME: &str = "Sheet1";

fn lowercase_extension(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

fn ensure_exists(path: &Path) -> ReportResult<()> {
    if !path.exists() {
        return Err(ReportError::FileNotFound(path.display().to_string()));
    }
    Ok(())
}

// ==========================================
// Excel Source 实现
// ==========================================
pub struct ExcelWorkbookSource {
    path: PathBuf,
}

impl ExcelWorkbookSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl WorkbookSource for ExcelWorkbookSource {
    fn read_sheets(&mut self) -> ReportResult<Vec<SourceSheet>> {
        let path = self.path.as_path();
        ensure_exists(path)?;

        let ext = lowercase_extension(path);
        if !EXCEL_EXTENSIONS.contains(&ext.as_str()) {
            return Err(ReportError::UnsupportedFormat(ext));
        }

        let mut workbook = open_workbook_auto(path)?;

        let mut sheets = Vec::new();
        for sheet_name in workbook.sheet_names() {
            let range = workbook.worksheet_range(&sheet_name)?;
            let rows = range_to_rows(&range);
            debug!(sheet = %sheet_name, rows = rows.len(), "工作表读取完成");
            sheets.push(SourceSheet {
                name: sheet_name,
                rows,
            });
        }

        Ok(sheets)
    }
}

/// Range → 源行（按绝对列号对齐,跳过完全空白的行）
fn range_to_rows(range: &Range<Data>) -> Vec<SourceRow> {
    let (start_row, start_col) = match range.start() {
        Some(start) => start,
        None => return Vec::new(),
    };

    range
        .rows()
        .enumerate()
        .map(|(idx, data_row)| {
            let mut cells: Vec<Option<String>> = vec![None; start_col as usize];
            cells.extend(data_row.iter().map(|cell| match cell {
                Data::Empty => None,
                other => Some(other.to_string()),
            }));
            SourceRow::new(start_row as usize + idx + 1, cells)
        })
        .filter(|row| !row.is_blank())
        .collect()
}

// ==========================================
// CSV Source 实现
// ==========================================
// 单工作表,名称取文件名（不含扩展名）
pub struct CsvWorkbookSource {
    path: PathBuf,
    delimiter: u8,
}

impl CsvWorkbookSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            delimiter: b',',
        }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

impl WorkbookSource for CsvWorkbookSource {
    fn read_sheets(&mut self) -> ReportResult<Vec<SourceSheet>> {
        let path = self.path.as_path();
        ensure_exists(path)?;

        let ext = lowercase_extension(path);
        if ext != "csv" {
            return Err(ReportError::UnsupportedFormat(ext));
        }

        let file = File::open(path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true) // 允许行长度不一致
            .delimiter(self.delimiter)
            .from_reader(file);

        let mut rows = Vec::new();
        for (row_idx, result) in reader.records().enumerate() {
            let record = result?;
            let row = SourceRow::new(
                row_idx + 1,
                record.iter().map(|v| Some(v.to_string())).collect(),
            );

            // 跳过完全空白的行
            if row.is_blank() {
                continue;
            }
            rows.push(row);
        }

        let name = sheet_name_from_stem(
            &path
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_default(),
        );

        Ok(vec![SourceSheet { name, rows }])
    }
}

/// 文件名 → 合法工作表名
///
/// Excel 约束: 不超过 31 个字符;不含 `[]:*?/\`;不以 `'` 开头或结尾;
/// 不得为保留名 History
fn sheet_name_from_stem(stem: &str) -> String {
    let replaced: String = stem
        .chars()
        .map(|c| match c {
            '[' | ']' | ':' | '*' | '?' | '/' | '\\' => '_',
            other => other,
        })
        .collect();
    let truncated: String = replaced
        .trim_start_matches('\'')
        .chars()
        .take(SHEET_NAME_MAX_CHARS)
        .collect();
    let name = truncated.trim_end_matches('\'').trim();

    if name.is_empty() {
        DEFAULT_SHEET_NAME.to_string()
    } else if name.eq_ignore_ascii_case("history") {
        format!("{}_", name)
    } else {
        name.to_string()
    }
}

// ==========================================
// 通用文件解析器（根据扩展名自动选择）
// ==========================================
pub struct UniversalFileParser {
    csv_delimiter: u8,
}

impl Default for UniversalFileParser {
    fn default() -> Self {
        Self {
            csv_delimiter: b',',
        }
    }
}

impl UniversalFileParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_csv_delimiter(mut self, delimiter: u8) -> Self {
        self.csv_delimiter = delimiter;
        self
    }

    pub fn open<P: AsRef<Path>>(&self, file_path: P) -> ReportResult<Box<dyn WorkbookSource>> {
        let path = file_path.as_ref();
        let ext = lowercase_extension(path);

        match ext.as_str() {
            "csv" => Ok(Box::new(
                CsvWorkbookSource::new(path).with_delimiter(self.csv_delimiter),
            )),
            e if EXCEL_EXTENSIONS.contains(&e) => Ok(Box::new(ExcelWorkbookSource::new(path))),
            _ => Err(ReportError::UnsupportedFormat(ext)),
        }
    }
}

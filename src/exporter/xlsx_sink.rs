// ==========================================
// 采购明细汇总报表 - XLSX 输出工作簿
// ==========================================
// 工具: rust_xlsxwriter
// 样式: 四种格式在构造时创建一次,按引用复用
// ==========================================

use crate::domain::types::{CellStyle, CellValue, OutputRow};
use crate::exporter::sheet_sink::SheetSink;
use crate::importer::error::{ReportError, ReportResult};
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// 字体与数字格式设置
#[derive(Debug, Clone, PartialEq)]
pub struct StyleSettings {
    pub font_name: String,
    pub font_size: f64,
    pub precision_format: String,
}

impl Default for StyleSettings {
    fn default() -> Self {
        Self {
            font_name: "Times New Roman".to_string(),
            font_size: 10.0,
            precision_format: "0.00".to_string(),
        }
    }
}

/// 预注册样式表
struct StyleTable {
    plain: Format,
    precision: Format,
    bold: Format,
    bold_precision: Format,
}

impl StyleTable {
    fn new(settings: &StyleSettings) -> Self {
        let common = Format::new()
            .set_font_name(settings.font_name.as_str())
            .set_font_size(settings.font_size);
        let bold = common.clone().set_bold();

        Self {
            precision: common
                .clone()
                .set_num_format(settings.precision_format.as_str()),
            bold_precision: bold
                .clone()
                .set_num_format(settings.precision_format.as_str()),
            plain: common,
            bold,
        }
    }

    fn get(&self, style: CellStyle) -> &Format {
        match style {
            CellStyle::Plain => &self.plain,
            CellStyle::Precision => &self.precision,
            CellStyle::Bold => &self.bold,
            CellStyle::BoldPrecision => &self.bold_precision,
        }
    }
}

/// 默认输出路径: `<输入目录>/<文件名><后缀>.xlsx`
pub fn output_path_for(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "report".to_string());
    input.with_file_name(format!("{}{}.xlsx", stem, suffix))
}

pub struct XlsxSheetSink {
    path: PathBuf,
    workbook: Workbook,
    styles: StyleTable,
    current: Option<Worksheet>,
    sheet_count: usize,
}

impl XlsxSheetSink {
    pub fn new<P: AsRef<Path>>(path: P, settings: &StyleSettings) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            workbook: Workbook::new(),
            styles: StyleTable::new(settings),
            current: None,
            sheet_count: 0,
        }
    }

    fn flush_current(&mut self) {
        if let Some(worksheet) = self.current.take() {
            self.workbook.push_worksheet(worksheet);
        }
    }
}

impl SheetSink for XlsxSheetSink {
    fn create_sheet(&mut self, name: &str) -> ReportResult<()> {
        self.flush_current();

        let mut worksheet = Worksheet::new();
        worksheet
            .set_name(name)
            .map_err(|e| ReportError::WriteError(format!("工作表 `{}` 创建失败: {}", name, e)))?;
        self.current = Some(worksheet);
        self.sheet_count += 1;
        debug!(sheet = %name, "输出工作表已创建");
        Ok(())
    }

    fn write_row(&mut self, row: &OutputRow) -> ReportResult<()> {
        let worksheet = self
            .current
            .as_mut()
            .ok_or_else(|| ReportError::WriteError("尚未创建工作表".to_string()))?;

        if row.style.is_bold() {
            worksheet.set_row_format(row.index, self.styles.get(row.style))?;
        }

        for (col, cell) in row.cells.iter().enumerate() {
            let col = col as u16;
            let format = self.styles.get(cell.style);
            match &cell.value {
                CellValue::Text(s) => {
                    worksheet.write_string_with_format(row.index, col, s.as_str(), format)?;
                }
                CellValue::Number(n) => {
                    worksheet.write_number_with_format(row.index, col, *n, format)?;
                }
                CellValue::Formula(f) => {
                    worksheet.write_formula_with_format(row.index, col, f.as_str(), format)?;
                }
                CellValue::Empty => {
                    worksheet.write_blank(row.index, col, format)?;
                }
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> ReportResult<()> {
        self.flush_current();
        self.workbook.save(&self.path)?;
        info!(
            path = %self.path.display(),
            sheets = self.sheet_count,
            "报表已写出"
        );
        Ok(())
    }
}

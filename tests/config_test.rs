// ==========================================
// ConfigManager 集成测试
// ==========================================
// 测试目标: 验证配置文件驱动整个处理流程
// ==========================================

use procurement_report::config::{ConfigManager, ReportConfigReader};
use procurement_report::domain::{CellStyle, CellValue};
use procurement_report::engine::{ReportStrategy, WorkbookProcessor};
use procurement_report::exporter::MemorySheetSink;
use procurement_report::importer::{MemoryWorkbookSource, ReportError};
use std::io::Write;
use tempfile::NamedTempFile;

fn config_file(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    writeln!(file, "{}", json).expect("Failed to write config");
    file
}

#[test]
fn test_load_explicit_file() {
    let file = config_file(r#"{"strategy": "subtotal", "locale": "en", "countable_marker": "pcs"}"#);

    let config = ConfigManager::load(Some(file.path())).unwrap();
    assert_eq!(config.source(), Some(file.path()));
    assert_eq!(config.countable_marker(), "pcs");
    // 未出现的键取默认值
    assert_eq!(config.output_suffix(), "_processed");
    assert_eq!(config.style_settings().font_name, "Times New Roman");
}

#[test]
fn test_load_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let result = ConfigManager::load(Some(&dir.path().join("missing.json")));
    assert!(matches!(result, Err(ReportError::ConfigReadError { .. })));
}

#[test]
fn test_load_rejects_bad_values() {
    let file = config_file(r#"{"locale": "de"}"#);
    assert!(matches!(
        ConfigManager::load(Some(file.path())),
        Err(ReportError::ConfigValueError { .. })
    ));

    let file = config_file(r#"{"font_size": 0}"#);
    assert!(matches!(
        ConfigManager::load(Some(file.path())),
        Err(ReportError::ConfigValueError { .. })
    ));
}

#[test]
fn test_config_drives_processor() {
    let file = config_file(r#"{"strategy": "subtotal", "locale": "en", "countable_marker": "pcs"}"#);
    let mut config = ConfigManager::from_file(file.path()).unwrap();
    assert_eq!(config.strategy(), ReportStrategy::Subtotal);

    let mut source = MemoryWorkbookSource::new().with_sheet(
        "Sheet1",
        vec![
            vec!["1", "Acme", "Bolt", "pcs", "2,6", "1", ""],
            vec!["2", "1-1", "Nut", "kg", "1", "3", ""],
        ],
    );
    let mut sink = MemorySheetSink::new();
    WorkbookProcessor::new(&config)
        .process(&mut source, &mut sink)
        .unwrap();

    let sheet = sink.sheet("Sheet1").unwrap();
    assert_eq!(sheet.rows[0].cells[0].value, CellValue::Text("No.".to_string()));

    // 计件标记来自配置: 2.6 → 3
    assert_eq!(sheet.rows[1].cells[4].value, CellValue::Number(3.0));
    assert_eq!(sheet.rows[1].style, CellStyle::Bold);
    assert_eq!(
        sheet.rows[1].cells[6].value,
        CellValue::Formula("=E2*F2".to_string())
    );
    assert_eq!(sheet.rows[2].cells[2].value, CellValue::Text("Total".to_string()));

    // 命令行覆写
    config.set_strategy(ReportStrategy::Aggregated);
    let mut source = MemoryWorkbookSource::new().with_sheet(
        "Sheet1",
        vec![vec!["1", "Acme", "Bolt", "pcs", "2", "1", ""]],
    );
    let mut sink = MemorySheetSink::new();
    WorkbookProcessor::new(&config)
        .process(&mut source, &mut sink)
        .unwrap();
    assert_eq!(
        sink.sheet("Sheet1").unwrap().rows[1].cells[6].value,
        CellValue::Number(2.0)
    );
}

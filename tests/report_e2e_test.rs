// ==========================================
// 端到端测试: 源文件 → 处理器 → 输出 XLSX
// ==========================================
// 测试目标: 验证真实文件读写下的聚合、排序、样式与工作表隔离
// ==========================================


use procurement_report::config::{ConfigManager, ReportConfig, ReportConfigReader};
use procurement_report::diagnostics::try_preserve_problem_file;
use procurement_report::engine::{ReportStrategy, WorkbookProcessor};
use procurement_report::exporter::{output_path_for, XlsxSheetSink};
use procurement_report::importer::{ReportError, UniversalFileParser};
use procurement_report::logging;
use std::path::{Path, PathBuf};
use test_helpers::{
    number, output_formula, output_sheet_names, output_values, purchase_rows, text,
    write_source_csv, write_source_xlsx,
};

fn config_with(strategy: ReportStrategy, locale: &str) -> ConfigManager {
    ConfigManager::from_config(ReportConfig {
        strategy,
        locale: locale.to_string(),
        ..ReportConfig::default()
    })
}

/// 按 CLI 的方式跑一次完整流程,返回输出路径
fn run(input: &Path, config: &ConfigManager) -> Result<PathBuf, ReportError> {
    let output = output_path_for(input, &config.output_suffix());
    let mut source = UniversalFileParser::new()
        .with_csv_delimiter(config.csv_delimiter())
        .open(input)?;
    let mut sink = XlsxSheetSink::new(&output, &config.style_settings());
    WorkbookProcessor::new(config).process(source.as_mut(), &mut sink)?;
    Ok(output)
}

fn row_texts(row: &[calamine::Data]) -> Vec<String> {
    row.iter().take(4).map(text).collect()
}

fn row_numbers(row: &[calamine::Data]) -> Vec<Option<f64>> {
    row.iter().skip(4).take(3).map(number).collect()
}

#[test]
fn test_xlsx_aggregated_report() {
    logging::init_test();

    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("закупки.xlsx");
    write_source_xlsx(&input, &[("Март", purchase_rows())]).unwrap();

    let output = run(&input, &ConfigManager::new()).unwrap();
    assert_eq!(output, dir.path().join("закупки_processed.xlsx"));

    let rows = output_values(&output, "Март").unwrap();
    assert_eq!(rows.len(), 5, "表头 + 4 条记录");

    assert_eq!(
        rows[0].iter().map(text).collect::<Vec<_>>(),
        vec!["№", "Поставщик", "Наименование", "Ед. измерения", "Количество", "Цена", "Сумма"]
    );

    // 主供应商重复行保留
    assert_eq!(row_texts(&rows[1]), vec!["1", "ООО Ромашка", "Гвозди", "кг"]);
    assert_eq!(row_numbers(&rows[1]), vec![Some(2.0), Some(10.0), Some(20.0)]);
    assert_eq!(row_texts(&rows[2]), vec!["2", "ООО Ромашка", "Гвозди", "кг"]);

    // 次要供应商合并,负数行剔除
    assert_eq!(row_texts(&rows[3]), vec!["3", "12-3", "Болты", "кг"]);
    assert_eq!(row_numbers(&rows[3]), vec![Some(3.5), Some(4.0), Some(14.0)]);

    // 倍数换算 + 计件取整
    assert_eq!(row_texts(&rows[4]), vec!["4", "1-1", "Дюбель", "шт"]);
    assert_eq!(row_numbers(&rows[4]), vec![Some(25.0), Some(5.0), Some(125.0)]);
}

#[test]
fn test_multiplier_scenario_matches_unit_conversion() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("nails.xlsx");
    write_source_xlsx(
        &input,
        &[(
            "Лист1",
            vec![
                vec!["1", "ООО А", "Гвозди", "10 кг", "2", "100", ""],
                vec!["2", "1-1", "Гвозди", "10 кг", "1", "100", ""],
                vec!["3", "1-1", "Гвозди", "10 кг", "1", "100", ""],
            ],
        )],
    )
    .unwrap();

    let output = run(&input, &ConfigManager::new()).unwrap();
    let rows = output_values(&output, "Лист1").unwrap();

    assert_eq!(rows.len(), 3);
    assert_eq!(row_texts(&rows[1]), vec!["1", "ООО А", "Гвозди", "кг"]);
    assert_eq!(row_numbers(&rows[1]), vec![Some(20.0), Some(10.0), Some(200.0)]);
    assert_eq!(row_texts(&rows[2]), vec!["2", "1-1", "Гвозди", "кг"]);
    assert_eq!(row_numbers(&rows[2]), vec![Some(20.0), Some(10.0), Some(200.0)]);
}

#[test]
fn test_failed_sheet_is_isolated() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("multi.xlsx");
    write_source_xlsx(
        &input,
        &[
            (
                "Плохой",
                vec![
                    vec!["1", "ООО А", "Гвозди", "кг", "1", "10", ""],
                    vec!["2", "ООО А", "Шурупы", "кг", "1", "дорого", ""],
                ],
            ),
            ("Пустой", vec![]),
            ("Хороший", purchase_rows()),
        ],
    )
    .unwrap();

    let config = ConfigManager::new();
    let output = output_path_for(&input, &config.output_suffix());
    let mut source = UniversalFileParser::new().open(&input).unwrap();
    let mut sink = XlsxSheetSink::new(&output, &config.style_settings());
    let summary = WorkbookProcessor::new(&config)
        .process(source.as_mut(), &mut sink)
        .unwrap();

    assert_eq!(summary.failed_sheets(), vec!["Плохой"]);
    assert!(summary.sheets[0]
        .error
        .as_deref()
        .unwrap_or_default()
        .contains("дорого"));

    // 源工作表顺序与名称保持不变
    assert_eq!(
        output_sheet_names(&output).unwrap(),
        vec!["Плохой", "Пустой", "Хороший"]
    );
    assert_eq!(output_values(&output, "Плохой").unwrap().len(), 1);
    assert_eq!(output_values(&output, "Пустой").unwrap().len(), 1);
    assert_eq!(output_values(&output, "Хороший").unwrap().len(), 5);
}

#[test]
fn test_csv_and_xlsx_produce_same_report() {
    let dir = tempfile::tempdir().unwrap();
    let xlsx = dir.path().join("list.xlsx");
    let csv = dir.path().join("list.csv");
    write_source_xlsx(&xlsx, &[("list", purchase_rows())]).unwrap();
    write_source_csv(&csv, &purchase_rows()).unwrap();

    let config = ConfigManager::new();
    let from_xlsx = output_values(&run(&xlsx, &config).unwrap(), "list").unwrap();

    // 两个输入的输出路径相同,先读出再覆盖
    let from_csv = output_values(&run(&csv, &config).unwrap(), "list").unwrap();

    assert_eq!(from_xlsx, from_csv);
}

#[test]
fn test_subtotal_strategy_writes_formulas() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("subtotal.xlsx");
    write_source_xlsx(&input, &[("Лист1", purchase_rows())]).unwrap();

    let output = run(&input, &config_with(ReportStrategy::Subtotal, "ru")).unwrap();
    let rows = output_values(&output, "Лист1").unwrap();

    // 表头 + 2 主 + 小计 + 2 次 + 小计
    assert_eq!(rows.len(), 7);
    assert_eq!(text(&rows[3][2]), "Итого");
    assert_eq!(text(&rows[6][2]), "Итого");

    // 序号只计数据行
    assert_eq!(number(&rows[4][0]), Some(3.0));
    assert_eq!(number(&rows[5][0]), Some(4.0));

    assert_eq!(
        output_formula(&output, "Лист1", 1, 6).unwrap().as_deref(),
        Some("E2*F2")
    );
    assert_eq!(
        output_formula(&output, "Лист1", 3, 6).unwrap().as_deref(),
        Some("SUM(G2:G3)")
    );
    assert_eq!(
        output_formula(&output, "Лист1", 6, 6).unwrap().as_deref(),
        Some("SUM(G5:G6)")
    );
}

#[test]
fn test_per_row_strategy_keeps_every_row() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("per_row.xlsx");
    write_source_xlsx(&input, &[("Лист1", purchase_rows())]).unwrap();

    let output = run(&input, &config_with(ReportStrategy::PerRow, "ru")).unwrap();
    let rows = output_values(&output, "Лист1").unwrap();

    // 仅负数行被剔除
    assert_eq!(rows.len(), 7);
    assert_eq!(row_texts(&rows[1]), vec!["1", "ООО Ромашка", "Анкер", "шт"]);
    assert_eq!(number(&rows[1][6]), Some(0.0));
    assert_eq!(row_texts(&rows[4]), vec!["4", "12-3", "Болты", "кг"]);
    assert_eq!(row_texts(&rows[5]), vec!["5", "12-3", "Болты", "кг"]);
}

#[test]
fn test_english_headers() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("en.csv");
    write_source_csv(&input, &purchase_rows()).unwrap();

    let output = run(&input, &config_with(ReportStrategy::Aggregated, "en")).unwrap();
    let rows = output_values(&output, "en").unwrap();

    assert_eq!(
        rows[0].iter().map(text).collect::<Vec<_>>(),
        vec!["No.", "Supplier", "Name", "Units", "Quantity", "Price", "Sum"]
    );
}

#[test]
fn test_unreadable_input_is_preserved() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("broken.xlsx");
    std::fs::write(&input, b"not a workbook").unwrap();

    let err = run(&input, &ConfigManager::new()).unwrap_err();
    assert!(!err.is_defect());

    let problem_dir = dir.path().join("problemFiles");
    let preserved = try_preserve_problem_file(&input, &problem_dir).unwrap();
    assert!(preserved.starts_with(&problem_dir));
    assert!(preserved
        .file_name()
        .unwrap()
        .to_string_lossy()
        .starts_with("broken ("));
}

#[test]
fn test_unsupported_extension() {
    let err = UniversalFileParser::new().open("report.docx").err().unwrap();
    assert!(matches!(err, ReportError::UnsupportedFormat(ext) if ext == "docx"));
}

#[test]
fn test_semicolon_csv_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("semicolon.csv");
    std::fs::write(
        &input,
        "1;ООО Ромашка;Гвозди;кг;2;10;20\n2;12-3;Болты;кг;1,5;4;6\n",
    )
    .unwrap();

    let config = ConfigManager::from_config(ReportConfig {
        csv_delimiter: ';',
        ..ReportConfig::default()
    });
    let output = run(&input, &config).unwrap();
    let rows = output_values(&output, "semicolon").unwrap();

    assert_eq!(rows.len(), 3);
    assert_eq!(row_texts(&rows[2]), vec!["2", "12-3", "Болты", "кг"]);
    assert_eq!(row_numbers(&rows[2]), vec![Some(1.5), Some(4.0), Some(6.0)]);
}

#[test]
fn test_long_csv_name_still_writes_report() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir
        .path()
        .join("Закупки строительных материалов [март 2024].csv");
    write_source_csv(&input, &purchase_rows()).unwrap();

    let output = run(&input, &ConfigManager::new()).unwrap();
    assert_eq!(
        output_sheet_names(&output).unwrap(),
        vec!["Закупки строительных материалов"]
    );
}

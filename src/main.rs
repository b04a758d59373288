// ==========================================
// 采购明细汇总报表 - 命令行入口
// ==========================================
// 用法: procurement-report <INPUT> [--output PATH] [--config PATH]
//                          [--strategy NAME] [--locale ru|en]
// ==========================================

use anyhow::Context;
use clap::Parser;
use procurement_report::config::{ConfigManager, ReportConfigReader};
use procurement_report::diagnostics::try_preserve_problem_file;
use procurement_report::engine::{ReportStrategy, WorkbookProcessor};
use procurement_report::exporter::{output_path_for, XlsxSheetSink};
use procurement_report::importer::UniversalFileParser;
use procurement_report::logging;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "procurement-report", version, about = "采购明细汇总报表")]
struct Cli {
    /// 输入文件（.xlsx/.xlsm/.xls/.ods/.csv）
    input: PathBuf,

    /// 输出文件（默认: <输入目录>/<文件名>_processed.xlsx）
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// 配置文件（JSON）
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 输出策略: aggregated / per_row / subtotal
    #[arg(short, long)]
    strategy: Option<ReportStrategy>,

    /// 表头语言: ru / en
    #[arg(short, long)]
    locale: Option<String>,

    /// 以 JSON 格式输出日志
    #[arg(long)]
    json_log: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.json_log);

    tracing::info!("==================================================");
    tracing::info!("采购明细汇总报表 v{}", procurement_report::VERSION);
    tracing::info!("==================================================");

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %format!("{:#}", e), "配置加载失败");
            return ExitCode::FAILURE;
        }
    };

    match run(&cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %format!("{:#}", e), "处理失败");
            try_preserve_problem_file(&cli.input, Path::new(&config.problem_files_dir()));
            ExitCode::FAILURE
        }
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<ConfigManager> {
    let mut config = ConfigManager::load(cli.config.as_deref()).context("读取配置失败")?;
    if let Some(strategy) = cli.strategy {
        config.set_strategy(strategy);
    }
    if let Some(locale) = &cli.locale {
        config.set_locale(locale).context("语言参数无效")?;
    }
    match config.source() {
        Some(path) => tracing::info!(path = %path.display(), "使用配置文件"),
        None => tracing::info!("使用默认配置"),
    }
    tracing::debug!(config = %config.get_config_snapshot()?, "当前配置");
    Ok(config)
}

fn run(cli: &Cli, config: &ConfigManager) -> anyhow::Result<()> {
    tracing::info!(input = %cli.input.display(), "已选择输入文件");

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| output_path_for(&cli.input, &config.output_suffix()));

    let mut source = UniversalFileParser::new()
        .with_csv_delimiter(config.csv_delimiter())
        .open(&cli.input)
        .with_context(|| format!("无法打开 `{}`", cli.input.display()))?;
    let mut sink = XlsxSheetSink::new(&output, &config.style_settings());

    let summary = WorkbookProcessor::new(config)
        .process(source.as_mut(), &mut sink)
        .context("工作簿处理失败")?;

    let failed = summary.failed_sheets();
    if !failed.is_empty() {
        tracing::warn!(sheets = ?failed, "以下工作表仅输出表头");
    }
    tracing::info!(output = %output.display(), run_id = %summary.run_id, "完成");
    Ok(())
}

//! Haulbook report generator.
//!
//! Reads a JSON array of transport ledger entries, builds the transport
//! report, and writes it as a JSON document and/or a CSV spreadsheet.
//!
//! Usage: haulbook-report --input entries.json --from 2024-03-01 --to 2024-03-31

mod input;
mod render;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use haulbook_core::reports::{ReportRenderer, ReportService, TransportReport, render_report};
use haulbook_shared::types::CurrencyFormat;
use haulbook_shared::{AppConfig, AppError, TableWidthMode};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::render::{CsvExporter, JsonDocumentRenderer};

/// Generate a transport billing report from ledger entries.
#[derive(Parser, Debug)]
#[command(name = "haulbook-report")]
#[command(version, about, long_about = None)]
struct Cli {
    /// JSON file containing an array of ledger entries
    #[arg(short, long)]
    input: PathBuf,

    /// First day of the report period (defaults to the earliest entry)
    #[arg(long)]
    from: Option<NaiveDate>,

    /// Last day of the report period (defaults to the latest entry)
    #[arg(long)]
    to: Option<NaiveDate>,

    /// Directory to write report files to
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Which outputs to produce
    #[arg(long, value_enum, default_value_t = OutputFormat::All)]
    format: OutputFormat,

    /// Decimal places for distribution percentages
    #[arg(long)]
    precision: Option<u32>,

    /// Let the renderer size table columns to their content
    #[arg(long)]
    auto_fit: bool,

    /// Use the textual currency prefix ("Rs. ") instead of the glyph
    #[arg(long)]
    text_currency: bool,
}

/// Output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// JSON document with styling hints
    Json,
    /// CSV spreadsheet of the detail table
    Csv,
    /// Both
    All,
}

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "haulbook=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = err.downcast_ref::<AppError>().map_or(1, AppError::exit_code);
            error!(error = %format!("{err:#}"), code, "report generation failed");
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = AppConfig::load().map_err(AppError::from)?;
    if let Some(precision) = cli.precision {
        config.report.percentage_precision = precision;
    }
    if cli.auto_fit {
        config.report.presentation.table_width_mode = TableWidthMode::AutoFit;
    }
    if cli.text_currency {
        config.report.currency = CurrencyFormat::rupee_text();
    }
    let output_dir = cli.output_dir.unwrap_or(config.output.dir);

    let entries = input::load_entries(&cli.input)?;
    let period = input::resolve_period(&entries, cli.from, cli.to)?;

    let report = ReportService::generate(&entries, period, &config.report);
    info!(
        entries = entries.len(),
        period = %report.period_label,
        file_name = %report.file_name,
        "report generated"
    );

    std::fs::create_dir_all(&output_dir)
        .map_err(|e| AppError::Export(format!("{}: {e}", output_dir.display())))?;

    if matches!(cli.format, OutputFormat::Json | OutputFormat::All) {
        let path = output_path(&output_dir, &report, "json");
        let mut renderer = JsonDocumentRenderer::create(&path).map_err(export_error)?;
        write_output(&mut renderer, &report, &path)?;
    }
    if matches!(cli.format, OutputFormat::Csv | OutputFormat::All) {
        let path = output_path(&output_dir, &report, "csv");
        let mut exporter = CsvExporter::create(&path).map_err(export_error)?;
        write_output(&mut exporter, &report, &path)?;
    }

    Ok(())
}

fn output_path(dir: &Path, report: &TransportReport, extension: &str) -> PathBuf {
    dir.join(format!("{}.{extension}", report.file_name))
}

fn write_output(
    renderer: &mut dyn ReportRenderer,
    report: &TransportReport,
    path: &Path,
) -> anyhow::Result<()> {
    render_report(renderer, report)
        .map_err(export_error)
        .with_context(|| format!("writing {}", path.display()))?;
    info!(path = %path.display(), "report written");
    Ok(())
}

fn export_error(err: haulbook_core::reports::ReportError) -> AppError {
    AppError::Export(err.to_string())
}

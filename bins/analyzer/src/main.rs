//! BudgetLens analyzer
//!
//! Loads a project catalog and budget ledger, runs the budget analysis
//! engine, and prints the result.
//!
//! Usage:
//!   budgetlens --projects projects.json --records records.json [--format json]

mod input;
mod render;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use budgetlens_core::BudgetAnalyzer;
use budgetlens_core::history::monthly_spend;
use budgetlens_shared::config::LoggingConfig;
use budgetlens_shared::{AppConfig, AppError, OutputFormat};

use render::Report;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(
    name = "budgetlens",
    version,
    about = "Analyze project budgets against the expense ledger"
)]
struct Cli {
    /// Project catalog: a JSON array of projects.
    #[arg(short, long)]
    projects: PathBuf,
    /// Budget ledger: a JSON array of budget records.
    #[arg(short, long)]
    records: PathBuf,
    /// Output format (text or json); overrides `report.format`.
    #[arg(short, long)]
    format: Option<OutputFormat>,
    /// Currency code for text output; overrides `report.currency`.
    #[arg(short, long)]
    currency: Option<String>,
    /// Omit the monthly spend history.
    #[arg(long)]
    no_history: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(
                code = error_code(&err),
                error = %format!("{err:#}"),
                "Analysis failed"
            );
            eprintln!("error: {err:#}");
            ExitCode::from(exit_code(&err))
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;
    init_tracing(&config.logging);

    let format = cli.format.unwrap_or(config.report.format);
    let currency = cli.currency.unwrap_or(config.report.currency);

    let (projects, records) = input::load_inputs(&cli.projects, &cli.records)
        .await
        .context("Failed to load analysis inputs")?;
    info!(
        projects = projects.len(),
        records = records.len(),
        "Loaded project catalog and budget ledger"
    );

    let analysis = BudgetAnalyzer::analyze(&projects, &records);
    let history = if cli.no_history {
        Vec::new()
    } else {
        monthly_spend(&records)
    };
    info!(
        trend = %analysis.budget_trend,
        utilization = %analysis.utilization_rate.round_dp(2),
        months = history.len(),
        "Analysis complete"
    );

    let report = Report {
        analysis: &analysis,
        monthly_spend: &history,
    };
    let output = match format {
        OutputFormat::Json => render::render_json(&report).context("Failed to encode report")?,
        OutputFormat::Text => render::render_text(&report, &currency),
    };
    println!("{output}");

    Ok(())
}

/// Machine-readable code of the underlying `AppError`, if any.
fn error_code(err: &anyhow::Error) -> &'static str {
    err.downcast_ref::<AppError>()
        .map_or("INTERNAL_ERROR", AppError::error_code)
}

fn exit_code(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<AppError>().map_or(1, AppError::exit_code)
}

/// Initializes tracing; `RUST_LOG` overrides the configured filter.
/// Logs go to stderr so stdout carries only the report.
fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter));
    let registry = tracing_subscriber::registry().with(filter);

    if logging.json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

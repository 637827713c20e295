//! pricewatch CLI — scan exported price-signal emails and raise high-price alerts.
//!
//! Invoked with no arguments it reads `ifttt/price_signals.txt` under the
//! platform's synced folder, evaluates the most recent signal against today
//! and tomorrow, and drops an alert marker into `Public/OGE Price Signals/`
//! when the price is high and has not been alerted before.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use pricewatch_core::{run, AlertOutcome, Config, ConfigOverrides, RunReport};

#[derive(Parser)]
#[command(
    name = "pricewatch",
    about = "pricewatch — one-shot high electric price alerts from price-signal emails"
)]
struct Cli {
    /// TOML file overriding the root or individual file paths.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Synced-folder root. Defaults to the platform's Dropbox folder.
    #[arg(long)]
    root: Option<PathBuf>,

    /// Evaluate as if today were this date (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    today: Option<String>,

    /// Log signal count, average price and the most recent signal.
    #[arg(long, default_value_t = false)]
    summary: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();

    let config = resolve_config(&cli)?;
    let today = cli
        .today
        .as_deref()
        .map(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d"))
        .transpose()
        .context("--today must be YYYY-MM-DD")?
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    log::debug!("input: {}", config.input_file.display());
    log::debug!("markers: {}", config.marker_dir.display());
    log::debug!("history: {}", config.history_file.display());

    let report = run(&config, today)
        .with_context(|| format!("price check failed for {}", config.input_file.display()))?;

    if cli.summary {
        print_summary(&report);
    }
    report_outcome(&report);

    Ok(())
}

fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut overrides = match &cli.config {
        Some(path) => ConfigOverrides::from_file(path)?,
        None => ConfigOverrides::default(),
    };
    if let Some(root) = &cli.root {
        overrides.root = Some(root.clone());
    }

    let base = match &overrides.root {
        // The platform root is irrelevant when it is overridden.
        Some(root) => Config::from_root(root),
        None => Config::for_platform().context("resolving synced-folder root")?,
    };
    Ok(base.with_overrides(&overrides))
}

fn print_summary(report: &RunReport) {
    let signals = &report.extraction.signals;
    log::info!(
        "{} signal(s), {} unparsed block(s)",
        signals.len(),
        report.extraction.errors.len()
    );
    if let Some(avg) = report.average_price() {
        log::info!("average price: {avg:.2} cents");
    }
    if let Some(last) = report.most_recent() {
        log::info!("most recent: {} at {:.2} cents", last.date, last.price);
    }
}

fn report_outcome(report: &RunReport) {
    match &report.outcome {
        Some(AlertOutcome::Fired { marker }) => {
            println!("Alert written: {}", marker.display());
        }
        Some(AlertOutcome::AlreadyAlerted) => log::info!("most recent signal was already alerted"),
        Some(AlertOutcome::BelowThreshold) => log::info!("most recent price is not high"),
        Some(AlertOutcome::OutsideWindow) => {
            log::info!("most recent signal is not for today or tomorrow")
        }
        None => {}
    }
}

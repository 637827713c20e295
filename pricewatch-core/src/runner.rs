//! One pass of the pipeline: extract, pick the most recent signal, alert.

use chrono::NaiveDate;

use crate::aggregate::{average_price, most_recent_price};
use crate::alert::{high_price_alert, AlertEvaluator, AlertOutcome};
use crate::config::Config;
use crate::domain::PriceSignal;
use crate::error::PriceWatchError;
use crate::extract::{read_signals, Extraction};
use crate::history::AlertHistory;

/// What a run saw and did.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub extraction: Extraction,
    /// `None` when the input held no signals, so nothing was evaluated.
    pub outcome: Option<AlertOutcome>,
}

impl RunReport {
    /// Mean price over the extracted signals, if any.
    pub fn average_price(&self) -> Option<f64> {
        average_price(&self.extraction.signals).ok()
    }

    /// The signal the alert was evaluated on, if any.
    pub fn most_recent(&self) -> Option<&PriceSignal> {
        most_recent_price(&self.extraction.signals).ok()
    }
}

/// Read the input file named by `config` and evaluate its most recent signal
/// as of `today`.
pub fn run(config: &Config, today: NaiveDate) -> Result<RunReport, PriceWatchError> {
    let extraction = read_signals(&config.input_file)?;

    if extraction.signals.is_empty() {
        log::warn!(
            "no price signals found in {}, nothing to evaluate",
            config.input_file.display()
        );
        return Ok(RunReport {
            extraction,
            outcome: None,
        });
    }

    let evaluator = AlertEvaluator::new(&config.marker_dir);
    let history = AlertHistory::new(&config.history_file);
    let outcome = high_price_alert(&extraction.signals, today, &evaluator, &history)?;
    log::debug!("alert outcome: {outcome:?}");

    Ok(RunReport {
        extraction,
        outcome: Some(outcome),
    })
}

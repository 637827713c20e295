//! High-price alert evaluation.
//!
//! An alert is an empty file whose name is the message, dropped into a folder
//! an external automation watches. It fires at most once per signal: the
//! alert history is checked before the marker is written and updated after.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Days, NaiveDate};

use crate::aggregate::most_recent_price;
use crate::domain::PriceSignal;
use crate::error::PriceWatchError;
use crate::history::AlertHistory;

/// Dollar price above which a signal is worth an alert.
pub const ALERT_THRESHOLD_DOLLARS: f64 = 0.15;

/// What an evaluation did.
#[derive(Debug, Clone, PartialEq)]
pub enum AlertOutcome {
    /// Marker written and the signal recorded in history.
    Fired { marker: PathBuf },
    /// Condition held but the signal was alerted on an earlier run.
    AlreadyAlerted,
    /// Dated today or tomorrow, but not above the threshold.
    BelowThreshold,
    /// Dated neither today nor tomorrow.
    OutsideWindow,
}

impl AlertOutcome {
    pub fn fired(&self) -> bool {
        matches!(self, AlertOutcome::Fired { .. })
    }
}

/// `HIGH ELECTRIC PRICE of $0.46 on 2012-07-16`
pub fn alert_title(signal: &PriceSignal) -> String {
    format!(
        "HIGH ELECTRIC PRICE of ${:.2} on {}",
        signal.dollars(),
        signal.date
    )
}

fn in_window(signal: &PriceSignal, today: NaiveDate) -> bool {
    signal.date == today || today.checked_add_days(Days::new(1)) == Some(signal.date)
}

/// Dated today or tomorrow and priced above the threshold.
pub fn is_alert_condition(signal: &PriceSignal, today: NaiveDate) -> bool {
    in_window(signal, today) && signal.dollars() > ALERT_THRESHOLD_DOLLARS
}

/// Writes alert markers into a single directory.
#[derive(Debug, Clone)]
pub struct AlertEvaluator {
    marker_dir: PathBuf,
}

impl AlertEvaluator {
    pub fn new(marker_dir: impl Into<PathBuf>) -> Self {
        Self {
            marker_dir: marker_dir.into(),
        }
    }

    pub fn marker_dir(&self) -> &Path {
        &self.marker_dir
    }

    /// Marker path for `signal`.
    pub fn marker_path(&self, signal: &PriceSignal) -> PathBuf {
        self.marker_dir.join(format!("{}.txt", alert_title(signal)))
    }

    /// Decide on `signal` and, when it is new and qualifies, write the marker
    /// and record it in `history`.
    pub fn evaluate(
        &self,
        signal: &PriceSignal,
        today: NaiveDate,
        history: &AlertHistory,
    ) -> Result<AlertOutcome, PriceWatchError> {
        if !in_window(signal, today) {
            return Ok(AlertOutcome::OutsideWindow);
        }
        if !is_alert_condition(signal, today) {
            return Ok(AlertOutcome::BelowThreshold);
        }
        if history.contains(signal)? {
            log::info!("already alerted: {}", alert_title(signal));
            return Ok(AlertOutcome::AlreadyAlerted);
        }

        fs::create_dir_all(&self.marker_dir)
            .map_err(|e| PriceWatchError::io(&self.marker_dir, e))?;
        let marker = self.marker_path(signal);
        fs::File::create(&marker).map_err(|e| PriceWatchError::io(&marker, e))?;

        history.append(*signal)?;

        log::info!("alert raised: {}", marker.display());
        Ok(AlertOutcome::Fired { marker })
    }
}

/// Evaluate the most recent signal of `signals`.
pub fn high_price_alert(
    signals: &[PriceSignal],
    today: NaiveDate,
    evaluator: &AlertEvaluator,
    history: &AlertHistory,
) -> Result<AlertOutcome, PriceWatchError> {
    let most_recent = most_recent_price(signals)?;
    evaluator.evaluate(most_recent, today, history)
}

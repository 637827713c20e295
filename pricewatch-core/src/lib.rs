//! pricewatch core — price-signal extraction and one-shot high-price alerts.
//!
//! This crate contains the whole pipeline:
//! - Domain type (`PriceSignal`)
//! - Extraction of signals from exported message text
//! - Aggregates (average price, most recent signal)
//! - Alert evaluation with marker files
//! - Alert history store for deduplication
//! - Platform path resolution and path configuration

pub mod aggregate;
pub mod alert;
pub mod config;
pub mod domain;
pub mod error;
pub mod extract;
pub mod history;
pub mod paths;
pub mod runner;

pub use aggregate::{average_price, most_recent_price, AggregateError};
pub use alert::{alert_title, high_price_alert, is_alert_condition, AlertEvaluator, AlertOutcome};
pub use config::{Config, ConfigError, ConfigOverrides};
pub use domain::PriceSignal;
pub use error::PriceWatchError;
pub use extract::{read_signals, split_blocks, ExtractError, Extraction, SignalExtractor};
pub use history::AlertHistory;
pub use runner::{run, RunReport};

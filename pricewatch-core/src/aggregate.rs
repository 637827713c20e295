//! Aggregates over an extracted signal list.

use thiserror::Error;

use crate::domain::PriceSignal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AggregateError {
    #[error("no price signals to aggregate")]
    Empty,
}

/// Arithmetic mean of all prices.
pub fn average_price(signals: &[PriceSignal]) -> Result<f64, AggregateError> {
    if signals.is_empty() {
        return Err(AggregateError::Empty);
    }
    let sum: f64 = signals.iter().map(|s| s.price).sum();
    Ok(sum / signals.len() as f64)
}

/// The last signal in extraction order.
///
/// Extraction order is assumed to be chronological; the list is not sorted
/// and dates are not compared.
pub fn most_recent_price(signals: &[PriceSignal]) -> Result<&PriceSignal, AggregateError> {
    signals.last().ok_or(AggregateError::Empty)
}

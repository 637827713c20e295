//! PriceSignal — one parsed (date, price) observation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A price announced for a single day.
///
/// `price` is in the unit the messages use (cents per kWh); use
/// [`PriceSignal::dollars`] for the dollar-scale value the alert threshold is
/// expressed in. Equality is structural over both fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceSignal {
    pub date: NaiveDate,
    pub price: f64,
}

impl PriceSignal {
    pub fn new(date: NaiveDate, price: f64) -> Self {
        Self { date, price }
    }

    /// Price converted from cents to dollars.
    pub fn dollars(&self) -> f64 {
        self.price / 100.0
    }
}

//! Signal extraction — scraped message text into (date, price) signals.
//!
//! The input is a flat export of price-signal emails, one message per block,
//! blocks separated by `- - - - -`. Each block is searched for:
//! - a `M/D/YYYY` style date (first occurrence wins)
//! - a price: a decimal number followed by whitespace and a word, or failing
//!   that, an integer followed eventually by a space and a word
//!
//! Blocks missing either part are kept as extraction errors and reported,
//! never raised. Signals come back in block order.

use std::path::Path;

use chrono::NaiveDate;
use regex::Regex;
use thiserror::Error;

use crate::domain::PriceSignal;
use crate::error::PriceWatchError;

/// Literal token separating message blocks in the export file.
pub const BLOCK_SEPARATOR: &str = "- - - - -";

// Month, day and 4-digit year with any of `- : / .` between them, not followed
// by another digit. The trailing group stands in for a negative lookahead.
const DATE_PATTERN: &str = r"((?:0?[1-9]|1[012])[-:/.](?:[0-2]?[0-9]|3[01])[-:/.](?:1[0-9]{3}|2[0-9]{3}))(?:[^0-9]|$)";

// Decimal price followed by whitespace and a unit word.
const FLOAT_PRICE_PATTERN: &str = r"(?i)([+-]?[0-9]*\.[0-9]+)\s+[a-z][a-z]+";

// Integer price followed, possibly lines later, by a space and a word.
const INT_PRICE_PATTERN: &str = r"(?is)([0-9]+).*? [a-z][a-z]+";

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Signals parsed from a file plus the raw text of every block that failed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    pub signals: Vec<PriceSignal>,
    pub errors: Vec<String>,
}

impl Extraction {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Compiled matchers for the date and the two price forms.
#[derive(Debug, Clone)]
pub struct SignalExtractor {
    date: Regex,
    float_price: Regex,
    int_price: Regex,
}

impl SignalExtractor {
    pub fn new() -> Result<Self, ExtractError> {
        Ok(Self {
            date: Regex::new(DATE_PATTERN)?,
            float_price: Regex::new(FLOAT_PRICE_PATTERN)?,
            int_price: Regex::new(INT_PRICE_PATTERN)?,
        })
    }

    /// Parse every block of `text`. Failed blocks are collected, not raised.
    pub fn extract(&self, text: &str) -> Extraction {
        let mut extraction = Extraction::default();

        for block in split_blocks(text) {
            match self.parse_block(block) {
                Some(signal) => extraction.signals.push(signal),
                None => extraction.errors.push(block.to_string()),
            }
        }

        extraction
    }

    /// A signal only when the block yields both a date and a non-zero,
    /// finite price.
    pub fn parse_block(&self, block: &str) -> Option<PriceSignal> {
        let date = self.find_date(block)?;
        let price = self.find_price(block)?;
        if price == 0.0 || !price.is_finite() {
            return None;
        }
        Some(PriceSignal::new(date, price))
    }

    /// First date-shaped match, decomposed as month/day/year.
    ///
    /// Matches using a separator other than `/`, and triples that are not a
    /// real calendar day, count as no date.
    pub fn find_date(&self, block: &str) -> Option<NaiveDate> {
        let raw = self.date.captures(block)?.get(1)?.as_str();
        parse_mdy(raw)
    }

    /// Decimal form first; the integer form only when no decimal matches.
    pub fn find_price(&self, block: &str) -> Option<f64> {
        let caps = self
            .float_price
            .captures(block)
            .or_else(|| self.int_price.captures(block))?;
        caps.get(1)?.as_str().parse::<f64>().ok()
    }
}

/// Split export text into message blocks.
pub fn split_blocks(text: &str) -> impl Iterator<Item = &str> {
    text.split(BLOCK_SEPARATOR)
}

/// Read the export file and extract its signals, logging every failed block.
pub fn read_signals(path: &Path) -> Result<Extraction, PriceWatchError> {
    let text = std::fs::read_to_string(path).map_err(|e| PriceWatchError::io(path, e))?;
    let extractor = SignalExtractor::new()?;
    let extraction = extractor.extract(&text);

    if extraction.has_errors() {
        log::warn!(
            "{} block(s) in {} did not parse",
            extraction.errors.len(),
            path.display()
        );
        for block in &extraction.errors {
            log::warn!("unparsed block: {:?}", block.trim());
        }
    }
    log::debug!(
        "extracted {} signal(s) from {}",
        extraction.signals.len(),
        path.display()
    );

    Ok(extraction)
}

fn parse_mdy(raw: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = raw.split('/').collect();
    let [month, day, year] = parts.as_slice() else {
        return None;
    };
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
}

//! Property tests for extraction and aggregation.
//!
//! Uses proptest to verify:
//! 1. A well-formed block always yields exactly its date and price
//! 2. A block without a date never yields a signal
//! 3. The decimal price wins over any integer earlier in the block
//! 4. The average lies within the price range; most recent is the last element
//! 5. History append/load preserves signals bit for bit

use chrono::NaiveDate;
use proptest::prelude::*;
use tempfile::TempDir;

use pricewatch_core::{
    average_price, most_recent_price, AlertHistory, PriceSignal, SignalExtractor,
};

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (1000i32..2999, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

/// Prices written with exactly two decimals, so text and value agree.
fn arb_cents() -> impl Strategy<Value = u32> {
    1u32..100_000
}

fn arb_signal() -> impl Strategy<Value = PriceSignal> {
    (arb_date(), 0.01..500.0_f64).prop_map(|(date, price)| PriceSignal::new(date, price))
}

fn format_price(cents: u32) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}

fn format_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

// ── 1. Well-formed blocks ────────────────────────────────────────────

proptest! {
    #[test]
    fn well_formed_block_yields_its_signal(date in arb_date(), cents in arb_cents()) {
        let extractor = SignalExtractor::new().unwrap();
        let block = format!(
            "\nPrice signal for {} is {} cents per kWh.\n",
            format_date(date),
            format_price(cents)
        );

        let extraction = extractor.extract(&block);
        prop_assert!(extraction.errors.is_empty());
        prop_assert_eq!(extraction.signals.len(), 1);
        prop_assert_eq!(extraction.signals[0].date, date);
        let expected: f64 = format_price(cents).parse().unwrap();
        prop_assert_eq!(extraction.signals[0].price, expected);
    }

    #[test]
    fn zero_padded_dates_parse(date in arb_date(), cents in arb_cents()) {
        let extractor = SignalExtractor::new().unwrap();
        let block = format!("{} {} cents", date.format("%m/%d/%Y"), format_price(cents));
        prop_assert_eq!(extractor.find_date(&block), Some(date));
    }
}

// ── 2. Blocks without dates ──────────────────────────────────────────

proptest! {
    #[test]
    fn block_without_date_is_error(words in "[a-z ]{0,40}", cents in arb_cents()) {
        let extractor = SignalExtractor::new().unwrap();
        let block = format!("{words} {} cents", format_price(cents));

        let extraction = extractor.extract(&block);
        prop_assert!(extraction.signals.is_empty());
        prop_assert_eq!(extraction.errors, vec![block]);
    }
}

// ── 3. Decimal form priority ─────────────────────────────────────────

proptest! {
    #[test]
    fn decimal_price_beats_integer(int in 1u32..1000, cents in arb_cents()) {
        let extractor = SignalExtractor::new().unwrap();
        let block = format!("for {int} hours on 7/16/2012 the rate is {} cents", format_price(cents));
        let expected: f64 = format_price(cents).parse().unwrap();
        prop_assert_eq!(extractor.find_price(&block), Some(expected));
    }
}

// ── 4. Aggregates ────────────────────────────────────────────────────

proptest! {
    #[test]
    fn average_within_price_range(signals in prop::collection::vec(arb_signal(), 1..50)) {
        let avg = average_price(&signals).unwrap();
        let min = signals.iter().map(|s| s.price).fold(f64::INFINITY, f64::min);
        let max = signals.iter().map(|s| s.price).fold(f64::NEG_INFINITY, f64::max);
        prop_assert!(avg >= min - 1e-9 && avg <= max + 1e-9);
    }

    #[test]
    fn most_recent_is_always_last(signals in prop::collection::vec(arb_signal(), 1..50)) {
        let last = *signals.last().unwrap();
        prop_assert_eq!(*most_recent_price(&signals).unwrap(), last);
    }
}

// ── 5. History persistence ───────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn history_preserves_exact_values(signals in prop::collection::vec(arb_signal(), 1..8)) {
        let tmp = TempDir::new().unwrap();
        let history = AlertHistory::new(tmp.path().join("alert_log.json"));
        for signal in &signals {
            history.append(*signal).unwrap();
        }

        let loaded = history.load().unwrap();
        prop_assert_eq!(loaded.len(), signals.len());
        for (a, b) in loaded.iter().zip(&signals) {
            prop_assert_eq!(a.date, b.date);
            prop_assert_eq!(a.price.to_bits(), b.price.to_bits());
        }
    }
}

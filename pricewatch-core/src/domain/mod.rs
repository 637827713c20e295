//! Domain types for pricewatch

pub mod signal;

pub use signal::PriceSignal;

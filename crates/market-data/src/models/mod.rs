//! Rate data models
//!
//! This module contains the value types that flow through the pipeline:
//! - `currency` - Accepted currency codes (CurrencyCode)
//! - `range` - Validated date range (DateRange)
//! - `rate` - Decoded rate records and raw API entries (RateRecord, RawRateEntry)

mod currency;
mod range;
mod rate;

pub use currency::{CurrencyCode, UnknownCurrency};
pub use range::DateRange;
pub use rate::{RateRecord, RawRateEntry};

//! Table C payload decoding.
//!
//! Turns the XML body returned by the NBP API into an ordered sequence of
//! [`RateRecord`]s annotated with day-over-day changes.
//!
//! The API is inconsistent about the shape of `Rates/Rate`: several matching
//! days produce a list, a single day produces a bare object. [`RateContainer`]
//! captures both shapes and is normalized before any diff is computed.

mod xml;

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Deserialize;
use serde_json::Value;

use crate::errors::RatesError;
use crate::models::{RateRecord, RawRateEntry};

/// Decimal places kept on bid/ask differences.
pub const DIFF_DECIMAL_PLACES: u32 = 4;

/// Rounding applied to differences: ties go away from zero.
pub const DIFF_ROUNDING: RoundingStrategy = RoundingStrategy::MidpointAwayFromZero;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// The `Rates/Rate` node in either of the shapes the API produces.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RateContainer {
    Multiple(Vec<RawRateEntry>),
    Single(RawRateEntry),
}

impl RateContainer {
    /// Normalize to entries in source order.
    pub fn into_entries(self) -> Vec<RawRateEntry> {
        match self {
            RateContainer::Multiple(entries) => entries,
            RateContainer::Single(entry) => vec![entry],
        }
    }
}

/// Round a bid or ask difference to [`DIFF_DECIMAL_PLACES`].
pub fn round_diff(diff: Decimal) -> Decimal {
    diff.round_dp_with_strategy(DIFF_DECIMAL_PLACES, DIFF_ROUNDING)
}

/// Decodes table C XML payloads into rate records.
#[derive(Clone, Copy, Debug, Default)]
pub struct RateDecoder;

impl RateDecoder {
    pub fn new() -> Self {
        Self
    }

    /// Decode a raw payload.
    ///
    /// Fails with [`RatesError::EmptyResult`] when the payload holds no
    /// rates and with [`RatesError::MalformedPayload`] when it cannot be read.
    pub fn decode(&self, payload: &str) -> Result<Vec<RateRecord>, RatesError> {
        let entries = Self::parse_entries(payload)?;

        if entries.is_empty() {
            return Err(RatesError::EmptyResult);
        }

        Self::build_records(entries)
    }

    fn parse_entries(payload: &str) -> Result<Vec<RawRateEntry>, RatesError> {
        if payload.trim().is_empty() {
            return Ok(Vec::new());
        }

        let mut document = xml::parse(payload)?;

        let raw_rates = match document.pointer_mut("/Rates/Rate").map(Value::take) {
            Some(Value::Null) | None => return Ok(Vec::new()),
            Some(value) => value,
        };

        let container: RateContainer = serde_json::from_value(raw_rates).map_err(|e| {
            RatesError::MalformedPayload(format!("unexpected Rate element: {}", e))
        })?;

        Ok(container.into_entries())
    }

    fn build_records(entries: Vec<RawRateEntry>) -> Result<Vec<RateRecord>, RatesError> {
        let mut records = Vec::with_capacity(entries.len());
        let mut previous: Option<(Decimal, Decimal)> = None;

        for raw in entries {
            let date = parse_date(&raw.effective_date)?;
            let bid = parse_decimal("Bid", &raw.bid)?;
            let ask = parse_decimal("Ask", &raw.ask)?;

            let (bid_diff, ask_diff) = match previous {
                Some((previous_bid, previous_ask)) => (
                    Some(diff("Bid", bid, previous_bid)?),
                    Some(diff("Ask", ask, previous_ask)?),
                ),
                None => (None, None),
            };

            records.push(RateRecord {
                date,
                bid,
                ask,
                bid_diff,
                ask_diff,
            });

            previous = Some((bid, ask));
        }

        Ok(records)
    }
}

fn diff(field: &str, current: Decimal, previous: Decimal) -> Result<Decimal, RatesError> {
    current
        .checked_sub(previous)
        .map(round_diff)
        .ok_or_else(|| RatesError::MalformedPayload(format!("{} change out of range", field)))
}

fn parse_date(raw: &str) -> Result<NaiveDate, RatesError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|_| RatesError::MalformedPayload(format!("invalid EffectiveDate: {}", raw)))
}

fn parse_decimal(field: &str, raw: &str) -> Result<Decimal, RatesError> {
    Decimal::from_str(raw.trim())
        .map_err(|_| RatesError::MalformedPayload(format!("invalid {}: {}", field, raw)))
}

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One day's bid/ask quote from table C, with the change against the
/// previous record in the same sequence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateRecord {
    /// Effective date of the quote
    pub date: NaiveDate,

    /// Bid (buy) rate
    pub bid: Decimal,

    /// Ask (sell) rate
    pub ask: Decimal,

    /// Bid change against the previous record, `None` for the first record
    pub bid_diff: Option<Decimal>,

    /// Ask change against the previous record, `None` for the first record
    pub ask_diff: Option<Decimal>,
}

/// A single `Rate` element as published by the NBP API, still undecoded.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RawRateEntry {
    #[serde(rename = "EffectiveDate")]
    pub effective_date: String,

    #[serde(rename = "Bid")]
    pub bid: String,

    #[serde(rename = "Ask")]
    pub ask: String,
}

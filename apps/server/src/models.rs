use chrono::NaiveDate;
use nbp_market_data::{CurrencyCode, RateRecord};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RatesQuery {
    pub currency_code: CurrencyCode,
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
}

/// Exchange rate for a single day.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RateResponse {
    #[schema(value_type = String, format = Date, example = "2024-01-02")]
    pub date: NaiveDate,
    #[schema(value_type = f64, example = 4.2531)]
    pub bid: Decimal,
    #[schema(value_type = f64, example = 4.3387)]
    pub ask: Decimal,
    /// Change against the previous day, null for the first day
    #[schema(value_type = Option<f64>, example = 0.0012)]
    pub bid_diff: Option<Decimal>,
    /// Change against the previous day, null for the first day
    #[schema(value_type = Option<f64>, example = 0.0008)]
    pub ask_diff: Option<Decimal>,
}

impl From<RateRecord> for RateResponse {
    fn from(r: RateRecord) -> Self {
        Self {
            date: r.date,
            bid: r.bid,
            ask: r.ask,
            bid_diff: r.bid_diff,
            ask_diff: r.ask_diff,
        }
    }
}

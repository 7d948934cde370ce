//! Rate retrieval service.
//!
//! Runs the pipeline for one request: validate the range, fetch the raw
//! table C payload, decode it into diff-annotated records.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use log::info;

use crate::decoder::RateDecoder;
use crate::errors::RatesError;
use crate::models::{CurrencyCode, RateRecord};
use crate::provider::{NbpRateFetcher, RateTransport};
use crate::validator::RangeValidator;

/// Trait defining the contract for rate retrieval.
#[async_trait]
pub trait RateServiceTrait: Send + Sync {
    /// Rates for `currency` between `date_from` and `date_to`, both inclusive,
    /// ordered by date ascending.
    async fn get_rates(
        &self,
        currency: CurrencyCode,
        date_from: NaiveDate,
        date_to: NaiveDate,
    ) -> Result<Vec<RateRecord>, RatesError>;
}

/// Validates, fetches and decodes NBP table C rates.
///
/// Holds no per-request state; one instance can serve concurrent callers.
pub struct RateService {
    validator: RangeValidator,
    fetcher: NbpRateFetcher,
    decoder: RateDecoder,
}

impl RateService {
    pub fn new(validator: RangeValidator, fetcher: NbpRateFetcher, decoder: RateDecoder) -> Self {
        Self {
            validator,
            fetcher,
            decoder,
        }
    }

    /// Service with the default 7-day window against `base_url`.
    pub fn with_transport(base_url: impl Into<String>, transport: Arc<dyn RateTransport>) -> Self {
        Self::new(
            RangeValidator::new(),
            NbpRateFetcher::new(base_url, transport),
            RateDecoder::new(),
        )
    }
}

#[async_trait]
impl RateServiceTrait for RateService {
    async fn get_rates(
        &self,
        currency: CurrencyCode,
        date_from: NaiveDate,
        date_to: NaiveDate,
    ) -> Result<Vec<RateRecord>, RatesError> {
        let range = self.validator.validate(date_from, date_to)?;
        let payload = self.fetcher.fetch(currency, &range).await?;
        let rates = self.decoder.decode(&payload)?;

        info!("NBP rates fetched successfully: count={}", rates.len());

        Ok(rates)
    }
}

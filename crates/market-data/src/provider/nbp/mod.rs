//! NBP table C fetcher.
//!
//! Builds the rates query for a currency and date range and performs a single
//! GET through the configured [`RateTransport`]. The body of a 200 response is
//! handed back untouched; decoding happens in [`RateDecoder`](crate::RateDecoder).
//!
//! API documentation: https://api.nbp.pl/

use std::sync::Arc;

use log::{debug, error, info};

use crate::errors::TransportError;
use crate::models::{CurrencyCode, DateRange};
use crate::provider::{RateTransport, TransportFailure};

/// Public NBP exchange rates endpoint.
pub const NBP_API_URL: &str = "https://api.nbp.pl/api/exchangerates/rates";

/// Table C carries bid and ask rates (tables A and B publish mid rates only).
const TABLE: &str = "C";

const FORMAT: &str = "xml";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Fetches raw table C payloads from the NBP API.
pub struct NbpRateFetcher {
    base_url: String,
    transport: Arc<dyn RateTransport>,
}

impl NbpRateFetcher {
    /// Create a fetcher rooted at `base_url`. A trailing `/` is ignored.
    pub fn new(base_url: impl Into<String>, transport: Arc<dyn RateTransport>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the query URL, e.g. `{base}/C/eur/2024-01-02/2024-01-05/?format=xml`.
    pub fn build_url(&self, currency: CurrencyCode, range: &DateRange) -> String {
        format!(
            "{}/{}/{}/{}/{}/?format={}",
            self.base_url,
            TABLE,
            currency.path_segment(),
            range.from().format(DATE_FORMAT),
            range.to().format(DATE_FORMAT),
            FORMAT,
        )
    }

    /// Fetch the raw payload for `currency` over `range`.
    ///
    /// Returns the response body on HTTP 200. Any other status, a timeout or
    /// a connection failure becomes a [`TransportError`].
    pub async fn fetch(
        &self,
        currency: CurrencyCode,
        range: &DateRange,
    ) -> Result<String, TransportError> {
        let url = self.build_url(currency, range);

        info!(
            "Fetching NBP exchange rates: url={} currency={} from={} to={}",
            url,
            currency,
            range.from().format(DATE_FORMAT),
            range.to().format(DATE_FORMAT),
        );

        let response = self.transport.get(&url).await.map_err(|failure| {
            error!("NBP API request failed: url={} error={:?}", url, failure);
            match failure {
                TransportFailure::Timeout => TransportError::Timeout { currency },
                TransportFailure::Connection(message) => {
                    TransportError::Connection { currency, message }
                }
            }
        })?;

        if response.status != 200 {
            error!(
                "NBP API error: status_code={} url={}",
                response.status, url
            );
            return Err(TransportError::Status {
                status: response.status,
                currency,
            });
        }

        debug!("NBP API returned {} bytes", response.body.len());

        Ok(response.body)
    }
}

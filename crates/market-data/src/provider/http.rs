//! `reqwest`-backed transport.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use super::traits::{RateTransport, TransportFailure, TransportResponse};

/// Default HTTP request timeout
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Transport that performs requests with a shared `reqwest::Client`.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create a transport whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client }
    }

    /// Wrap an already configured client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new(REQUEST_TIMEOUT)
    }
}

fn to_failure(error: reqwest::Error) -> TransportFailure {
    if error.is_timeout() {
        TransportFailure::Timeout
    } else {
        // Messages never carry the URL.
        TransportFailure::Connection(error.without_url().to_string())
    }
}

#[async_trait]
impl RateTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<TransportResponse, TransportFailure> {
        let response = self.client.get(url).send().await.map_err(to_failure)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(to_failure)?;

        Ok(TransportResponse { status, body })
    }
}

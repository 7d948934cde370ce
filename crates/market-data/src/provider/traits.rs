//! Transport trait definitions.
//!
//! This module defines the `RateTransport` trait the fetcher uses to issue
//! its single GET request. Keeping HTTP behind a trait lets callers swap
//! clients and lets tests run without network access.

use async_trait::async_trait;

/// Status and body of a completed HTTP exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(200, body)
    }
}

/// Why a request produced no response at all.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransportFailure {
    /// The client timeout elapsed.
    Timeout,
    /// Connection, TLS or body read failure.
    Connection(String),
}

/// Trait for HTTP transports.
///
/// Implementations perform exactly one GET per call. Retries, pooling and
/// timeouts are the implementation's concern, never the caller's.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use nbp_market_data::provider::{RateTransport, TransportFailure, TransportResponse};
///
/// struct Canned(String);
///
/// #[async_trait]
/// impl RateTransport for Canned {
///     async fn get(&self, _url: &str) -> Result<TransportResponse, TransportFailure> {
///         Ok(TransportResponse::ok(self.0.clone()))
///     }
/// }
/// ```
#[async_trait]
pub trait RateTransport: Send + Sync {
    /// Issue a GET request and return the status and body.
    ///
    /// Non-success statuses are returned as `Ok`; only failures that yield
    /// no response map to [`TransportFailure`].
    async fn get(&self, url: &str) -> Result<TransportResponse, TransportFailure>;
}

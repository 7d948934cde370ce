//! NBP Market Data Crate
//!
//! This crate retrieves historical bid/ask exchange rates from table C of
//! the National Bank of Poland (NBP) API and annotates each day with its
//! change against the previous published day.
//!
//! # Architecture
//!
//! ```text
//! +------------------+
//! |  RateService     |  (one call per request, no shared state)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! |  RangeValidator  |  (to >= from, span <= 7 days)
//! +------------------+
//!          |
//!          v
//! +------------------+     +------------------+
//! |  NbpRateFetcher  | --> |  RateTransport   |  (reqwest in production)
//! +------------------+     +------------------+
//!          |
//!          v
//! +------------------+
//! |  RateDecoder     |  (XML -> Vec<RateRecord> with diffs)
//! +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`CurrencyCode`] - Accepted currencies (EUR, USD, CHF)
//! - [`DateRange`] - A validated inclusive date range
//! - [`RateRecord`] - One day's bid/ask with diffs against the previous day
//! - [`RatesError`] - Range, transport, empty-result and payload failures

pub mod decoder;
pub mod errors;
pub mod models;
pub mod provider;
pub mod service;
pub mod validator;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export all public types from models
pub use models::{CurrencyCode, DateRange, RateRecord, RawRateEntry, UnknownCurrency};

// Re-export error types
pub use errors::{RangeError, RatesError, TransportError};

// Re-export pipeline components
pub use decoder::{RateContainer, RateDecoder};
pub use provider::{
    NbpRateFetcher, RateTransport, ReqwestTransport, TransportFailure, TransportResponse,
    NBP_API_URL,
};
pub use service::{RateService, RateServiceTrait};
pub use validator::{RangeValidator, ValidatorConfig, MAX_DATE_RANGE_DAYS};

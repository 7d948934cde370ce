//! Error types for the rate-retrieval pipeline.
//!
//! This module provides:
//! - [`RatesError`]: The main error enum returned by [`RateService`](crate::RateService)
//! - [`RangeError`]: Rejections produced by the date range validator
//! - [`TransportError`]: Failures talking to the NBP API

use thiserror::Error;

use crate::models::CurrencyCode;

/// A requested date range that violates the ordering or span rules.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    /// `date_to` lies before `date_from`.
    #[error("dateTo must be greater than or equal to dateFrom")]
    Inverted,

    /// The range spans more days than the lookback window allows.
    #[error("Date range cannot exceed {max_days} days")]
    TooWide {
        /// The configured lookback window
        max_days: i64,
    },
}

/// The NBP API was unreachable or answered with a non-success status.
///
/// Messages never contain the request URL; it is only written to the logs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The API answered with a status other than 200.
    #[error("NBP API returned HTTP {status} for currency {currency}")]
    Status {
        /// HTTP status code returned by the API
        status: u16,
        /// The currency that was requested
        currency: CurrencyCode,
    },

    /// The request did not complete within the client timeout.
    #[error("NBP API request timed out for currency {currency}")]
    Timeout {
        /// The currency that was requested
        currency: CurrencyCode,
    },

    /// The request failed before a response was received.
    #[error("NBP API request failed for currency {currency}: {message}")]
    Connection {
        /// The currency that was requested
        currency: CurrencyCode,
        /// Description of the failure, stripped of the URL
        message: String,
    },
}

/// Errors that can occur while retrieving rates.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RatesError {
    /// The caller supplied an invalid date range.
    /// The NBP API is never contacted in this case.
    #[error(transparent)]
    InvalidRange(#[from] RangeError),

    /// The NBP API could not be reached or returned an error status.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The API answered successfully but the payload held no rates.
    #[error("No rates found in NBP XML response")]
    EmptyResult,

    /// The payload could not be decoded into rate records.
    #[error("Malformed NBP XML response: {0}")]
    MalformedPayload(String),
}

impl RatesError {
    /// Returns true when the failure was caused by caller input.
    ///
    /// Only range violations are client errors; everything else is an
    /// upstream problem the caller cannot fix by changing the request.
    ///
    /// # Examples
    ///
    /// ```
    /// use nbp_market_data::errors::{RangeError, RatesError};
    ///
    /// let error = RatesError::InvalidRange(RangeError::Inverted);
    /// assert!(error.is_client_error());
    ///
    /// assert!(!RatesError::EmptyResult.is_client_error());
    /// ```
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidRange(_))
    }
}

//! NBP API access.
//!
//! This module contains:
//! - The `RateTransport` trait the fetcher sends its request through
//! - `ReqwestTransport`, the production transport
//! - `NbpRateFetcher`, which builds table C queries and maps response statuses

mod http;
mod traits;

pub mod nbp;

// Re-exports
pub use http::{ReqwestTransport, REQUEST_TIMEOUT};
pub use nbp::{NbpRateFetcher, NBP_API_URL};
pub use traits::{RateTransport, TransportFailure, TransportResponse};

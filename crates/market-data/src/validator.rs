//! Date range validation.
//!
//! Checks a requested `(from, to)` pair before anything is sent upstream:
//! - Ordering (`to` must not precede `from`)
//! - Span (at most `max_span_days` between the two ends, inclusive)

use chrono::NaiveDate;

use crate::errors::RangeError;
use crate::models::DateRange;

/// Default lookback window in days.
pub const MAX_DATE_RANGE_DAYS: i64 = 7;

/// Range validator configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// Largest allowed distance in days between `from` and `to`.
    pub max_span_days: i64,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            max_span_days: MAX_DATE_RANGE_DAYS,
        }
    }
}

/// Validates requested date ranges against the lookback window.
#[derive(Clone, Debug, Default)]
pub struct RangeValidator {
    config: ValidatorConfig,
}

impl RangeValidator {
    /// Create a new validator with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a validator with custom configuration.
    pub fn with_config(config: ValidatorConfig) -> Self {
        Self { config }
    }

    pub fn max_span_days(&self) -> i64 {
        self.config.max_span_days
    }

    /// Validate a date pair.
    ///
    /// Ordering is checked before span, so an inverted range always reports
    /// [`RangeError::Inverted`] regardless of its length.
    pub fn validate(&self, from: NaiveDate, to: NaiveDate) -> Result<DateRange, RangeError> {
        if to < from {
            return Err(RangeError::Inverted);
        }

        if (to - from).num_days() > self.config.max_span_days {
            return Err(RangeError::TooWide {
                max_days: self.config.max_span_days,
            });
        }

        Ok(DateRange::new_unchecked(from, to))
    }
}

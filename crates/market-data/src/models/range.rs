use chrono::NaiveDate;

/// An inclusive calendar date range that passed validation.
///
/// Only [`RangeValidator`](crate::RangeValidator) constructs this type, so
/// holding one means `from <= to` and the span fits the lookback window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateRange {
    from: NaiveDate,
    to: NaiveDate,
}

impl DateRange {
    pub(crate) fn new_unchecked(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    pub fn from(&self) -> NaiveDate {
        self.from
    }

    pub fn to(&self) -> NaiveDate {
        self.to
    }

    /// Number of days between the two ends (0 for a same-day range).
    pub fn span_days(&self) -> i64 {
        (self.to - self.from).num_days()
    }
}

//! Property-based tests for range validation and rate decoding.
//!
//! These tests verify that universal properties hold across all valid inputs,
//! using the `proptest` crate for random test case generation.

use chrono::{Duration, NaiveDate};
use nbp_market_data::{RangeError, RangeValidator, RateDecoder};
use proptest::prelude::*;
use rust_decimal::{Decimal, RoundingStrategy};

// =============================================================================
// Generators
// =============================================================================

/// Generates a date between 2002 (first table C publications) and 2030.
fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (0i64..10_000).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2002, 1, 2).unwrap() + Duration::days(offset)
    })
}

/// Generates a rate with up to six decimal places, between 0.5 and 9.5.
fn arb_rate() -> impl Strategy<Value = Decimal> {
    (500_000i64..9_500_000).prop_map(|units| Decimal::new(units, 6))
}

/// Generates 1..=10 `(bid, ask)` pairs.
fn arb_quotes() -> impl Strategy<Value = Vec<(Decimal, Decimal)>> {
    prop::collection::vec((arb_rate(), arb_rate()), 1..=10)
}

fn payload(start: NaiveDate, quotes: &[(Decimal, Decimal)]) -> String {
    let rates: String = quotes
        .iter()
        .enumerate()
        .map(|(i, (bid, ask))| {
            format!(
                "<Rate><No>{:03}/C/NBP/2024</No><EffectiveDate>{}</EffectiveDate><Bid>{}</Bid><Ask>{}</Ask></Rate>",
                i + 1,
                (start + Duration::days(i as i64)).format("%Y-%m-%d"),
                bid,
                ask
            )
        })
        .collect();

    format!(
        "<ExchangeRatesSeries><Table>C</Table><Currency>euro</Currency><Code>EUR</Code><Rates>{}</Rates></ExchangeRatesSeries>",
        rates
    )
}

fn expected_diff(current: Decimal, previous: Decimal) -> Decimal {
    (current - previous).round_dp_with_strategy(4, RoundingStrategy::MidpointAwayFromZero)
}

// =============================================================================
// Range validation
// =============================================================================

proptest! {
    #[test]
    fn ranges_within_window_are_accepted(from in arb_date(), span in 0i64..=7) {
        let to = from + Duration::days(span);
        let range = RangeValidator::new().validate(from, to);
        prop_assert!(range.is_ok());
        prop_assert_eq!(range.unwrap().span_days(), span);
    }

    #[test]
    fn ranges_beyond_window_are_rejected(from in arb_date(), span in 8i64..400) {
        let to = from + Duration::days(span);
        prop_assert_eq!(
            RangeValidator::new().validate(from, to),
            Err(RangeError::TooWide { max_days: 7 })
        );
    }

    #[test]
    fn inverted_ranges_are_rejected(to in arb_date(), back in 1i64..400) {
        let from = to + Duration::days(back);
        prop_assert_eq!(RangeValidator::new().validate(from, to), Err(RangeError::Inverted));
    }
}

// =============================================================================
// Decoding
// =============================================================================

proptest! {
    #[test]
    fn decoded_sequence_matches_input(start in arb_date(), quotes in arb_quotes()) {
        let records = RateDecoder::new().decode(&payload(start, &quotes)).unwrap();

        prop_assert_eq!(records.len(), quotes.len());
        prop_assert_eq!(records[0].bid_diff, None);
        prop_assert_eq!(records[0].ask_diff, None);

        for (i, record) in records.iter().enumerate() {
            prop_assert_eq!(record.date, start + Duration::days(i as i64));
            prop_assert_eq!(record.bid, quotes[i].0);
            prop_assert_eq!(record.ask, quotes[i].1);

            if i > 0 {
                prop_assert_eq!(record.bid_diff, Some(expected_diff(quotes[i].0, quotes[i - 1].0)));
                prop_assert_eq!(record.ask_diff, Some(expected_diff(quotes[i].1, quotes[i - 1].1)));
            }
        }
    }

    #[test]
    fn diffs_never_exceed_four_decimal_places(start in arb_date(), quotes in arb_quotes()) {
        let records = RateDecoder::new().decode(&payload(start, &quotes)).unwrap();

        for record in records.iter().skip(1) {
            prop_assert!(record.bid_diff.unwrap().scale() <= 4);
            prop_assert!(record.ask_diff.unwrap().scale() <= 4);
        }
    }
}

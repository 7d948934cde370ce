//! Shared fixtures for unit tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::models::DateRange;
use crate::provider::{RateTransport, TransportFailure, TransportResponse};

/// Transport that replays a canned result and records requested URLs.
pub struct StubTransport {
    result: Result<TransportResponse, TransportFailure>,
    urls: Mutex<Vec<String>>,
}

impl StubTransport {
    pub fn respond(result: Result<TransportResponse, TransportFailure>) -> Arc<Self> {
        Arc::new(Self {
            result,
            urls: Mutex::new(Vec::new()),
        })
    }

    pub fn ok(body: &str) -> Arc<Self> {
        Self::respond(Ok(TransportResponse::ok(body)))
    }

    pub fn requested_urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.urls.lock().unwrap().len()
    }
}

#[async_trait]
impl RateTransport for StubTransport {
    async fn get(&self, url: &str) -> Result<TransportResponse, TransportFailure> {
        self.urls.lock().unwrap().push(url.to_string());
        self.result.clone()
    }
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub fn date_range(from: &str, to: &str) -> DateRange {
    DateRange::new_unchecked(date(from), date(to))
}

/// Table C response body with one `Rate` element per `(date, bid, ask)`.
pub fn table_c_xml(rates: &[(&str, &str, &str)]) -> String {
    let body: String = rates
        .iter()
        .enumerate()
        .map(|(i, (date, bid, ask))| {
            format!(
                "<Rate><No>{:03}/C/NBP/2024</No><EffectiveDate>{}</EffectiveDate><Bid>{}</Bid><Ask>{}</Ask></Rate>",
                i + 1,
                date,
                bid,
                ask
            )
        })
        .collect();

    format!(
        r#"<?xml version="1.0" encoding="utf-8"?><ExchangeRatesSeries xmlns:xsd="http://www.w3.org/2001/XMLSchema" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"><Table>C</Table><Currency>euro</Currency><Code>EUR</Code><Rates>{}</Rates></ExchangeRatesSeries>"#,
        body
    )
}

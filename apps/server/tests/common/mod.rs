#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use nbp_market_data::{CurrencyCode, RateRecord, RateServiceTrait, RatesError};
use nbp_server::{api::app_router, config::Config, AppState};
use tower::ServiceExt;

pub const TOKEN: &str = "test-secret-token";

/// Rate service that returns a canned result and records its arguments.
pub struct StubRateService {
    result: Result<Vec<RateRecord>, RatesError>,
    calls: Mutex<Vec<(CurrencyCode, NaiveDate, NaiveDate)>>,
}

impl StubRateService {
    pub fn new(result: Result<Vec<RateRecord>, RatesError>) -> Arc<Self> {
        Arc::new(Self {
            result,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<(CurrencyCode, NaiveDate, NaiveDate)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl RateServiceTrait for StubRateService {
    async fn get_rates(
        &self,
        currency: CurrencyCode,
        date_from: NaiveDate,
        date_to: NaiveDate,
    ) -> Result<Vec<RateRecord>, RatesError> {
        self.calls
            .lock()
            .unwrap()
            .push((currency, date_from, date_to));
        self.result.clone()
    }
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub fn test_config() -> Config {
    Config {
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        nbp_url: "http://nbp.invalid/api/exchangerates/rates".to_string(),
        system_token: TOKEN.to_string(),
        cors_allow: vec!["*".to_string()],
        request_timeout: std::time::Duration::from_secs(5),
        upstream_timeout: std::time::Duration::from_secs(4),
        max_range_days: 7,
    }
}

pub fn build_router(service: Arc<dyn RateServiceTrait>) -> Router {
    let config = test_config();
    let state = Arc::new(AppState::new(service, config.system_token.clone()));
    app_router(state, &config)
}

/// Send a GET request, optionally carrying the system token header.
pub async fn get(app: Router, uri: &str, token: Option<&str>) -> (StatusCode, Vec<u8>) {
    let mut request = Request::builder().uri(uri);
    if let Some(token) = token {
        request = request.header("X-TOKEN-SYSTEM", token);
    }
    let response = app
        .oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

pub fn json(body: &[u8]) -> serde_json::Value {
    serde_json::from_slice(body).unwrap()
}

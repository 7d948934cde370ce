use std::sync::Arc;

use crate::config::Config;
use nbp_market_data::{
    NbpRateFetcher, RangeValidator, RateDecoder, RateService, RateServiceTrait, ReqwestTransport,
    ValidatorConfig,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub rate_service: Arc<dyn RateServiceTrait>,
    pub system_token: String,
}

impl AppState {
    pub fn new(rate_service: Arc<dyn RateServiceTrait>, system_token: impl Into<String>) -> Self {
        Self {
            rate_service,
            system_token: system_token.into(),
        }
    }
}

pub fn init_tracing() {
    let fmt_layer = fmt::layer().json().with_current_span(false);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    config.validate()?;

    let transport = Arc::new(ReqwestTransport::new(config.upstream_timeout));
    let rate_service = Arc::new(RateService::new(
        RangeValidator::with_config(ValidatorConfig {
            max_span_days: config.max_range_days,
        }),
        NbpRateFetcher::new(config.nbp_url.clone(), transport),
        RateDecoder::new(),
    ));
    tracing::info!(
        "NBP API base URL: {} (max range {} days, upstream timeout {:?})",
        config.nbp_url,
        config.max_range_days,
        config.upstream_timeout
    );

    Ok(Arc::new(AppState::new(
        rate_service,
        config.system_token.clone(),
    )))
}

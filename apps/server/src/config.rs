use std::{net::SocketAddr, time::Duration};

use anyhow::Context;
use nbp_market_data::{MAX_DATE_RANGE_DAYS, NBP_API_URL};

const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;
const DEFAULT_UPSTREAM_TIMEOUT_MS: u64 = 25_000;

#[cfg_attr(test, derive(Debug))]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub nbp_url: String,
    pub system_token: String,
    pub cors_allow: Vec<String>,
    /// Whole-request deadline enforced by the HTTP server.
    pub request_timeout: Duration,
    /// Deadline for the NBP API call; shorter than `request_timeout`.
    pub upstream_timeout: Duration,
    pub max_range_days: i64,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build the config from a variable lookup, applying defaults.
    pub fn from_vars<F>(var: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen_addr: SocketAddr = var("NBP_LISTEN_ADDR")
            .unwrap_or_else(|| "0.0.0.0:8080".to_string())
            .parse()
            .context("Invalid NBP_LISTEN_ADDR")?;
        let nbp_url = var("APP_NBP_URL").unwrap_or_else(|| NBP_API_URL.into());
        let system_token = var("APP_SYSTEM_TOKEN")
            .context("APP_SYSTEM_TOKEN must be set")?
            .trim()
            .to_string();
        if system_token.is_empty() {
            anyhow::bail!("APP_SYSTEM_TOKEN cannot be empty");
        }
        let cors_allow = var("NBP_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let request_timeout_ms = match var("NBP_REQUEST_TIMEOUT_MS") {
            Some(v) => v.trim().parse().context("Invalid NBP_REQUEST_TIMEOUT_MS")?,
            None => DEFAULT_REQUEST_TIMEOUT_MS,
        };
        let upstream_timeout_ms = match var("NBP_UPSTREAM_TIMEOUT_MS") {
            Some(v) => v.trim().parse().context("Invalid NBP_UPSTREAM_TIMEOUT_MS")?,
            None => DEFAULT_UPSTREAM_TIMEOUT_MS.min(request_timeout_ms.saturating_sub(1)),
        };
        let max_range_days: i64 = match var("NBP_MAX_RANGE_DAYS") {
            Some(v) => v.trim().parse().context("Invalid NBP_MAX_RANGE_DAYS")?,
            None => MAX_DATE_RANGE_DAYS,
        };

        let config = Self {
            listen_addr,
            nbp_url,
            system_token,
            cors_allow,
            request_timeout: Duration::from_millis(request_timeout_ms),
            upstream_timeout: Duration::from_millis(upstream_timeout_ms),
            max_range_days,
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject combinations the server cannot honour.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.max_range_days < 0 {
            anyhow::bail!("NBP_MAX_RANGE_DAYS must not be negative");
        }
        if self.upstream_timeout.is_zero() {
            anyhow::bail!("NBP_UPSTREAM_TIMEOUT_MS must be positive");
        }
        if self.upstream_timeout >= self.request_timeout {
            anyhow::bail!("NBP_UPSTREAM_TIMEOUT_MS must be lower than NBP_REQUEST_TIMEOUT_MS");
        }
        Ok(())
    }
}

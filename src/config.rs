//! Runtime configuration.
//!
//! Built once by each binary and handed to the components that need it. Nothing
//! below `core` reads the process environment.

use crate::error::{AppError, Result};
use std::env;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.polygon.io";
pub const DEFAULT_TICKERS: &[&str] = &["AAPL", "MSFT", "GOOGL"];
pub const DEFAULT_REPORT_CRON: &str = "0 30 21 * * Mon-Fri";

/// Market data provider settings.
#[derive(Debug, Clone)]
pub struct PolygonConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl PolygonConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(120),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub polygon: PolygonConfig,
    pub tickers: Vec<String>,
    /// Size of the best/worst lists.
    pub top_n: usize,
    /// Maximum ticker pipelines in flight.
    pub concurrency: usize,
    pub port: u16,
    pub report_cron: String,
    pub post_webhook_url: Option<String>,
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let api_key = get("POLYGON_API_KEY")
            .ok_or_else(|| AppError::Config("POLYGON_API_KEY not set in environment".into()))?;

        let mut polygon = match get("POLYGON_BASE_URL") {
            Some(base_url) => PolygonConfig::new(api_key).with_base_url(base_url),
            None => PolygonConfig::new(api_key),
        };
        if let Some(raw) = get("REQUEST_TIMEOUT_SECS") {
            polygon.timeout = Duration::from_secs(parse_number("REQUEST_TIMEOUT_SECS", &raw)?);
        }

        let tickers = match get("TICKERS") {
            Some(raw) => parse_tickers(&raw),
            None => DEFAULT_TICKERS.iter().map(|t| t.to_string()).collect(),
        };
        if tickers.is_empty() {
            return Err(AppError::Config("TICKERS contains no symbols".into()));
        }

        let top_n = positive("TOP_N", get("TOP_N"), 5)?;
        let concurrency = positive("CONCURRENCY", get("CONCURRENCY"), 5)?;

        let port = match get("PORT") {
            Some(raw) => parse_number("PORT", &raw)?,
            None => 3000,
        };

        Ok(Self {
            polygon,
            tickers,
            top_n,
            concurrency,
            port,
            report_cron: get("REPORT_CRON").unwrap_or_else(|| DEFAULT_REPORT_CRON.to_string()),
            post_webhook_url: get("POST_WEBHOOK_URL"),
        })
    }
}

/// Split a comma-separated ticker list, normalizing case and dropping blanks.
pub fn parse_tickers(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|t| t.trim().to_uppercase())
        .filter(|t| !t.is_empty())
        .collect()
}

fn parse_number<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T> {
    raw.parse()
        .map_err(|_| AppError::Config(format!("{} must be a number, got '{}'", key, raw)))
}

fn positive(key: &str, raw: Option<String>, default: usize) -> Result<usize> {
    let value = match raw {
        Some(raw) => parse_number(key, &raw)?,
        None => default,
    };
    if value == 0 {
        return Err(AppError::Config(format!("{} must be greater than 0", key)));
    }
    Ok(value)
}

/// Deployment environment name, used to pick the log format.
pub fn get_environment() -> String {
    env::var("APP_ENV").unwrap_or_else(|_| "sandbox".to_string())
}

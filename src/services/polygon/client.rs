//! Thin Polygon REST client: URL building, auth and status handling.

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::config::PolygonConfig;
use crate::error::{AppError, Result};

pub struct PolygonRestClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl PolygonRestClient {
    /// Build a client whose requests time out after `config.timeout`.
    pub fn new(config: &PolygonConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self::with_client(
            config.base_url.clone(),
            config.api_key.clone(),
            client,
        ))
    }

    pub fn with_client(base_url: impl Into<String>, api_key: impl Into<String>, client: Client) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Base URL joined with percent-encoded path segments.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| AppError::Config(format!("invalid provider base URL: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| AppError::Config(format!("provider base URL cannot be a base: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// GET an endpoint and decode its JSON body.
    ///
    /// Non-success statuses become [`AppError::Provider`] carrying
    /// `"<status> <reason> - <body>"`.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        params: &[(&str, String)],
    ) -> Result<T> {
        let url = self.endpoint(segments)?;
        debug!(path = %url.path(), "Polygon request");

        let response = self
            .client
            .get(url)
            .query(&[("apiKey", self.api_key.as_str())])
            .query(params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Provider {
                status: status.as_u16(),
                message: format!(
                    "{} {} - {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("Unknown"),
                    body
                ),
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

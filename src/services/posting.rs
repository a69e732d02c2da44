//! Publishing rendered posts.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use tracing::info;

use crate::error::{AppError, Result};

#[async_trait]
pub trait SocialPoster: Send + Sync {
    async fn post(&self, text: &str) -> Result<()>;
}

/// Writes posts to the log instead of publishing them.
#[derive(Debug, Default, Clone)]
pub struct LogPoster;

#[async_trait]
impl SocialPoster for LogPoster {
    async fn post(&self, text: &str) -> Result<()> {
        info!(chars = text.chars().count(), text = %text, "Post (log only)");
        Ok(())
    }
}

/// Sends each post as `{"text": ...}` JSON to a webhook.
pub struct WebhookPoster {
    client: Client,
    url: String,
}

impl WebhookPoster {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(url, Client::new())
    }

    pub fn with_client(url: impl Into<String>, client: Client) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl SocialPoster for WebhookPoster {
    async fn post(&self, text: &str) -> Result<()> {
        let response = self
            .client
            .post(&self.url)
            .json(&json!({ "text": text }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Provider {
                status: status.as_u16(),
                message: format!("webhook rejected post: {} - {}", status.as_u16(), body),
            });
        }

        info!(status = status.as_u16(), "Post delivered to webhook");
        Ok(())
    }
}

/// Webhook poster when a URL is configured, log-only otherwise.
pub fn poster_for(webhook_url: Option<&str>) -> Box<dyn SocialPoster> {
    match webhook_url {
        Some(url) => Box::new(WebhookPoster::new(url)),
        None => Box::new(LogPoster),
    }
}

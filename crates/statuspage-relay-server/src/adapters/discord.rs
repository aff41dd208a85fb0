//! Discord Webhook Sink
//!
//! Delivers formatted notifications to a Discord channel webhook using reqwest.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use statuspage_relay::{DomainError, NotificationSink, WebhookMessage};

const USER_AGENT: &str = concat!("statuspage-relay/", env!("CARGO_PKG_VERSION"));

/// HTTP implementation of NotificationSink for Discord
pub struct DiscordWebhook {
    client: Client,
    url: String,
}

impl DiscordWebhook {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| DomainError::config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl NotificationSink for DiscordWebhook {
    async fn send(&self, message: &WebhookMessage) -> Result<(), DomainError> {
        let response = self
            .client
            .post(&self.url)
            .json(message)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    DomainError::delivery("Discord webhook timed out")
                } else {
                    DomainError::delivery(format!("HTTP error sending Discord webhook: {e}"))
                }
            })?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "No response body".to_string());
        Err(DomainError::delivery(format!(
            "Discord webhook returned {status}: {body}"
        )))
    }

    fn name(&self) -> &str {
        "discord"
    }
}

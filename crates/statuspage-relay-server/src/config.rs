//! Service configuration
//!
//! Read once from the environment at startup. A `.env` file in the working
//! directory is loaded first when present.

use std::time::Duration;

use statuspage_relay::DomainError;

/// Only Discord channel webhooks are accepted as destination
pub const DISCORD_WEBHOOK_PREFIX: &str = "https://discord.com/api/webhooks/";

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_LOG_LEVEL: &str = "INFO";

/// Timeout for one outbound delivery
pub const DELIVERY_TIMEOUT: Duration = Duration::from_secs(30);

/// Immutable process configuration
#[derive(Clone)]
pub struct Config {
    /// Destination Discord webhook URL
    pub discord_webhook_url: String,
    /// Shared secret for `X-Webhook-Signature`; `None` accepts every request
    pub webhook_secret: Option<String>,
    pub port: u16,
    /// `tracing` filter directive derived from `LOG_LEVEL`
    pub log_level: String,
    pub delivery_timeout: Duration,
}

impl Config {
    /// Load configuration from process environment variables
    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DomainError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let discord_webhook_url = lookup("DISCORD_WEBHOOK_URL")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| DomainError::config("DISCORD_WEBHOOK_URL is required"))?;

        if !discord_webhook_url.starts_with(DISCORD_WEBHOOK_PREFIX) {
            return Err(DomainError::config(format!(
                "DISCORD_WEBHOOK_URL must start with {DISCORD_WEBHOOK_PREFIX}"
            )));
        }

        let webhook_secret = lookup("STATUSPAGE_WEBHOOK_SECRET").filter(|s| !s.is_empty());

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| DomainError::config(format!("PORT {raw:?} is invalid: {e}")))?,
            None => DEFAULT_PORT,
        };

        let log_level = normalize_log_level(
            lookup("LOG_LEVEL")
                .as_deref()
                .unwrap_or(DEFAULT_LOG_LEVEL),
        )?;

        Ok(Self {
            discord_webhook_url,
            webhook_secret,
            port,
            log_level,
            delivery_timeout: DELIVERY_TIMEOUT,
        })
    }

    /// Socket address to listen on
    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Both the destination URL and the secret are credentials.
        f.debug_struct("Config")
            .field("discord_webhook_url", &"<redacted>")
            .field(
                "webhook_secret",
                &self.webhook_secret.as_ref().map(|_| "<redacted>"),
            )
            .field("port", &self.port)
            .field("log_level", &self.log_level)
            .field("delivery_timeout", &self.delivery_timeout)
            .finish()
    }
}

/// Map Python-style level names (`INFO`, `WARNING`, `CRITICAL`) onto
/// `tracing` levels.
fn normalize_log_level(raw: &str) -> Result<String, DomainError> {
    let level = match raw.trim().to_lowercase().as_str() {
        "trace" => "trace",
        "debug" => "debug",
        "info" => "info",
        "warn" | "warning" => "warn",
        "error" | "critical" | "fatal" => "error",
        "off" => "off",
        other => {
            return Err(DomainError::config(format!(
                "LOG_LEVEL {other:?} is not a known level"
            )))
        }
    };
    Ok(level.to_string())
}

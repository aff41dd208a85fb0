//! Notification - Outbound Discord webhook message
//!
//! Shapes follow the Discord "Execute Webhook" body: a message carries a list
//! of embeds plus the display name and avatar of the posting bot.

use serde::Serialize;

use crate::domain::value_objects::EmbedColor;

/// Statuspage logo, used as footer icon and bot avatar
pub const STATUSPAGE_ICON_URL: &str =
    "https://dka575ofm4ao0.cloudfront.net/assets/base/logo-6d88bcb6c99a.png";

pub const FOOTER_TEXT: &str = "Statuspage Notification";

/// Display name of the posting bot
pub const BOT_USERNAME: &str = "Statuspage";

/// Body of the POST sent to the Discord webhook URL
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WebhookMessage {
    pub embeds: Vec<Embed>,
    pub username: String,
    pub avatar_url: String,
}

/// Structured notification rendered by Discord
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Embed {
    pub title: String,
    pub description: String,
    pub color: EmbedColor,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// RFC 3339 timestamp shown next to the footer
    pub timestamp: String,
    pub fields: Vec<EmbedField>,
    pub footer: EmbedFooter,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EmbedFooter {
    pub text: String,
    pub icon_url: String,
}

impl WebhookMessage {
    /// Wrap a single embed as posted by the Statuspage bot
    pub fn new(embed: Embed) -> Self {
        Self {
            embeds: vec![embed],
            username: BOT_USERNAME.to_string(),
            avatar_url: STATUSPAGE_ICON_URL.to_string(),
        }
    }
}

impl Embed {
    /// Look up a field value by name
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }
}

impl EmbedField {
    pub fn inline(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            inline: true,
        }
    }

    pub fn block(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            inline: false,
        }
    }
}

impl Default for EmbedFooter {
    fn default() -> Self {
        Self {
            text: FOOTER_TEXT.to_string(),
            icon_url: STATUSPAGE_ICON_URL.to_string(),
        }
    }
}

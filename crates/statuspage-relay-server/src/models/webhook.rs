//! Webhook DTOs

use serde::Serialize;
use utoipa::ToSchema;

/// Response to an accepted Statuspage webhook
///
/// Returned before delivery to Discord has been attempted.
#[derive(Debug, Serialize, ToSchema)]
pub struct WebhookAck {
    pub message: String,
    /// Detected variant and status, e.g. `incident (investigating)` or `unknown`
    #[serde(rename = "type")]
    pub event_type: String,
}

impl WebhookAck {
    pub fn received(event_type: String) -> Self {
        Self {
            message: "Webhook received".to_string(),
            event_type,
        }
    }
}

//! Statuspage Webhook Route
//!
//! Receives Statuspage notifications, authenticates and parses them, then
//! hands delivery to a background task and acknowledges immediately.

use axum::{body::Bytes, extract::State, http::HeaderMap, routing::post, Json, Router};

use statuspage_relay::Envelope;

use crate::auth;
use crate::models::{ErrorResponse, WebhookAck};
use crate::routes::error::ApiError;
use crate::AppState;

/// Receive a Statuspage webhook notification
#[utoipa::path(
    post,
    path = "/webhook/statuspage",
    params(
        ("X-Webhook-Signature" = Option<String>, Header,
            description = "`sha256=<hex HMAC-SHA256 of the body>`; required when a secret is configured")
    ),
    request_body(
        content = String,
        description = "Statuspage webhook envelope (JSON)",
        content_type = "application/json"
    ),
    responses(
        (status = 200, description = "Webhook accepted; delivery runs in the background", body = WebhookAck),
        (status = 400, description = "Malformed payload", body = ErrorResponse),
        (status = 401, description = "Signature mismatch", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Webhook"
)]
pub async fn receive_statuspage_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<WebhookAck>, ApiError> {
    auth::verify_request(state.config.webhook_secret.as_deref(), &headers, &body)?;

    let envelope = Envelope::from_slice(&body)
        .inspect_err(|e| tracing::error!(error = %e, "Invalid webhook payload"))?;

    let event_type = envelope.describe();
    tracing::info!(
        page_id = %envelope.page.id,
        "Received {} webhook",
        event_type
    );

    // Detached: the response does not wait for Discord.
    drop(state.relay.dispatch(envelope));

    Ok(Json(WebhookAck::received(event_type)))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/webhook/statuspage", post(receive_statuspage_webhook))
}

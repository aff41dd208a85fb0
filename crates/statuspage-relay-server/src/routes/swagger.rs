//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{EndpointMap, ErrorResponse, HealthResponse, ServiceInfo, WebhookAck};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Service endpoints
        super::service::service_info,
        super::service::health_check,
        // Webhook endpoints
        super::statuspage::receive_statuspage_webhook,
    ),
    components(
        schemas(
            WebhookAck,
            HealthResponse,
            ServiceInfo,
            EndpointMap,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Webhook", description = "Inbound Statuspage notifications relayed to Discord"),
        (name = "Service", description = "Health probe and service description"),
    ),
    info(
        title = "Statuspage Relay API",
        description = "Receives Statuspage webhooks and posts them to a Discord channel as embeds",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    )
)]
pub struct ApiDoc;

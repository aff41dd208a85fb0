//! Service DTOs

use serde::Serialize;
use utoipa::ToSchema;

pub const SERVICE_ID: &str = "statuspage-webhook-handler";
pub const SERVICE_NAME: &str = "Statuspage to Discord Webhook Handler";

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

/// Static description of the service
#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceInfo {
    pub service: String,
    pub version: String,
    pub endpoints: EndpointMap,
    pub docs: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EndpointMap {
    pub webhook: String,
    pub health: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            service: SERVICE_ID.to_string(),
        }
    }
}

//! Service Routes - health probe and service description

use axum::{routing::get, Json, Router};

use crate::models::{EndpointMap, HealthResponse, ServiceInfo, SERVICE_NAME};
use crate::AppState;

/// Health check
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    ),
    tag = "Service"
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Service description with endpoint map
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service description", body = ServiceInfo)
    ),
    tag = "Service"
)]
pub async fn service_info() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: EndpointMap {
            webhook: "/webhook/statuspage".to_string(),
            health: "/health".to_string(),
        },
        docs: "/docs".to_string(),
    })
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(service_info))
        .route("/health", get(health_check))
}

#[cfg(test)]
mod tests {
    use crate::routes::build_router;
    use crate::test_support::{read_json, test_state, RecordingSink};
    use axum::{body::Body, http::Request, http::StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_health() {
        let app = build_router(test_state(None, Arc::new(RecordingSink::default())));

        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            read_json(response).await,
            serde_json::json!({"status": "healthy", "service": "statuspage-webhook-handler"})
        );
    }

    #[tokio::test]
    async fn test_service_info() {
        let app = build_router(test_state(None, Arc::new(RecordingSink::default())));

        let response = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        assert_eq!(body["service"], "Statuspage to Discord Webhook Handler");
        assert_eq!(body["endpoints"]["webhook"], "/webhook/statuspage");
        assert_eq!(body["endpoints"]["health"], "/health");
        assert_eq!(body["docs"], "/docs");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_openapi_document() {
        let app = build_router(test_state(None, Arc::new(RecordingSink::default())));

        let response = app
            .oneshot(Request::get("/openapi.json").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        assert!(body["paths"]["/webhook/statuspage"]["post"].is_object());
        assert!(body["paths"]["/health"]["get"].is_object());
    }
}

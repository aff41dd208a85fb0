//! Statuspage Relay API Routes
//!
//! - /webhook/statuspage - Inbound Statuspage notifications
//! - /health - Liveness probe
//! - / - Service description
//! - /docs - Swagger UI (OpenAPI document at /openapi.json)

pub mod error;
pub mod service;
pub mod statuspage;
pub mod swagger;

use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::AppState;

/// Build the complete router with shared state
pub fn build_router(state: AppState) -> Router {
    let openapi = swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/docs").url("/openapi.json", openapi))
        .merge(service::router())
        .merge(statuspage::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

//! HTTP mapping of domain errors

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use statuspage_relay::DomainError;

use crate::models::ErrorResponse;

/// Domain error rendered as `{"detail": ...}` with a matching status code
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self.0 {
            DomainError::Auth => (StatusCode::UNAUTHORIZED, "Invalid signature"),
            DomainError::MalformedPayload(_) => (StatusCode::BAD_REQUEST, "Invalid payload"),
            DomainError::Config(_) | DomainError::Delivery(_) => {
                tracing::error!(error = %self.0, "Unexpected error processing webhook");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        (
            status,
            Json(ErrorResponse {
                detail: detail.to_string(),
            }),
        )
            .into_response()
    }
}

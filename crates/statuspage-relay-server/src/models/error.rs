//! Error DTO

use serde::Serialize;
use utoipa::ToSchema;

/// JSON body of every non-2xx response
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}

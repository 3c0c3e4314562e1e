//! Health check endpoint.

use axum::Json;

use crate::dto::HealthResponse;

pub async fn check() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

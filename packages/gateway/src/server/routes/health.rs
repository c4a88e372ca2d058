use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    upstream: String,
}

/// Health check endpoint
///
/// Liveness only: the upstream is not contacted, so a failing Octo API does
/// not take the gateway out of rotation.
pub async fn health_handler() -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            upstream: "configured".to_string(),
        }),
    )
}

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::server::app::AppState;

/// Body returned for every upstream failure.
pub const FETCH_FAILED: &str = "Failed to fetch profiles";

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Profile listing relay
///
/// Forwards to the upstream with the fixed field list and relays the body
/// bytes unchanged. Network errors, non-2xx statuses, timeouts and non-JSON bodies
/// all collapse into one 500.
pub async fn profiles_handler(State(state): State<AppState>) -> Response {
    match state.profiles.list_profiles().await {
        Ok(body) => ([(header::CONTENT_TYPE, "application/json")], body).into_response(),
        Err(e) => {
            tracing::error!(error = %format!("{:#}", e), "Failed to fetch profiles");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: FETCH_FAILED.to_string(),
                }),
            )
                .into_response()
        }
    }
}

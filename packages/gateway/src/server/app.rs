//! Application setup and server configuration.

use std::sync::Arc;

use anyhow::Result;
use axum::{http::Method, routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::kernel::{BaseProfileSource, OctoAdapter};
use crate::server::routes::{health_handler, profiles_handler};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub profiles: Arc<dyn BaseProfileSource>,
}

impl AppState {
    pub fn new(profiles: Arc<dyn BaseProfileSource>) -> Self {
        Self { profiles }
    }
}

/// Build the Axum application router against the real upstream
pub fn build_app(config: &Config) -> Result<Router> {
    let source = OctoAdapter::from_config(config)?;
    Ok(build_router(AppState::new(Arc::new(source))))
}

/// Build the router around an already-wired state
pub fn build_router(state: AppState) -> Router {
    // CORS configuration - any origin may read the profile listing
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET]);

    Router::new()
        .route("/api/profiles", get(profiles_handler))
        .route("/health", get(health_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

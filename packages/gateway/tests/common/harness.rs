//! Test harness for driving the gateway router against a mock upstream.
//!
//! Each test gets its own wiremock server standing in for the Octo API and a
//! router built through the same `build_app` path the binary uses.

use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use gateway_core::{server::build_app, Config};
use tower::ServiceExt;
use wiremock::MockServer;

pub const TEST_TOKEN: &str = "test-octo-token";
pub const UPSTREAM_PATH: &str = "/api/v2/automation/profiles";

pub struct TestHarness {
    pub upstream: MockServer,
    pub app: Router,
}

impl TestHarness {
    pub async fn new() -> Self {
        Self::with_timeout(Duration::from_secs(5)).await
    }

    pub async fn with_timeout(timeout: Duration) -> Self {
        // Respects RUST_LOG; try_init avoids panicking when already set.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let upstream = MockServer::start().await;
        let config = Config {
            port: 0,
            octo_api_url: format!("{}{}", upstream.uri(), UPSTREAM_PATH),
            octo_api_token: TEST_TOKEN.to_string(),
            upstream_timeout: timeout,
        };
        let app = build_app(&config).expect("Failed to build app");

        Self { upstream, app }
    }

    /// Issue a GET against the router and decode the JSON body
    pub async fn get(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        let (status, bytes) = self.get_raw(uri).await;
        let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, body)
    }

    /// Issue a GET against the router and return the body bytes as sent
    pub async fn get_raw(&self, uri: &str) -> (StatusCode, Vec<u8>) {
        let response = self
            .app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes.to_vec())
    }
}

//! Integration tests for the profile relay and health routes.

mod common;

use std::time::Duration;

use axum::http::StatusCode;
use common::{TestHarness, TEST_TOKEN, UPSTREAM_PATH};
use octo_client::{TOKEN_HEADER, UPSTREAM_FIELDS};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn relays_upstream_body_verbatim() {
    let harness = TestHarness::new().await;
    let upstream_body = json!({
        "success": true,
        "data": [
            {
                "uuid": "0f5c",
                "title": "Alpha",
                "status": 1,
                "proxy": {"mode": "http", "host": "10.0.0.1", "port": 3128},
                "storage_options": {"cookies": true},
                "created_at": "2024-01-01T00:00:00Z"
            }
        ],
        "total_count": 1,
        "page": 0
    });

    Mock::given(method("GET"))
        .and(path(UPSTREAM_PATH))
        .and(header(TOKEN_HEADER, TEST_TOKEN))
        .and(query_param("page_len", "100"))
        .and(query_param("page", "0"))
        .and(query_param("fields", UPSTREAM_FIELDS))
        .and(query_param("ordering", "active"))
        .respond_with(ResponseTemplate::new(200).set_body_json(upstream_body.clone()))
        .expect(1)
        .mount(&harness.upstream)
        .await;

    let (status, body) = harness.get("/api/profiles").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, upstream_body);
}

#[tokio::test]
async fn relay_keeps_upstream_key_order_and_spacing() {
    let harness = TestHarness::new().await;
    let raw = r#"{"total_count": 2, "data": [{"uuid": "b", "title": "Zed"}, {"uuid": "a", "title": "Ann"}], "success": true}"#;

    Mock::given(method("GET"))
        .and(path(UPSTREAM_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_raw(raw, "application/json"))
        .expect(1)
        .mount(&harness.upstream)
        .await;

    let (status, body) = harness.get_raw("/api/profiles").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(String::from_utf8(body).unwrap(), raw);
}

#[tokio::test]
async fn caller_query_is_not_forwarded() {
    let harness = TestHarness::new().await;

    Mock::given(method("GET"))
        .and(path(UPSTREAM_PATH))
        .and(query_param("fields", UPSTREAM_FIELDS))
        .and(query_param("page_len", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&harness.upstream)
        .await;

    let (status, body) = harness
        .get("/api/profiles?fields=title&page_len=5&ordering=title")
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"data": []}));
}

#[tokio::test]
async fn upstream_503_becomes_generic_500() {
    let harness = TestHarness::new().await;

    Mock::given(method("GET"))
        .and(path(UPSTREAM_PATH))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&harness.upstream)
        .await;

    let (status, body) = harness.get("/api/profiles").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Failed to fetch profiles"}));
}

#[tokio::test]
async fn upstream_auth_failure_becomes_generic_500() {
    let harness = TestHarness::new().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": "bad token"})))
        .mount(&harness.upstream)
        .await;

    let (status, body) = harness.get("/api/profiles").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Failed to fetch profiles"}));
}

#[tokio::test]
async fn non_json_upstream_body_becomes_generic_500() {
    let harness = TestHarness::new().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&harness.upstream)
        .await;

    let (status, body) = harness.get("/api/profiles").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Failed to fetch profiles"}));
}

#[tokio::test]
async fn slow_upstream_times_out_as_500() {
    let harness = TestHarness::with_timeout(Duration::from_millis(200)).await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": []}))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&harness.upstream)
        .await;

    let (status, body) = harness.get("/api/profiles").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Failed to fetch profiles"}));
}

#[tokio::test]
async fn health_does_not_touch_upstream() {
    let harness = TestHarness::new().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&harness.upstream)
        .await;

    let (status, body) = harness.get("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "healthy", "upstream": "configured"}));
}

#[tokio::test]
async fn unknown_route_is_404() {
    let harness = TestHarness::new().await;
    let (status, _) = harness.get("/api/profiles/123").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

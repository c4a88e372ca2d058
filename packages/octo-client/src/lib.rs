//! Pure Octo Browser profiles REST API client.
//!
//! Two clients live here:
//!
//! - [`OctoClient`] talks to the upstream Octo API directly and needs the API
//!   token. It returns the raw JSON bytes so a proxy can relay them untouched.
//! - [`GatewayClient`] talks to the dashboard gateway's `/api/profiles`
//!   route and decodes the `{ data: [...] }` envelope into [`Profile`]s.
//!
//! # Example
//!
//! ```rust,ignore
//! use octo_client::GatewayClient;
//!
//! let client = GatewayClient::new("http://localhost:5001");
//! let profiles = client.fetch_profiles().await?;
//! for profile in &profiles {
//!     println!("{} ({})", profile.title, profile.status);
//! }
//! ```

pub mod error;
pub mod types;

pub use error::{OctoError, Result};
pub use types::{Envelope, Profile, ProfileProxy};

/// Header carrying the upstream API token.
pub const TOKEN_HEADER: &str = "X-Octo-Api-Token";

/// Fields requested from the upstream API by the gateway.
pub const UPSTREAM_FIELDS: &str = "title,description,proxy,start_pages,tags,status,last_active,version,storage_options,created_at,updated_at";

/// Fields the dashboard asks the gateway for.
pub const DASHBOARD_FIELDS: &str = "title,description,proxy,status,created_at,updated_at";

/// Upstream page length. Only the first page is ever requested.
pub const PAGE_LEN: u32 = 100;

/// Route the gateway serves profiles on.
pub const PROFILES_PATH: &str = "/api/profiles";

/// Client for the upstream Octo Browser API.
pub struct OctoClient {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl OctoClient {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            token: token.into(),
        }
    }

    /// Build a client whose requests fail after `timeout`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn with_timeout(
        base_url: impl Into<String>,
        token: impl Into<String>,
        timeout: std::time::Duration,
    ) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            token: token.into(),
        })
    }

    /// Full upstream URL for the fixed profile listing query.
    pub fn profiles_url(&self) -> String {
        format!(
            "{}?page_len={}&page=0&fields={}&ordering=active",
            self.base_url, PAGE_LEN, UPSTREAM_FIELDS
        )
    }

    /// Fetch the first page of profiles and return the body bytes as sent.
    ///
    /// The body is checked to be JSON but never re-encoded.
    pub async fn list_profiles_raw(&self) -> Result<Vec<u8>> {
        let url = self.profiles_url();
        tracing::debug!(url = %url, "Requesting profiles from upstream");

        let resp = self
            .client
            .get(&url)
            .header(TOKEN_HEADER, &self.token)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(OctoError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = resp.bytes().await?;
        serde_json::from_slice::<serde::de::IgnoredAny>(&body)?;
        Ok(body.to_vec())
    }
}

/// Client for the dashboard gateway.
#[derive(Clone)]
pub struct GatewayClient {
    client: reqwest::Client,
    base_url: String,
}

impl GatewayClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn profiles_url(&self) -> String {
        format!(
            "{}{}?fields={}&ordering=active",
            self.base_url.trim_end_matches('/'),
            PROFILES_PATH,
            DASHBOARD_FIELDS
        )
    }

    /// Fetch profiles through the gateway and unwrap the envelope.
    pub async fn fetch_profiles(&self) -> Result<Vec<Profile>> {
        let url = self.profiles_url();
        let resp = self.client.get(&url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(OctoError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body: serde_json::Value = resp.json().await?;
        let profiles = decode_envelope(body)?;
        tracing::info!(count = profiles.len(), "Fetched profiles from gateway");

        Ok(profiles)
    }
}

/// Unwrap `{ data: [...] }` into profiles.
///
/// A missing or `null` `data` key is [`OctoError::MissingData`].
pub fn decode_envelope(body: serde_json::Value) -> Result<Vec<Profile>> {
    let envelope: Envelope<Vec<Profile>> = serde_json::from_value(body)?;
    envelope.data.ok_or(OctoError::MissingData)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn decode_envelope_reads_profiles() {
        let body = json!({
            "success": true,
            "data": [{
                "uuid": "p1",
                "title": "Alpha",
                "status": 1,
                "proxy": {"mode": "http", "host": "10.0.0.1", "port": 8080},
                "created_at": "2024-01-01T00:00:00Z",
                "updated_at": "2024-01-02T00:00:00Z",
                "tags": ["a"]
            }]
        });

        let profiles = decode_envelope(body).unwrap();
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].id, "p1");
        assert_eq!(profiles[0].title, "Alpha");
        assert_eq!(profiles[0].description, None);
        assert_eq!(profiles[0].proxy.as_ref().unwrap().port, 8080);
    }

    #[test]
    fn decode_envelope_keeps_uuid_records_distinct() {
        let body = json!({
            "data": [
                {"uuid": "a1", "title": "A", "status": 0},
                {"uuid": "b2", "title": "B", "status": 1}
            ]
        });

        let profiles = decode_envelope(body).unwrap();
        let ids: Vec<&str> = profiles.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a1", "b2"]);
    }

    #[test]
    fn decode_envelope_tolerates_odd_records() {
        let body = json!({
            "data": [
                {"uuid": "a1", "title": "A", "status": null},
                {"uuid": "b2", "title": "B", "status": 1,
                 "proxy": {"mode": "http", "host": "10.0.0.1", "port": "8080"}},
                {"uuid": "c3", "title": "C", "status": 2,
                 "proxy": {"mode": "http"}}
            ]
        });

        let profiles = decode_envelope(body).unwrap();
        assert_eq!(profiles.len(), 3);
        assert_eq!(profiles[0].status, None);
        assert_eq!(profiles[1].proxy.as_ref().unwrap().port, 8080);
        assert_eq!(profiles[2].proxy, None);
    }

    #[test]
    fn decode_envelope_without_data_is_missing_data() {
        let err = decode_envelope(json!({})).unwrap_err();
        assert!(matches!(err, OctoError::MissingData));

        let err = decode_envelope(json!({"data": null})).unwrap_err();
        assert!(matches!(err, OctoError::MissingData));
    }

    #[test]
    fn decode_envelope_rejects_non_array_data() {
        let err = decode_envelope(json!({"data": "nope"})).unwrap_err();
        assert!(matches!(err, OctoError::Decode(_)));
    }

    #[test]
    fn api_error_message_names_status() {
        let err = OctoError::Api {
            status: 503,
            message: String::new(),
        };
        assert_eq!(err.to_string(), "HTTP error! status: 503");
    }

    #[test]
    fn gateway_url_has_no_double_slash() {
        let client = GatewayClient::new("http://localhost:5001/");
        assert_eq!(
            client.profiles_url(),
            "http://localhost:5001/api/profiles?fields=title,description,proxy,status,created_at,updated_at&ordering=active"
        );
    }

    #[tokio::test]
    async fn list_profiles_raw_sends_token_and_fixed_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v2/automation/profiles"))
            .and(header(TOKEN_HEADER, "secret"))
            .and(query_param("page_len", "100"))
            .and(query_param("page", "0"))
            .and(query_param("ordering", "active"))
            .and(query_param("fields", UPSTREAM_FIELDS))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
            .expect(1)
            .mount(&server)
            .await;

        let client = OctoClient::new(
            format!("{}/api/v2/automation/profiles", server.uri()),
            "secret",
        );
        let body = client.list_profiles_raw().await.unwrap();
        let decoded: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(decoded, json!({"data": []}));
    }

    #[tokio::test]
    async fn list_profiles_raw_keeps_bytes_as_sent() {
        let server = MockServer::start().await;
        let raw = r#"{"total_count": 1, "data": [{"uuid": "z", "title": "Zed"}], "success": true}"#;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(raw, "application/json"))
            .mount(&server)
            .await;

        let client = OctoClient::new(server.uri(), "secret");
        let body = client.list_profiles_raw().await.unwrap();
        assert_eq!(body, raw.as_bytes());
    }

    #[tokio::test]
    async fn list_profiles_raw_rejects_non_json() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let client = OctoClient::new(server.uri(), "secret");
        let err = client.list_profiles_raw().await.unwrap_err();
        assert!(matches!(err, OctoError::Decode(_)));
    }

    #[tokio::test]
    async fn list_profiles_raw_surfaces_upstream_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
            .mount(&server)
            .await;

        let client = OctoClient::new(server.uri(), "secret");
        match client.list_profiles_raw().await {
            Err(OctoError::Api { status, message }) => {
                assert_eq!(status, 503);
                assert_eq!(message, "maintenance");
            }
            other => panic!("expected Api error, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn fetch_profiles_reports_missing_data() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(PROFILES_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let client = GatewayClient::new(server.uri());
        let err = client.fetch_profiles().await.unwrap_err();
        assert!(matches!(err, OctoError::MissingData));
    }
}

use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

const DEFAULT_PORT: u16 = 5001;
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Application configuration loaded from environment variables.
///
/// Read once at startup and handed to `build_app`; nothing mutates it later.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub octo_api_url: String,
    pub octo_api_token: String,
    pub upstream_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = match lookup("PORT") {
            Some(raw) => raw.parse().context("PORT must be a valid number")?,
            None => DEFAULT_PORT,
        };
        let timeout_secs = match lookup("OCTO_API_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse()
                .context("OCTO_API_TIMEOUT_SECS must be a whole number of seconds")?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            port,
            octo_api_url: lookup("OCTO_API_URL").context("OCTO_API_URL must be set")?,
            octo_api_token: lookup("OCTO_API_TOKEN").context("OCTO_API_TOKEN must be set")?,
            upstream_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

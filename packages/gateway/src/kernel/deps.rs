//! Server dependencies (using traits for testability)
//!
//! Production wiring of the kernel traits onto concrete clients.

use anyhow::{Context, Result};
use async_trait::async_trait;
use octo_client::OctoClient;
use std::sync::Arc;

use crate::config::Config;
use crate::kernel::BaseProfileSource;

// =============================================================================
// OctoClient Adapter (implements BaseProfileSource trait)
// =============================================================================

/// Wrapper around OctoClient that implements BaseProfileSource trait
pub struct OctoAdapter(pub Arc<OctoClient>);

impl OctoAdapter {
    pub fn new(client: Arc<OctoClient>) -> Self {
        Self(client)
    }

    /// Build the upstream client from configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = OctoClient::with_timeout(
            config.octo_api_url.clone(),
            config.octo_api_token.clone(),
            config.upstream_timeout,
        )
        .context("Failed to create Octo API client")?;

        Ok(Self::new(Arc::new(client)))
    }
}

#[async_trait]
impl BaseProfileSource for OctoAdapter {
    async fn list_profiles(&self) -> Result<Vec<u8>> {
        self.0
            .list_profiles_raw()
            .await
            .context("Octo API profile request failed")
    }
}

// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only. Route handlers depend on them so the
// upstream API can be swapped for a mock in tests.
//
// Naming convention: Base* for trait names (e.g., BaseProfileSource)

use anyhow::Result;
use async_trait::async_trait;

// =============================================================================
// Profile Source Trait (Infrastructure - upstream profile listing)
// =============================================================================

#[async_trait]
pub trait BaseProfileSource: Send + Sync {
    /// Fetch the profile listing as raw JSON bytes, exactly as the upstream sent them
    async fn list_profiles(&self) -> Result<Vec<u8>>;
}

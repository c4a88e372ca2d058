// TestDependencies - mock implementations for testing
//
// Provides a mock profile source that can be injected into the router for tests.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use super::BaseProfileSource;

// =============================================================================
// Mock Profile Source
// =============================================================================

pub struct MockProfileSource {
    responses: Arc<Mutex<Vec<Result<Vec<u8>, String>>>>,
    calls: AtomicUsize,
}

impl MockProfileSource {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            calls: AtomicUsize::new(0),
        }
    }

    /// Queue a successful upstream body
    pub fn with_response(self, body: serde_json::Value) -> Self {
        let bytes = serde_json::to_vec(&body).unwrap_or_default();
        self.with_raw_response(bytes)
    }

    /// Queue a successful upstream body as exact bytes
    pub fn with_raw_response(self, body: impl Into<Vec<u8>>) -> Self {
        self.responses.lock().unwrap().push(Ok(body.into()));
        self
    }

    /// Queue an upstream failure
    pub fn with_failure(self, message: &str) -> Self {
        self.responses.lock().unwrap().push(Err(message.to_string()));
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockProfileSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseProfileSource for MockProfileSource {
    async fn list_profiles(&self) -> Result<Vec<u8>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(anyhow!("MockProfileSource has no queued response"));
        }
        responses.remove(0).map_err(|e| anyhow!(e))
    }
}

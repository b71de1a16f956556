//! Shared application state for the mindbridge server

use std::sync::Arc;

use chrono::{DateTime, Utc};
use mindbridge_core::{MemoryStore, Store};

/// Shared application state accessible by all handlers
#[derive(Clone)]
pub struct AppState {
    /// Entity store, constructed once per process
    pub store: Arc<dyn Store>,
    /// When the server started
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Create state backed by a freshly seeded in-memory store
    pub fn new() -> Self {
        Self::with_store(Arc::new(MemoryStore::new()))
    }

    /// Create state around an existing store
    pub fn with_store(store: Arc<dyn Store>) -> Self {
        Self {
            store,
            started_at: Utc::now(),
        }
    }

    /// Returns how long the server has been running
    pub fn uptime_seconds(&self) -> i64 {
        (Utc::now() - self.started_at).num_seconds()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

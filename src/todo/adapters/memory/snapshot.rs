//! In-memory snapshot store for tests and ephemeral sessions.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::todo::ports::{SnapshotStore, SnapshotStoreError, SnapshotStoreResult};

/// Thread-safe in-memory snapshot store.
#[derive(Debug, Clone, Default)]
pub struct InMemorySnapshotStore {
    state: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemorySnapshotStore {
    /// Creates an empty in-memory snapshot store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with one payload, for load-path tests.
    #[must_use]
    pub fn with_payload(key: impl Into<String>, payload: impl Into<String>) -> Self {
        let store = Self::new();
        if let Ok(mut state) = store.state.write() {
            state.insert(key.into(), payload.into());
        }
        store
    }
}

#[async_trait]
impl SnapshotStore for InMemorySnapshotStore {
    async fn load(&self, key: &str) -> SnapshotStoreResult<Option<String>> {
        let state = self
            .state
            .read()
            .map_err(|err| SnapshotStoreError::storage(std::io::Error::other(err.to_string())))?;
        Ok(state.get(key).cloned())
    }

    async fn save(&self, key: &str, payload: &str) -> SnapshotStoreResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| SnapshotStoreError::storage(std::io::Error::other(err.to_string())))?;
        state.insert(key.to_owned(), payload.to_owned());
        Ok(())
    }
}

//! Snapshot port for durable key-value persistence.
//!
//! The todo store persists its entire collection as one opaque payload
//! under a fixed key, overwriting the previous value on every write. The
//! codec is a service-layer concern; adapters move strings.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for snapshot store operations.
pub type SnapshotStoreResult<T> = Result<T, SnapshotStoreError>;

/// Durable key-value persistence contract.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Reads the payload stored under `key`.
    ///
    /// Returns `None` when no payload has been written yet.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotStoreError`] when the backing storage cannot be
    /// read.
    async fn load(&self, key: &str) -> SnapshotStoreResult<Option<String>>;

    /// Writes `payload` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotStoreError`] when the backing storage rejects the
    /// write.
    async fn save(&self, key: &str, payload: &str) -> SnapshotStoreResult<()>;
}

/// Errors returned by snapshot store implementations.
#[derive(Debug, Clone, Error)]
pub enum SnapshotStoreError {
    /// Storage-layer failure.
    #[error("snapshot storage error: {0}")]
    Storage(Arc<dyn std::error::Error + Send + Sync>),
}

impl SnapshotStoreError {
    /// Wraps a storage-layer error.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Arc::new(err))
    }
}

//! Port contracts for todo persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by the todo store.

pub mod snapshot;

pub use snapshot::{SnapshotStore, SnapshotStoreError, SnapshotStoreResult};

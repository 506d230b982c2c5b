//! In-memory adapters for todo persistence.

mod snapshot;

pub use snapshot::InMemorySnapshotStore;

//! Filesystem adapters for todo persistence.

mod snapshot;

pub use snapshot::DirSnapshotStore;

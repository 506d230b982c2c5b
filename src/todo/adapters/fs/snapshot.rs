//! Directory-backed snapshot store.
//!
//! Each key maps to one `<key>.json` file inside a capability-scoped
//! directory. Writes land in a temporary sibling first and are renamed
//! over the target, so a crash mid-write leaves the previous snapshot
//! intact.

use async_trait::async_trait;
use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::sync::Arc;

use crate::todo::ports::{SnapshotStore, SnapshotStoreError, SnapshotStoreResult};

/// Snapshot store writing one JSON file per key inside a directory.
#[derive(Debug, Clone)]
pub struct DirSnapshotStore {
    dir: Arc<Dir>,
}

impl DirSnapshotStore {
    /// Opens the directory at `path` with ambient authority.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotStoreError`] when the directory cannot be opened.
    pub fn open_ambient(path: &Utf8Path) -> SnapshotStoreResult<Self> {
        let dir =
            Dir::open_ambient_dir(path, ambient_authority()).map_err(SnapshotStoreError::storage)?;
        Ok(Self::from_dir(dir))
    }

    /// Wraps an already-opened capability-scoped directory.
    #[must_use]
    pub fn from_dir(dir: Dir) -> Self {
        Self { dir: Arc::new(dir) }
    }

    fn file_name(key: &str) -> String {
        format!("{key}.json")
    }
}

#[async_trait]
impl SnapshotStore for DirSnapshotStore {
    async fn load(&self, key: &str) -> SnapshotStoreResult<Option<String>> {
        match self.dir.read_to_string(Self::file_name(key)) {
            Ok(payload) => Ok(Some(payload)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(SnapshotStoreError::storage(err)),
        }
    }

    async fn save(&self, key: &str, payload: &str) -> SnapshotStoreResult<()> {
        let target = Self::file_name(key);
        let staging = format!("{target}.tmp");
        self.dir
            .write(&staging, payload)
            .map_err(SnapshotStoreError::storage)?;
        self.dir
            .rename(&staging, &self.dir, &target)
            .map_err(SnapshotStoreError::storage)?;
        Ok(())
    }
}

//! The todo store service.
//!
//! `TodoStore` owns the authoritative in-memory todo collection and keeps
//! it synchronised with a [`SnapshotStore`]: after every state-changing
//! operation the whole collection is serialised as one JSON array and
//! written under a fixed key. Durability is best-effort; a failed write is
//! logged and never surfaced to the caller, and operations that change
//! nothing write nothing.

use crate::todo::{
    domain::{Todo, TodoEdit, TodoId},
    ports::SnapshotStore,
};
use mockable::Clock;
use std::sync::Arc;

/// Storage key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "todos";

/// Where newly added todos land in the collection.
///
/// Display order is the collection order, so prepend shows newest first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InsertPosition {
    /// New todos go to the front (newest-first display).
    #[default]
    Prepend,
    /// New todos go to the back.
    Append,
}

/// Construction options for a [`TodoStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoStoreConfig {
    storage_key: String,
    insert_position: InsertPosition,
}

impl TodoStoreConfig {
    /// Creates a config with the default storage key and newest-first
    /// insertion.
    #[must_use]
    pub fn new() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            insert_position: InsertPosition::default(),
        }
    }

    /// Sets the durable key the snapshot is stored under.
    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Sets the insertion position for newly added todos.
    #[must_use]
    pub const fn with_insert_position(mut self, position: InsertPosition) -> Self {
        self.insert_position = position;
        self
    }
}

impl Default for TodoStoreConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Authoritative todo collection with snapshot persistence.
///
/// The store is the single writer: mutating operations take `&mut self`
/// and run to completion, so no caller can observe a torn state. Lookup
/// misses and validation rejections are silent no-ops.
pub struct TodoStore<S, C>
where
    S: SnapshotStore,
    C: Clock + Send + Sync,
{
    todos: Vec<Todo>,
    snapshots: Arc<S>,
    clock: Arc<C>,
    config: TodoStoreConfig,
}

impl<S, C> TodoStore<S, C>
where
    S: SnapshotStore,
    C: Clock + Send + Sync,
{
    /// Opens a store with default configuration, loading any existing
    /// snapshot.
    pub async fn open(snapshots: Arc<S>, clock: Arc<C>) -> Self {
        Self::open_with(snapshots, clock, TodoStoreConfig::new()).await
    }

    /// Opens a store, loading the snapshot stored under the configured key.
    ///
    /// An absent, unreadable, or unparseable snapshot yields an empty
    /// collection; load problems are logged, never returned.
    pub async fn open_with(snapshots: Arc<S>, clock: Arc<C>, config: TodoStoreConfig) -> Self {
        let todos = load_snapshot(&*snapshots, &config.storage_key).await;
        Self {
            todos,
            snapshots,
            clock,
            config,
        }
    }

    /// Returns the current ordered todo collection.
    #[must_use]
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// Returns the todo with the given id, if present.
    #[must_use]
    pub fn find(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id() == id)
    }

    /// Returns the number of todos in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.todos.len()
    }

    /// Returns whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Adds a new todo built from `text`.
    ///
    /// Text that trims to empty is silently discarded. On success the new
    /// record lands at the configured insert position and the snapshot is
    /// rewritten.
    pub async fn add(&mut self, text: &str) {
        let Ok(todo) = Todo::new(text, &*self.clock) else {
            return;
        };
        match self.config.insert_position {
            InsertPosition::Prepend => self.todos.insert(0, todo),
            InsertPosition::Append => self.todos.push(todo),
        }
        self.persist().await;
    }

    /// Flips the completion flag of the todo with the given id.
    ///
    /// A miss is a silent no-op.
    pub async fn toggle(&mut self, id: TodoId) {
        let clock = Arc::clone(&self.clock);
        let Some(todo) = self.todos.iter_mut().find(|todo| todo.id() == id) else {
            return;
        };
        todo.toggle(&*clock);
        self.persist().await;
    }

    /// Applies an edit to the todo with the given id.
    ///
    /// A miss, a rejected edit (text trimming to empty), and an edit that
    /// changes nothing are all silent no-ops; only an actual change
    /// rewrites the snapshot.
    pub async fn update(&mut self, id: TodoId, edit: &TodoEdit) {
        let clock = Arc::clone(&self.clock);
        let Some(todo) = self.todos.iter_mut().find(|todo| todo.id() == id) else {
            return;
        };
        if let Ok(true) = todo.apply_edit(edit, &*clock) {
            self.persist().await;
        }
    }

    /// Removes the todo with the given id.
    ///
    /// A miss is a silent no-op, so repeated deletes are idempotent.
    pub async fn delete(&mut self, id: TodoId) {
        let before = self.todos.len();
        self.todos.retain(|todo| todo.id() != id);
        if self.todos.len() != before {
            self.persist().await;
        }
    }

    /// Removes every completed todo, preserving the order of the rest.
    pub async fn clear_completed(&mut self) {
        let before = self.todos.len();
        self.todos.retain(|todo| !todo.completed());
        if self.todos.len() != before {
            self.persist().await;
        }
    }

    /// Rewrites the full snapshot under the configured key.
    ///
    /// Failures are logged and swallowed; the in-memory collection stays
    /// authoritative either way.
    async fn persist(&self) {
        let payload = match serde_json::to_string(&self.todos) {
            Ok(payload) => payload,
            Err(err) => {
                tracing::warn!(
                    key = %self.config.storage_key,
                    error = %err,
                    "todo snapshot serialisation failed; skipping write"
                );
                return;
            }
        };
        if let Err(err) = self.snapshots.save(&self.config.storage_key, &payload).await {
            tracing::warn!(
                key = %self.config.storage_key,
                error = %err,
                "todo snapshot write failed; latest change is not durable"
            );
        }
    }
}

/// Loads and decodes the snapshot under `key`, falling back to empty.
async fn load_snapshot(snapshots: &impl SnapshotStore, key: &str) -> Vec<Todo> {
    let payload = match snapshots.load(key).await {
        Ok(Some(payload)) => payload,
        Ok(None) => return Vec::new(),
        Err(err) => {
            tracing::warn!(
                key = %key,
                error = %err,
                "todo snapshot load failed; starting empty"
            );
            return Vec::new();
        }
    };
    serde_json::from_str(&payload).unwrap_or_else(|err| {
        tracing::warn!(
            key = %key,
            error = %err,
            "todo snapshot is malformed; starting empty"
        );
        Vec::new()
    })
}

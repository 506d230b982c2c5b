//! Shared world state for todo lifecycle BDD scenarios.

use std::sync::Arc;

use jotlist::todo::{
    adapters::memory::InMemorySnapshotStore,
    domain::TodoId,
    services::TodoStore,
};
use mockable::DefaultClock;
use rstest::fixture;

/// Store type used by the BDD world.
pub type TestTodoStore = TodoStore<InMemorySnapshotStore, DefaultClock>;

/// Scenario world for todo lifecycle behaviour tests.
pub struct TodoWorld {
    pub snapshots: Arc<InMemorySnapshotStore>,
    pub store: TestTodoStore,
    pub tracked_id: Option<TodoId>,
}

impl TodoWorld {
    /// Creates a world over a fresh in-memory snapshot store.
    #[must_use]
    pub fn new() -> Self {
        let snapshots = Arc::new(InMemorySnapshotStore::new());
        let store = run_async(TodoStore::open(
            Arc::clone(&snapshots),
            Arc::new(DefaultClock),
        ));
        Self {
            snapshots,
            store,
            tracked_id: None,
        }
    }
}

impl Default for TodoWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TodoWorld {
    TodoWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

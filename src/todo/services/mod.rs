//! Application services for todo state management.

mod store;

pub use store::{DEFAULT_STORAGE_KEY, InsertPosition, TodoStore, TodoStoreConfig};

//! Domain model for the todo store.
//!
//! The todo domain models record creation from raw user text, completion
//! toggling, and field edits while keeping all persistence concerns outside
//! of the domain boundary.

mod error;
mod ids;
mod todo;

pub use error::TodoDomainError;
pub use ids::TodoId;
pub use todo::{Todo, TodoEdit};

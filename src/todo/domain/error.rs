//! Error types for todo domain validation.

use thiserror::Error;

/// Errors returned while constructing or editing domain todo values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TodoDomainError {
    /// The todo text is empty after trimming.
    #[error("todo text must not be empty")]
    EmptyText,
}

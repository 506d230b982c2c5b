//! Todo list state management for Jotlist.
//!
//! This module implements the todo store: creating todo records from user
//! text, toggling and editing them, removing them individually or in bulk,
//! and keeping the collection synchronised with a durable key-value
//! snapshot. Lookup misses and validation rejections are silent no-ops; the
//! store models best-effort client state, not a transactional system. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The store service in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;

//! Jotlist: a client-side task-list state container.
//!
//! This crate provides the authoritative in-memory todo collection backing
//! a task-list application, together with a snapshot persistence boundary
//! to durable key-value storage.
//!
//! # Architecture
//!
//! Jotlist follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (memory, filesystem)
//!
//! # Modules
//!
//! - [`todo`]: Todo records, the store service, and snapshot persistence

pub mod todo;

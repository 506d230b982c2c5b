//! Step definitions for todo lifecycle BDD scenarios.

pub mod world;

mod then;
mod when;

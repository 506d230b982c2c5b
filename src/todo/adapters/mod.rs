//! Adapter implementations of the snapshot port.

pub mod fs;
pub mod memory;

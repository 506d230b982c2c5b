//! Unit tests for the todo module.
//!
//! - `domain_tests`: record construction, toggling, edit validation
//! - `store_tests`: store operations and persistence behaviour
//! - `snapshot_tests`: snapshot format, round-trips, adapter contracts

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]
#![expect(
    clippy::indexing_slicing,
    reason = "Test code uses indexing after length checks"
)]

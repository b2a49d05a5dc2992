//! Test utilities for tagsync
//!
//! In-memory stand-ins for the `tag` and `uuid` programs plus a few fixed
//! identifiers shared by the test suites.

pub mod fixtures;
pub mod mocks;

// Re-export commonly used types
pub use fixtures::{UUID_A, UUID_B, UUID_C, doi, uuid};
pub use mocks::{MockTagStore, MockUuidSource, RecordedCall};

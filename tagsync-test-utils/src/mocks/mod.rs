//! Mock implementations for testing

mod tag_store;
mod uuid_source;

pub use tag_store::{MockTagStore, RecordedCall};
pub use uuid_source::MockUuidSource;

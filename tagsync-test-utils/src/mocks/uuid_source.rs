//! Scripted UUID generator

use std::collections::VecDeque;
use std::sync::Mutex;
use tagsync_core::error::ToolError;
use tagsync_core::{Result, UuidSource};
use uuid::Uuid;

/// Mock implementation of [`UuidSource`]
///
/// Hands out the queued identifiers in order and fails once they run out.
#[derive(Default)]
pub struct MockUuidSource {
    queue: Mutex<VecDeque<Uuid>>,
    calls: Mutex<usize>,
}

impl MockUuidSource {
    pub fn new(uuids: impl IntoIterator<Item = Uuid>) -> Self {
        Self {
            queue: Mutex::new(uuids.into_iter().collect()),
            calls: Mutex::new(0),
        }
    }

    /// A generator that always fails
    pub fn failing() -> Self {
        Self::default()
    }

    /// Number of times `generate` was called
    pub fn calls(&self) -> usize {
        *self.calls.lock().expect("mock uuid source poisoned")
    }
}

impl UuidSource for MockUuidSource {
    fn generate(&self) -> Result<Uuid> {
        *self.calls.lock().expect("mock uuid source poisoned") += 1;
        self.queue
            .lock()
            .expect("mock uuid source poisoned")
            .pop_front()
            .ok_or_else(|| ToolError::failed("uuid", &[], Some(1), "mock generator exhausted").into())
    }
}

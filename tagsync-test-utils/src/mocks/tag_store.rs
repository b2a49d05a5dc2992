//! In-memory tag store

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tagsync_core::error::ToolError;
use tagsync_core::{Result, TagOperation, TagStore};

/// A call made against [`MockTagStore`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedCall {
    Read(PathBuf),
    Add(String, PathBuf),
    Remove(String, PathBuf),
}

/// Mock implementation of [`TagStore`]
///
/// Keeps tags per path in insertion order and records every call.
///
/// # Examples
///
/// ```rust
/// use std::path::Path;
/// use tagsync_core::TagStore;
/// use tagsync_test_utils::MockTagStore;
///
/// let store = MockTagStore::new().with_tags("/docs/a.pdf", &["Red"]);
/// store.add_tag("Blue", Path::new("/docs/a.pdf")).unwrap();
/// assert_eq!(store.tags("/docs/a.pdf"), vec!["Red", "Blue"]);
/// ```
#[derive(Default)]
pub struct MockTagStore {
    state: Mutex<MockState>,
}

#[derive(Default)]
struct MockState {
    tags: HashMap<PathBuf, Vec<String>>,
    calls: Vec<RecordedCall>,
    unreadable: bool,
    failing_add: Option<String>,
    failing_remove: Option<String>,
}

impl MockTagStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed `path` with `tags`
    pub fn with_tags(self, path: impl Into<PathBuf>, tags: &[&str]) -> Self {
        self.lock()
            .tags
            .insert(path.into(), tags.iter().map(|t| t.to_string()).collect());
        self
    }

    /// Listing fails, which the store contract reports as no tags
    pub fn unreadable(self) -> Self {
        self.lock().unreadable = true;
        self
    }

    /// Adding exactly `tag` fails
    pub fn failing_add(self, tag: &str) -> Self {
        self.lock().failing_add = Some(tag.to_string());
        self
    }

    /// Removing exactly `tag` fails
    pub fn failing_remove(self, tag: &str) -> Self {
        self.lock().failing_remove = Some(tag.to_string());
        self
    }

    /// Current tags on `path`
    pub fn tags(&self, path: impl AsRef<Path>) -> Vec<String> {
        self.lock()
            .tags
            .get(path.as_ref())
            .cloned()
            .unwrap_or_default()
    }

    /// Every call made so far
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.lock().calls.clone()
    }

    /// Mutations made so far, in order
    pub fn mutations(&self) -> Vec<TagOperation> {
        self.lock()
            .calls
            .iter()
            .filter_map(|call| match call {
                RecordedCall::Read(_) => None,
                RecordedCall::Add(tag, _) => Some(TagOperation::Add(tag.clone())),
                RecordedCall::Remove(tag, _) => Some(TagOperation::Remove(tag.clone())),
            })
            .collect()
    }

    /// Forget recorded calls but keep the tags
    pub fn clear_calls(&self) {
        self.lock().calls.clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockState> {
        self.state.lock().expect("mock tag store poisoned")
    }
}

fn mock_failure(flag: &str, tag: &str, path: &Path) -> ToolError {
    ToolError::failed(
        "tag",
        &[
            flag.to_string(),
            tag.to_string(),
            path.display().to_string(),
        ],
        Some(1),
        "mock failure",
    )
}

impl TagStore for MockTagStore {
    fn read_tags(&self, path: &Path) -> Result<Vec<String>> {
        let mut state = self.lock();
        state.calls.push(RecordedCall::Read(path.to_path_buf()));
        if state.unreadable {
            return Ok(Vec::new());
        }
        Ok(state.tags.get(path).cloned().unwrap_or_default())
    }

    fn add_tag(&self, tag: &str, path: &Path) -> Result<()> {
        let mut state = self.lock();
        state
            .calls
            .push(RecordedCall::Add(tag.to_string(), path.to_path_buf()));
        if state.failing_add.as_deref() == Some(tag) {
            return Err(mock_failure("--add", tag, path).into());
        }
        state
            .tags
            .entry(path.to_path_buf())
            .or_default()
            .push(tag.to_string());
        Ok(())
    }

    fn remove_tag(&self, tag: &str, path: &Path) -> Result<()> {
        let mut state = self.lock();
        state
            .calls
            .push(RecordedCall::Remove(tag.to_string(), path.to_path_buf()));
        if state.failing_remove.as_deref() == Some(tag) {
            return Err(mock_failure("--remove", tag, path).into());
        }
        if let Some(tags) = state.tags.get_mut(path) {
            tags.retain(|t| t != tag);
        }
        Ok(())
    }
}

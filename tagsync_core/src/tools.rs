//! External collaborators
//!
//! Tag storage and UUID generation are reached through the [`TagStore`] and
//! [`UuidSource`] traits. The default implementations shell out to the `tag`
//! and `uuid` programs; tests substitute in-memory doubles.

use crate::error::Result;
use std::path::Path;
use uuid::Uuid;

pub mod process;
pub mod tag_program;
pub mod uuid_program;

pub use process::{CommandOutput, Invocation};
pub use tag_program::TagProgram;
pub use uuid_program::UuidProgram;

/// Reads and mutates the tags attached to a file
pub trait TagStore {
    /// Tags currently attached to `path`, in the order the store reports them
    ///
    /// A store that cannot list tags for the file should report no tags
    /// rather than an error.
    fn read_tags(&self, path: &Path) -> Result<Vec<String>>;

    /// Attach `tag` to `path`
    fn add_tag(&self, tag: &str, path: &Path) -> Result<()>;

    /// Detach `tag` from `path`
    fn remove_tag(&self, tag: &str, path: &Path) -> Result<()>;
}

/// Produces new identifiers
pub trait UuidSource {
    fn generate(&self) -> Result<Uuid>;
}

/// Split a tag listing on commas and newlines, dropping blanks
pub fn split_tag_list(output: &str) -> Vec<String> {
    output
        .split([',', '\n'])
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_tag_list() {
        assert_eq!(
            split_tag_list("Red,uuid:abc, Work \n"),
            vec!["Red", "uuid:abc", "Work"]
        );
    }

    #[test]
    fn test_split_tag_list_empty() {
        assert!(split_tag_list("").is_empty());
        assert!(split_tag_list("\n").is_empty());
        assert!(split_tag_list(",,").is_empty());
    }
}

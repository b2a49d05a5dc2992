//! [`TagStore`] backed by the `tag` command line tool

use super::{Invocation, TagStore, split_tag_list};
use crate::error::Result;
use std::path::Path;

/// Talks to `tag --list/--add/--remove`
#[derive(Debug, Clone)]
pub struct TagProgram {
    program: String,
    /// Arguments placed before the subcommand flags
    args: Vec<String>,
}

impl TagProgram {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    fn mutate(&self, flag: &str, tag: &str, path: &Path) -> Result<()> {
        Invocation::new(&self.program)
            .args(&self.args)
            .arg(flag)
            .arg(tag)
            .arg(path)
            .run_checked()?;
        Ok(())
    }
}

impl Default for TagProgram {
    fn default() -> Self {
        Self::new("tag", Vec::new())
    }
}

impl TagStore for TagProgram {
    fn read_tags(&self, path: &Path) -> Result<Vec<String>> {
        let output = Invocation::new(&self.program)
            .args(&self.args)
            .args(["--no-name", "--list"])
            .arg(path)
            .run()?;

        if !output.success() {
            log::warn!(
                "Could not list tags for {} ({:?}), treating file as untagged",
                path.display(),
                output.code
            );
            return Ok(Vec::new());
        }

        Ok(split_tag_list(&output.stdout))
    }

    fn add_tag(&self, tag: &str, path: &Path) -> Result<()> {
        self.mutate("--add", tag, path)
    }

    fn remove_tag(&self, tag: &str, path: &Path) -> Result<()> {
        self.mutate("--remove", tag, path)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::Error;
    use crate::error::ToolError;
    use std::fs;
    use tempfile::TempDir;

    // Run through `sh` so the freshly written file is never exec'd directly.
    fn script(dir: &TempDir, body: &str) -> TagProgram {
        let path = dir.path().join("tag.sh");
        fs::write(&path, format!("{body}\n")).unwrap();
        TagProgram::new("sh", vec![path.to_string_lossy().into_owned()])
    }

    #[test]
    fn test_read_tags_parses_listing() {
        let dir = TempDir::new().unwrap();
        let store = script(&dir, "echo 'Red,uuid:x,Blue'");

        let tags = store.read_tags(Path::new("/any")).unwrap();
        assert_eq!(tags, vec!["Red", "uuid:x", "Blue"]);
    }

    #[test]
    fn test_read_failure_means_no_tags() {
        let dir = TempDir::new().unwrap();
        let store = script(&dir, "exit 1");

        assert!(store.read_tags(Path::new("/any")).unwrap().is_empty());
    }

    #[test]
    fn test_add_passes_tag_then_path() {
        let dir = TempDir::new().unwrap();
        let log = dir.path().join("args");
        let store = script(&dir, &format!("echo \"$@\" > '{}'", log.display()));

        store.add_tag("uuid:abc", Path::new("/docs/a.pdf")).unwrap();
        assert_eq!(
            fs::read_to_string(&log).unwrap().trim(),
            "--add uuid:abc /docs/a.pdf"
        );
    }

    #[test]
    fn test_remove_failure_is_fatal() {
        let dir = TempDir::new().unwrap();
        let store = script(&dir, "echo denied >&2; exit 2");

        let error = store.remove_tag("abc", Path::new("/any")).unwrap_err();
        match error {
            Error::Tool(ToolError::Failed { code, stderr, .. }) => {
                assert_eq!(code, Some(2));
                assert_eq!(stderr, "denied");
            }
            other => panic!("Expected tool failure, got {other:?}"),
        }
    }
}

//! tagsync Core Library
//!
//! Keeps the two identifier tags on a file in agreement: a bare UUID tag and
//! a `uuid:<uuid>` tag. The decision logic is pure ([`tags`], [`reconcile`]);
//! reading and writing tags and generating identifiers go through the
//! [`tools`] traits.

pub mod error;
pub mod executor;
pub mod reconcile;
pub mod tags;
pub mod tools;

// Re-export main types
pub use error::{Error, Result};
pub use executor::{Outcome, Reconciler, check_target};
pub use reconcile::{Plan, TagOperation};
pub use tags::{Classification, FoundTag, classify, clean_uuid, parse_uuid};
pub use tools::{TagProgram, TagStore, UuidProgram, UuidSource};

use error::ValidationError;

/// External program settings
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    pub tag_program: String,
    pub tag_args: Vec<String>,
    pub uuid_program: String,
    pub uuid_args: Vec<String>,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            tag_program: "tag".to_string(),
            tag_args: Vec::new(),
            uuid_program: "uuid".to_string(),
            uuid_args: Vec::new(),
        }
    }
}

impl ToolConfig {
    /// Reject settings that cannot possibly run
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        if self.tag_program.trim().is_empty() {
            return Err(ValidationError::invalid_configuration(
                "tools.tag_program must not be empty",
            ));
        }
        if self.uuid_program.trim().is_empty() {
            return Err(ValidationError::invalid_configuration(
                "tools.uuid_program must not be empty",
            ));
        }
        Ok(())
    }

    pub fn tag_store(&self) -> TagProgram {
        TagProgram::new(&self.tag_program, self.tag_args.clone())
    }

    pub fn uuid_source(&self) -> UuidProgram {
        UuidProgram::new(&self.uuid_program, self.uuid_args.clone())
    }
}

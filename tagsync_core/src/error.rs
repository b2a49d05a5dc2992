//! Error types for the tagsync core library
//!
//! Errors are grouped by where they come from so the CLI can map each group
//! to its own exit code.

use thiserror::Error;

pub mod io;
pub mod tool;
pub mod validation;

pub use self::io::{IoError, IoErrorKind};
pub use self::tool::ToolError;
pub use self::validation::ValidationError;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the tagsync core library
///
/// - I/O errors: the target file is missing or unusable
/// - Tool errors: an external `tag` or `uuid` invocation failed
/// - Validation errors: malformed input or configuration
#[derive(Error, Debug)]
pub enum Error {
    /// I/O related errors
    #[error(transparent)]
    Io(#[from] IoError),

    /// External tool errors
    #[error(transparent)]
    Tool(#[from] ToolError),

    /// Validation related errors
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Self::Io(IoError::from_std(source))
    }
}

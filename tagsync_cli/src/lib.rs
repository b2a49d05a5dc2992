//! tagsync command line interface
//!
//! Argument parsing, layered configuration and error reporting around
//! [`tagsync_core`].

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod terminal;

pub use cli::Cli;
pub use error::{CliError, CliResult, ExitCode};

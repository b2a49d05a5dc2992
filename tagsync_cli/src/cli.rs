//! Command line arguments

use crate::error::{CliError, CliResult, ErrorContext};
use clap::Parser;
use std::path::{Path, PathBuf};
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(name = "tagsync")]
#[command(
    author,
    version,
    about = "Keep a file's bare UUID tag and its uuid: tag in agreement",
    long_about = None
)]
pub struct Cli {
    /// File whose tags should be reconciled (used when --file is absent)
    #[arg(value_name = "FILE")]
    pub path: Option<PathBuf>,

    /// File whose tags should be reconciled
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// UUID to use when the file carries no UUID tag yet
    #[arg(short, long, value_name = "UUID")]
    pub uuid: Option<String>,

    /// Increase logging (-v operations, -vv commands, -vvv raw output)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Show what would change without modifying any tags
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Read configuration from this file instead of the default location
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// The file to work on: `--file` first, then the positional argument
    pub fn target(&self) -> CliResult<&Path> {
        self.file
            .as_deref()
            .or(self.path.as_deref())
            .ok_or_else(|| CliError::misuse("No file given"))
    }

    /// The `--uuid` value, validated
    pub fn explicit_uuid(&self) -> CliResult<Option<Uuid>> {
        self.uuid
            .as_deref()
            .map(|value| {
                tagsync_core::parse_uuid(value).map_err(|e| {
                    CliError::from(tagsync_core::Error::from(e))
                        .with_suggestion("Use the form xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx")
                })
            })
            .transpose()
    }

    /// Log level selected by the number of `-v` flags
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

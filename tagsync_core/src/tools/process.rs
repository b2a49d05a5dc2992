//! Blocking subprocess invocation
//!
//! Each run returns its own [`CommandOutput`]; nothing is shared between
//! calls.

use crate::error::ToolError;
use std::ffi::{OsStr, OsString};
use std::process::{Command, Stdio};

/// Captured result of one program run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` when killed by a signal
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// A program and its arguments
#[derive(Debug, Clone)]
pub struct Invocation {
    program: String,
    args: Vec<OsString>,
}

impl Invocation {
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    pub fn args<I, A>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|a| a.as_ref().to_os_string()));
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments rendered for messages
    pub fn display_args(&self) -> Vec<String> {
        self.args
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    /// Run to completion and capture output, whatever the exit status
    pub fn run(&self) -> Result<CommandOutput, ToolError> {
        log::debug!("Running: {} {}", self.program, self.display_args().join(" "));

        let output = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| ToolError::spawn(&self.program, e))?;

        let result = CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        log::trace!(
            "{} exited with {:?}, stdout={:?}, stderr={:?}",
            self.program,
            result.code,
            result.stdout,
            result.stderr
        );

        Ok(result)
    }

    /// Run and treat a non-zero exit as an error
    pub fn run_checked(&self) -> Result<CommandOutput, ToolError> {
        let output = self.run()?;
        if output.success() {
            Ok(output)
        } else {
            Err(ToolError::failed(
                &self.program,
                &self.display_args(),
                output.code,
                &output.stderr,
            ))
        }
    }
}

//! External tool error types

use thiserror::Error;

/// Failures of the `tag` and `uuid` programs
#[derive(Error, Debug)]
pub enum ToolError {
    /// Program could not be started at all
    #[error("Failed to run '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Program ran but exited unsuccessfully
    #[error("{}", format_failure(program, args, *code, stderr))]
    Failed {
        program: String,
        args: Vec<String>,
        code: Option<i32>,
        stderr: String,
    },

    /// Program succeeded but printed something unusable
    #[error("Unexpected output from '{program}': {output:?}")]
    InvalidOutput { program: String, output: String },
}

impl ToolError {
    /// Create a spawn error
    pub fn spawn(program: &str, source: std::io::Error) -> Self {
        Self::Spawn {
            program: program.to_string(),
            source,
        }
    }

    /// Create a non-zero exit error
    pub fn failed(program: &str, args: &[String], code: Option<i32>, stderr: &str) -> Self {
        Self::Failed {
            program: program.to_string(),
            args: args.to_vec(),
            code,
            stderr: stderr.trim().to_string(),
        }
    }

    /// Create an invalid output error
    pub fn invalid_output(program: &str, output: &str) -> Self {
        Self::InvalidOutput {
            program: program.to_string(),
            output: output.to_string(),
        }
    }

    /// Name of the program that failed
    pub fn program(&self) -> &str {
        match self {
            Self::Spawn { program, .. }
            | Self::Failed { program, .. }
            | Self::InvalidOutput { program, .. } => program,
        }
    }
}

fn format_failure(program: &str, args: &[String], code: Option<i32>, stderr: &str) -> String {
    let status = match code {
        Some(code) => format!("exited with status {code}"),
        None => "was terminated by a signal".to_string(),
    };
    let command = std::iter::once(program.to_string())
        .chain(args.iter().cloned())
        .collect::<Vec<_>>()
        .join(" ");

    if stderr.is_empty() {
        format!("'{command}' {status}")
    } else {
        format!("'{command}' {status}: {stderr}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_with_stderr() {
        let args = vec!["--remove".to_string(), "abc".to_string()];
        let error = ToolError::failed("tag", &args, Some(2), "  tag not present\n");

        assert_eq!(
            error.to_string(),
            "'tag --remove abc' exited with status 2: tag not present"
        );
    }

    #[test]
    fn test_failed_by_signal_without_stderr() {
        let error = ToolError::failed("uuid", &[], None, "");
        assert_eq!(error.to_string(), "'uuid' was terminated by a signal");
    }

    #[test]
    fn test_program_accessor() {
        let error = ToolError::invalid_output("uuid", "garbage");
        assert_eq!(error.program(), "uuid");
        assert!(error.to_string().contains("garbage"));
    }
}

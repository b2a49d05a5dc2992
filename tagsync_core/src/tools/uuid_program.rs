//! [`UuidSource`] backed by the `uuid` command line tool

use super::{Invocation, UuidSource};
use crate::error::{Result, ToolError};
use crate::tags::parse_uuid;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct UuidProgram {
    program: String,
    args: Vec<String>,
}

impl UuidProgram {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

impl Default for UuidProgram {
    fn default() -> Self {
        Self::new("uuid", Vec::new())
    }
}

impl UuidSource for UuidProgram {
    fn generate(&self) -> Result<Uuid> {
        let output = Invocation::new(&self.program)
            .args(&self.args)
            .run_checked()?;

        let generated = output.stdout.trim();
        let uuid = parse_uuid(generated)
            .map_err(|_| ToolError::invalid_output(&self.program, generated))?;
        log::debug!("Generated UUID {uuid}");
        Ok(uuid)
    }
}

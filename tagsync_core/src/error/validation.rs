//! Validation related error types

use thiserror::Error;

/// Validation and configuration errors
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Value is not a well-formed UUID
    #[error("Invalid UUID '{value}'")]
    InvalidUuid { value: String },

    /// Invalid configuration
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },
}

impl ValidationError {
    /// Create an invalid UUID error
    pub fn invalid_uuid(value: &str) -> Self {
        Self::InvalidUuid {
            value: value.to_string(),
        }
    }

    /// Create an invalid configuration error
    pub fn invalid_configuration(message: &str) -> Self {
        Self::InvalidConfiguration {
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_uuid_error() {
        let error = ValidationError::invalid_uuid("1234");
        assert_eq!(error.to_string(), "Invalid UUID '1234'");
    }

    #[test]
    fn test_invalid_configuration_error() {
        let error = ValidationError::invalid_configuration("tag_program is empty");
        assert!(error.to_string().contains("Invalid configuration"));
        assert!(error.to_string().contains("tag_program"));
    }
}

//! Error Types
//!
//! Failures surfaced by the host forms. The list editors themselves never fail.

use thiserror::Error;

/// Backend call failures
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("server responded {status}: {body}")]
    Status { status: u16, body: String },
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Request(err.to_string())
        }
    }
}

/// Submit-time validation failures. Positions are 1-based, as shown on the cards.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("A name is required")]
    MissingName,
    #[error("Task {position} needs a description")]
    EmptyTaskLabel { position: usize },
    #[error("Field {position} needs a display name")]
    EmptyFieldName { position: usize },
    #[error("Field name \"{0}\" is used more than once")]
    DuplicateFieldName(String),
    #[error("Dropdown field {position} needs at least one option")]
    MissingDropdownOptions { position: usize },
    #[error("Dropdown field {position} has a default that is not one of its options")]
    UnknownDropdownDefault { position: usize },
}

/// Injected configuration could not be read
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration object: {0}")]
    Invalid(String),
    #[error("unknown log level \"{0}\"")]
    LogLevel(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(ValidationError::EmptyTaskLabel { position: 2 }.to_string(), "Task 2 needs a description");
        assert_eq!(
            ValidationError::DuplicateFieldName("ph".to_string()).to_string(),
            "Field name \"ph\" is used more than once"
        );
        assert_eq!(
            ApiError::Status { status: 409, body: "exists".to_string() }.to_string(),
            "server responded 409: exists"
        );
    }
}

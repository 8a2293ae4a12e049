use thiserror::Error;

use crate::domain::StudentId;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Errors reported when a record violates a required-field or
/// uniqueness constraint.
///
/// Returned by the mutating store operations (`add`, `update`) and
/// surfaced to the user as a recoverable message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid email address: {email}")]
    InvalidEmail { email: String },

    #[error("age must be between 1 and 150, got {age}")]
    AgeOutOfRange { age: i32 },

    #[error("a student with email {email} already exists")]
    DuplicateEmail { email: String },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("no student with id {id}")]
    NotFound { id: StudentId },

    #[error("connection error: {0}")]
    Connection(String),

    #[error("database error: {0}")]
    Database(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True when the error is recoverable user input (re-prompt and retry)
    /// rather than an infrastructure failure.
    #[must_use]
    pub fn is_user_error(&self) -> bool {
        matches!(self, Error::Validation(_) | Error::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_render_field_context() {
        let err = ValidationError::MissingField { field: "name" };
        assert_eq!(err.to_string(), "missing required field: name");

        let err = ValidationError::AgeOutOfRange { age: 200 };
        assert!(err.to_string().contains("200"));
    }

    #[test]
    fn not_found_is_user_error() {
        let err = Error::NotFound {
            id: StudentId::new(42),
        };
        assert!(err.is_user_error());
        assert!(err.to_string().contains("42"));
    }

    #[test]
    fn database_error_is_not_user_error() {
        let err = Error::Database("locked".to_string());
        assert!(!err.is_user_error());
    }
}

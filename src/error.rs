//! Custom error types for gyra-shell
//!
//! This module defines the error hierarchy for the shell using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for gyra-shell operations
#[derive(Error, Debug)]
pub enum ShellError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization/deserialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Validation errors (registry contents, email addresses, chords)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },
}

impl ShellError {
    /// Create a "not found" error for palette commands
    pub fn command_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Command",
            identifier: identifier.into(),
        }
    }
}

impl From<std::io::Error> for ShellError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ShellError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for ShellError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

/// Result type alias for gyra-shell operations
pub type ShellResult<T> = Result<T, ShellError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ShellError::Config("bad chord".into());
        assert_eq!(err.to_string(), "Configuration error: bad chord");
    }

    #[test]
    fn test_not_found_error() {
        let err = ShellError::command_not_found("settings");
        assert_eq!(err.to_string(), "Command not found: settings");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let shell_err: ShellError = io_err.into();
        assert!(matches!(shell_err, ShellError::Io(_)));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let shell_err: ShellError = json_err.into();
        assert!(matches!(shell_err, ShellError::Json(_)));
    }

    #[test]
    fn test_from_yaml_error() {
        let yaml_err = serde_yaml::from_str::<serde_json::Value>("a: [").unwrap_err();
        let shell_err: ShellError = yaml_err.into();
        assert!(matches!(shell_err, ShellError::Yaml(_)));
    }
}

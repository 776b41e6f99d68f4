//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors that can occur when reading or mutating the contact store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading or writing the data file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The data file could not be parsed or serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An insert would violate the unique-name invariant
    #[error("Contact already exists: {0}")]
    DuplicateName(String),

    /// The referenced contact is not in the store
    #[error("Contact not found: {0}")]
    NotFound(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::DuplicateName("Alice".to_string());
        assert_eq!(err.to_string(), "Contact already exists: Alice");

        let err = StoreError::NotFound("Bob".to_string());
        assert_eq!(err.to_string(), "Contact not found: Bob");

        let err = ConfigError::MissingVar("CONTACTS_BIND_ADDR".to_string());
        assert_eq!(
            err.to_string(),
            "Missing required environment variable: CONTACTS_BIND_ADDR"
        );
    }

    #[test]
    fn test_invalid_value_display() {
        let err = ConfigError::InvalidValue {
            var: "CONTACTS_BIND_ADDR".to_string(),
            reason: "not a socket address".to_string(),
        };
        assert!(err.to_string().contains("CONTACTS_BIND_ADDR"));
        assert!(err.to_string().contains("not a socket address"));
    }
}

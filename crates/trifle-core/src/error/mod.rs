//! Error types and result aliases for Trifle operations.
//!
//! None of the core operations fail on well-typed input. Errors only come
//! from runtime-keyed record lookups and from loading configuration.

use thiserror::Error;

/// Unified error type for all Trifle operations
#[derive(Error, Debug)]
pub enum TrifleError {
    // Record errors
    #[error("Key '{key}' does not exist on the record")]
    UnknownKey { key: String },

    // Config errors
    #[error("Failed to parse trifle.toml: {message} at line {line}, column {column}")]
    TomlParse {
        message: String,
        line: usize,
        column: usize,
    },

    #[error("Configuration field '{field}' is invalid: {reason}")]
    ConfigValidation { field: String, reason: String },

    // IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for Trifle operations
pub type TrifleResult<T> = Result<T, TrifleError>;

impl TrifleError {
    /// Create an unknown-key error
    pub fn unknown_key(key: impl Into<String>) -> Self {
        Self::UnknownKey { key: key.into() }
    }

    /// Create an IO error from std::io::Error
    pub fn io(message: String, source: std::io::Error) -> Self {
        Self::Io { message, source }
    }

    /// Check if this error came from configuration loading
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            TrifleError::TomlParse { .. } | TrifleError::ConfigValidation { .. } | TrifleError::Io { .. }
        )
    }

    /// Get a user-friendly suggestion for fixing this error
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            TrifleError::UnknownKey { .. } => {
                Some("Check the key spelling or use a typed record so the key is checked at compile time")
            },
            TrifleError::TomlParse { .. } => Some("Fix the TOML syntax at the reported location"),
            TrifleError::ConfigValidation { .. } => {
                Some("Adjust the value in trifle.toml or the TRIFLE_* environment variable")
            },
            TrifleError::Io { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_key_message() {
        let err = TrifleError::unknown_key("missing");
        assert_eq!(err.to_string(), "Key 'missing' does not exist on the record");
        assert!(err.suggestion().is_some());
        assert!(!err.is_config_error());
    }

    #[test]
    fn test_toml_parse_message() {
        let err = TrifleError::TomlParse {
            message: "expected `=`".to_string(),
            line: 3,
            column: 7,
        };
        assert_eq!(
            err.to_string(),
            "Failed to parse trifle.toml: expected `=` at line 3, column 7"
        );
        assert!(err.is_config_error());
    }

    #[test]
    fn test_io_error_keeps_source() {
        use std::error::Error;

        let err = TrifleError::io(
            "Failed to read trifle.toml".to_string(),
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(err.source().is_some());
        assert_eq!(err.suggestion(), None);
    }
}

//! Error handling for layer state conversion
//!
//! Only reconstruction from a mapping can fail; every other operation is total.

use thiserror::Error;

/// Result type alias for layer state operations
pub type Result<T> = std::result::Result<T, StatesError>;

/// Main error type for layer state operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatesError {
    #[error("Cannot deserialize layer state: '{key}' {reason}")]
    Deserialization { key: String, reason: String },
}

impl StatesError {
    pub(crate) fn missing(key: impl Into<String>) -> Self {
        StatesError::Deserialization {
            key: key.into(),
            reason: "is missing".to_string(),
        }
    }

    pub(crate) fn wrong_type(key: impl Into<String>, expected: &str) -> Self {
        StatesError::Deserialization {
            key: key.into(),
            reason: format!("is not {}", expected),
        }
    }

    /// Key path that failed to deserialize, e.g. `frame.width`
    pub fn key(&self) -> &str {
        match self {
            StatesError::Deserialization { key, .. } => key,
        }
    }

    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            StatesError::Deserialization { .. } => "DESERIALIZATION_ERROR",
        }
    }

    /// Get recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            StatesError::Deserialization { .. } => vec![
                "Fall back to a default layer state",
                "Re-capture the state from the live layer",
                "Check that the stored mapping uses the 'frame' and 'visible' keys",
            ],
        }
    }
}

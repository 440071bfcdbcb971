//! Transform Error Types
//!
//! Two failure kinds reach callers of the codec itself: a requested span that
//! does not fit the buffer, and an odd byte count handed to the word-swap step.
//! Configuration loading adds a third.

use thiserror::Error;

/// Result type for voltage-transform operations
pub type Result<T> = std::result::Result<T, TransformError>;

/// Byte transform errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransformError {
    /// Requested span exceeds the buffer
    #[error("Out of range: {length} bytes at offset {offset} exceed buffer of {available} bytes")]
    OutOfRange {
        offset: usize,
        length: usize,
        available: usize,
    },

    /// Caller contract violation (odd length to the word-swap step)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<figment::Error> for TransformError {
    fn from(err: figment::Error) -> Self {
        TransformError::Config(err.to_string())
    }
}

// Helper methods for creating errors
impl TransformError {
    pub fn out_of_range(offset: usize, length: usize, available: usize) -> Self {
        TransformError::OutOfRange {
            offset,
            length,
            available,
        }
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        TransformError::InvalidArgument(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        TransformError::Config(msg.into())
    }

    /// Check if this error is a bounds failure
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, TransformError::OutOfRange { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message() {
        let err = TransformError::out_of_range(6, 4, 8);
        assert!(err.is_out_of_range());
        assert_eq!(
            err.to_string(),
            "Out of range: 4 bytes at offset 6 exceed buffer of 8 bytes"
        );
    }

    #[test]
    fn test_helper_constructors() {
        assert_eq!(
            TransformError::invalid_argument("odd"),
            TransformError::InvalidArgument("odd".to_string())
        );
        assert!(!TransformError::config("bad").is_out_of_range());
    }
}

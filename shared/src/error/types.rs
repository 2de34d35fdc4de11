//! Application error type

use super::codes::ErrorCode;
use thiserror::Error;

/// Application error with a structured error code
///
/// The error every crate converts into at its outer edge.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
}

impl AppError {
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_is_display() {
        let err = AppError::with_message(ErrorCode::MenuItemNotFound, "Menu item not found: 42");
        assert_eq!(err.code, ErrorCode::MenuItemNotFound);
        assert_eq!(err.to_string(), "Menu item not found: 42");
    }
}

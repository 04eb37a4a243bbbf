//! Descriptor file loading errors

use super::SatchelError;

/// Creates a descriptor not found error
pub fn not_found(path: impl Into<String>) -> SatchelError {
    SatchelError::ConfigNotFound { path: path.into() }
}

/// Creates a descriptor parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> SatchelError {
    SatchelError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a descriptor read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> SatchelError {
    SatchelError::ConfigReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

//! File system errors

use std::path::Path;

use super::SatchelError;

/// Creates a file not found error
pub fn not_found(path: impl Into<String>) -> SatchelError {
    SatchelError::FileNotFound { path: path.into() }
}

/// Creates a file read failed error
pub fn read_failed(path: &Path, err: impl ToString) -> SatchelError {
    SatchelError::FileReadFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: &Path, err: impl ToString) -> SatchelError {
    SatchelError::FileWriteFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates an invalid path error for a file name that is not UTF-8
pub fn invalid_path(path: &Path) -> SatchelError {
    SatchelError::InvalidPath {
        path: path.display().to_string(),
    }
}

/// Creates a duplicate path error
pub fn duplicate_path(path: impl Into<String>) -> SatchelError {
    SatchelError::DuplicatePath { path: path.into() }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> SatchelError {
    SatchelError::IoError {
        message: message.into(),
    }
}

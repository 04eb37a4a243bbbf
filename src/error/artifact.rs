//! Artifact reading, verification and install errors

use std::path::Path;

use super::SatchelError;

/// Creates an invalid artifact error
pub fn invalid(path: &Path, reason: impl Into<String>) -> SatchelError {
    SatchelError::ArtifactInvalid {
        path: path.display().to_string(),
        reason: reason.into(),
    }
}

/// Creates a hash mismatch error
pub fn hash_mismatch(
    path: impl Into<String>,
    expected: impl Into<String>,
    actual: impl Into<String>,
) -> SatchelError {
    SatchelError::HashMismatch {
        path: path.into(),
        expected: expected.into(),
        actual: actual.into(),
    }
}

/// Creates a resource not found error
pub fn resource_not_found(path: impl Into<String>) -> SatchelError {
    SatchelError::ResourceNotFound { path: path.into() }
}

/// Creates an unsafe path error
pub fn unsafe_path(path: impl Into<String>) -> SatchelError {
    SatchelError::UnsafePath { path: path.into() }
}

/// Creates a package not installed error
pub fn package_not_installed(package: impl Into<String>, target: &Path) -> SatchelError {
    SatchelError::PackageNotInstalled {
        package: package.into(),
        target: target.display().to_string(),
    }
}

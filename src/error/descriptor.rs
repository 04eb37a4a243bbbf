//! Package descriptor metadata and configuration errors

use super::SatchelError;

/// Creates a missing metadata error for a required field
pub fn missing_metadata(field: impl Into<String>) -> SatchelError {
    SatchelError::MissingMetadata {
        field: field.into(),
    }
}

/// Creates an invalid metadata error for a field that is set but unusable
pub fn invalid_metadata(
    field: impl Into<String>,
    value: impl Into<String>,
    reason: impl Into<String>,
) -> SatchelError {
    SatchelError::InvalidMetadata {
        field: field.into(),
        value: value.into(),
        reason: reason.into(),
    }
}

/// Creates an unknown sub-package error
pub fn unknown_sub_package<I, S>(package: impl Into<String>, declared: I) -> SatchelError
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let declared: Vec<String> = declared
        .into_iter()
        .map(|name| name.as_ref().to_string())
        .collect();
    SatchelError::UnknownSubPackage {
        package: package.into(),
        declared: if declared.is_empty() {
            "none".to_string()
        } else {
            declared.join(", ")
        },
    }
}

/// Creates an invalid sub-package name error
pub fn invalid_sub_package(name: impl Into<String>, reason: impl Into<String>) -> SatchelError {
    SatchelError::InvalidSubPackageName {
        name: name.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid pattern error
pub fn invalid_pattern(
    package: impl Into<String>,
    pattern: impl Into<String>,
    reason: impl Into<String>,
) -> SatchelError {
    SatchelError::InvalidPattern {
        package: package.into(),
        pattern: pattern.into(),
        reason: reason.into(),
    }
}

/// Creates a package directory not found error
pub fn package_dir_not_found(package: impl Into<String>, path: impl Into<String>) -> SatchelError {
    SatchelError::PackageDirNotFound {
        package: package.into(),
        path: path.into(),
    }
}

//! Descriptor validation
//!
//! Runs entirely in memory. Filesystem checks (package directories, the
//! readme file) happen in the bundler, which owns the source root.

use std::collections::HashSet;

use tracing::debug;

use super::{PackageDescriptor, WILDCARD_PACKAGE, license};
use crate::error::{Result, descriptor};
use crate::warning::BuildWarning;

/// Check a dotted sub-package name
pub fn validate_sub_package_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(descriptor::invalid_sub_package(name, "name is empty"));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(descriptor::invalid_sub_package(
            name,
            "use '.' instead of path separators",
        ));
    }
    if name.chars().any(char::is_whitespace) {
        return Err(descriptor::invalid_sub_package(
            name,
            "whitespace is not allowed",
        ));
    }
    if name.split('.').any(str::is_empty) {
        return Err(descriptor::invalid_sub_package(name, "empty name segment"));
    }
    Ok(())
}

/// Check a name or version that becomes part of `<name>-<version>`
///
/// That string names the artifact file, its root directory and the
/// install info directory, and is written into `PKG-INFO` line by line.
pub fn validate_distribution_field(field: &str, value: &str) -> Result<()> {
    let reason = if value == "." || value == ".." {
        "must not be a relative path component"
    } else if value.contains('/') || value.contains('\\') {
        "must not contain a path separator"
    } else if value.chars().any(char::is_control) {
        "must not contain control characters"
    } else if value.chars().any(char::is_whitespace) {
        "must not contain whitespace"
    } else {
        return Ok(());
    };
    Err(descriptor::invalid_metadata(field, value, reason))
}

pub(super) fn validate(package: &PackageDescriptor) -> Result<Vec<BuildWarning>> {
    let name = package.require_name()?;
    let version = package.require_version()?;
    validate_distribution_field("name", name)?;
    validate_distribution_field("version", version)?;

    let mut seen = HashSet::new();
    for name in &package.packages {
        validate_sub_package_name(name)?;
        if !seen.insert(name.as_str()) {
            return Err(descriptor::invalid_sub_package(
                name.as_str(),
                "declared more than once",
            ));
        }
    }

    for key in package.package_data.keys() {
        if key != WILDCARD_PACKAGE && !seen.contains(key.as_str()) {
            return Err(descriptor::unknown_sub_package(
                key.as_str(),
                package.sub_packages(),
            ));
        }
    }

    for (key, patterns) in &package.package_data {
        let label = if key.is_empty() { "*" } else { key.as_str() };
        for pattern in patterns {
            crate::pattern::ResourcePattern::new(pattern)
                .map_err(|reason| descriptor::invalid_pattern(label, pattern.as_str(), reason))?;
        }
    }
    package.module_patterns()?;

    if package.long_description.is_some() && package.readme.is_some() {
        return Err(crate::error::SatchelError::ConflictingLongDescription);
    }

    let mut warnings = Vec::new();
    if let Some(license) = package.license.as_deref() {
        if !license.trim().is_empty() && !license::is_recognized(license) {
            warnings.push(BuildWarning::UnrecognizedLicense {
                license: license.to_string(),
            });
        }
    }

    debug!(
        packages = package.packages.len(),
        warnings = warnings.len(),
        "descriptor validated"
    );

    Ok(warnings)
}

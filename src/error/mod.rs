//! Error types and handling for Satchel
//!
//! Uses `thiserror` for error definitions and `miette` for diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`descriptor`]: Package descriptor metadata and configuration errors
//! - [`config`]: Descriptor file loading errors
//! - [`fs`]: File system errors
//! - [`artifact`]: Artifact reading, verification and install errors

pub mod artifact;
pub mod config;
pub mod descriptor;
pub mod fs;

use miette::Diagnostic;
use thiserror::Error;

/// Coarse classification of a [`SatchelError`]
///
/// Builds fail with either a metadata or a configuration error before any
/// output is written. Io and artifact errors come from the filesystem and
/// from reading back produced artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MissingMetadata,
    Configuration,
    Io,
    Artifact,
}

/// Main error type for Satchel operations
#[derive(Error, Diagnostic, Debug)]
pub enum SatchelError {
    // Descriptor metadata errors
    #[error("Missing required descriptor field '{field}'")]
    #[diagnostic(
        code(satchel::descriptor::missing_metadata),
        help("Both 'name' and 'version' must be set to a non-empty value")
    )]
    MissingMetadata { field: String },

    #[error("Invalid descriptor field '{field}' = {value:?}: {reason}")]
    #[diagnostic(
        code(satchel::descriptor::invalid_metadata),
        help("'{field}' becomes part of file names: use letters, digits, '.', '-', '_' or '+'")
    )]
    InvalidMetadata {
        field: String,
        value: String,
        reason: String,
    },

    // Descriptor configuration errors
    #[error("package_data references undeclared sub-package '{package}'")]
    #[diagnostic(
        code(satchel::config::unknown_sub_package),
        help("Add '{package}' to 'packages' or remove it from 'package_data' (declared: {declared})")
    )]
    UnknownSubPackage { package: String, declared: String },

    #[error("Invalid sub-package name '{name}': {reason}")]
    #[diagnostic(
        code(satchel::config::invalid_sub_package),
        help("Sub-packages are dotted names such as 'wheatley' or 'wheatley.plugins'")
    )]
    InvalidSubPackageName { name: String, reason: String },

    #[error("Invalid pattern '{pattern}' for sub-package '{package}': {reason}")]
    #[diagnostic(
        code(satchel::config::invalid_pattern),
        help("Patterns are relative globs such as '*.hy' or 'data/**/*.hy'")
    )]
    InvalidPattern {
        package: String,
        pattern: String,
        reason: String,
    },

    #[error("Directory for sub-package '{package}' not found: {path}")]
    #[diagnostic(code(satchel::config::package_dir_not_found))]
    PackageDirNotFound { package: String, path: String },

    #[error("Both 'long_description' and 'readme' are set")]
    #[diagnostic(
        code(satchel::config::conflicting_long_description),
        help("Keep one of them: 'readme' loads the long description from a file")
    )]
    ConflictingLongDescription,

    #[error("Descriptor file not found: {path}")]
    #[diagnostic(
        code(satchel::config::not_found),
        help("Create a satchel.yaml or pass its location with --file")
    )]
    ConfigNotFound { path: String },

    #[error("Failed to parse descriptor file: {path}: {reason}")]
    #[diagnostic(code(satchel::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Failed to read descriptor file: {path}")]
    #[diagnostic(code(satchel::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    // File system errors
    #[error("File not found: {path}")]
    #[diagnostic(code(satchel::fs::not_found))]
    FileNotFound { path: String },

    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(satchel::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(satchel::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("File name is not valid UTF-8: {path}")]
    #[diagnostic(
        code(satchel::fs::invalid_path),
        help("Rename the file: bundled paths must be valid UTF-8")
    )]
    InvalidPath { path: String },

    #[error("Two files map to the same bundled path '{path}'")]
    #[diagnostic(code(satchel::fs::duplicate_path))]
    DuplicatePath { path: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(satchel::fs::io_error))]
    IoError { message: String },

    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(satchel::cli::unsupported_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnsupportedShell { shell: String },

    // Artifact errors
    #[error("Invalid artifact {path}: {reason}")]
    #[diagnostic(code(satchel::artifact::invalid))]
    ArtifactInvalid { path: String, reason: String },

    #[error("Hash mismatch for '{path}'")]
    #[diagnostic(
        code(satchel::artifact::hash_mismatch),
        help("Expected {expected}, found {actual}. The file was modified after the build")
    )]
    HashMismatch {
        path: String,
        expected: String,
        actual: String,
    },

    #[error("Resource not found: {path}")]
    #[diagnostic(code(satchel::artifact::resource_not_found))]
    ResourceNotFound { path: String },

    #[error("Refusing unsafe path in artifact: {path}")]
    #[diagnostic(
        code(satchel::artifact::unsafe_path),
        help("Artifact entries must be relative and must not contain '..'")
    )]
    UnsafePath { path: String },

    #[error("Sub-package '{package}' is not installed in {target}")]
    #[diagnostic(
        code(satchel::artifact::package_not_installed),
        help("Run 'satchel install <artifact> --target {target}' first")
    )]
    PackageNotInstalled { package: String, target: String },
}

impl SatchelError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingMetadata { .. } => ErrorKind::MissingMetadata,
            Self::InvalidMetadata { .. }
            | Self::UnknownSubPackage { .. }
            | Self::InvalidSubPackageName { .. }
            | Self::InvalidPattern { .. }
            | Self::PackageDirNotFound { .. }
            | Self::ConflictingLongDescription
            | Self::ConfigNotFound { .. }
            | Self::ConfigParseFailed { .. }
            | Self::ConfigReadFailed { .. }
            | Self::UnsupportedShell { .. } => ErrorKind::Configuration,
            Self::FileNotFound { .. }
            | Self::FileReadFailed { .. }
            | Self::FileWriteFailed { .. }
            | Self::InvalidPath { .. }
            | Self::DuplicatePath { .. }
            | Self::IoError { .. } => ErrorKind::Io,
            Self::ArtifactInvalid { .. }
            | Self::HashMismatch { .. }
            | Self::ResourceNotFound { .. }
            | Self::UnsafePath { .. }
            | Self::PackageNotInstalled { .. } => ErrorKind::Artifact,
        }
    }
}

impl From<std::io::Error> for SatchelError {
    fn from(err: std::io::Error) -> Self {
        SatchelError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for SatchelError {
    fn from(err: serde_yaml::Error) -> Self {
        SatchelError::ConfigParseFailed {
            path: "<inline>".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for SatchelError {
    fn from(err: serde_json::Error) -> Self {
        SatchelError::ArtifactInvalid {
            path: "RECORD.json".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, SatchelError>;

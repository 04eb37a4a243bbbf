//! Distribution artifact format
//!
//! An artifact is a gzip-compressed tar archive named
//! `<name>-<version>.tar.gz`. All entries live under `<name>-<version>/`:
//!
//! - `PKG-INFO`: core metadata ([`metadata`])
//! - `RECORD.json`: bundled files with kind, size and hash ([`record`])
//! - every bundled file at its path relative to the source root
//!
//! Bundled paths always start with a sub-package directory, so they never
//! collide with the two metadata files.

pub mod metadata;
pub mod reader;
pub mod record;
pub mod writer;

pub use metadata::CoreMetadata;
pub use reader::ArtifactReader;
pub use record::{Record, RecordEntry};
pub use writer::write_artifact;

/// Core metadata file name
pub const PKG_INFO: &str = "PKG-INFO";

/// File record name
pub const RECORD_FILE: &str = "RECORD.json";

/// Artifact file extension
pub const ARTIFACT_EXTENSION: &str = "tar.gz";

/// File name of the artifact for a distribution
pub fn artifact_file_name(distribution: &str) -> String {
    format!("{distribution}.{ARTIFACT_EXTENSION}")
}

/// Whether an artifact-relative path is one of the metadata files
pub fn is_metadata_file(path: &str) -> bool {
    path == PKG_INFO || path == RECORD_FILE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_file_name() {
        assert_eq!(artifact_file_name("wheatley-0.1"), "wheatley-0.1.tar.gz");
    }

    #[test]
    fn test_is_metadata_file() {
        assert!(is_metadata_file("PKG-INFO"));
        assert!(is_metadata_file("RECORD.json"));
        assert!(!is_metadata_file("wheatley/PKG-INFO"));
    }
}

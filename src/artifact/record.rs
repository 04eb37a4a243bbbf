//! File record (`RECORD.json`)
//!
//! Lists every bundled file with its sub-package, kind, size and hash. The
//! record travels inside the artifact and is copied next to the installed
//! files, where the locator reads it back.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::bundler::{FileKind, Manifest, ManifestEntry};
use crate::error::{Result, artifact};

/// One bundled file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordEntry {
    pub path: String,
    pub package: String,
    pub kind: FileKind,
    pub size: u64,
    pub hash: String,
}

impl From<&ManifestEntry> for RecordEntry {
    fn from(entry: &ManifestEntry) -> Self {
        Self {
            path: entry.path.clone(),
            package: entry.package.clone(),
            kind: entry.kind,
            size: entry.size(),
            hash: entry.hash.clone(),
        }
    }
}

/// Record of a built distribution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub version: String,
    pub packages: Vec<String>,
    pub files: Vec<RecordEntry>,
}

impl Record {
    pub fn new(name: &str, version: &str, packages: Vec<String>, manifest: &Manifest) -> Self {
        Self {
            name: name.to_string(),
            version: version.to_string(),
            packages,
            files: manifest.iter().map(RecordEntry::from).collect(),
        }
    }

    /// `<name>-<version>`
    pub fn distribution_name(&self) -> String {
        format!("{}-{}", self.name, self.version)
    }

    pub fn find(&self, path: &str) -> Option<&RecordEntry> {
        self.files.iter().find(|entry| entry.path == path)
    }

    pub fn declares(&self, package: &str) -> bool {
        self.packages.iter().any(|p| p == package)
    }

    /// Entries belonging to one sub-package
    pub fn files_of<'a>(&'a self, package: &'a str) -> impl Iterator<Item = &'a RecordEntry> + 'a {
        self.files.iter().filter(move |entry| entry.package == package)
    }

    /// Pretty JSON with a trailing newline
    pub fn to_json(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }

    /// Parse a record; `source` names the file in errors
    pub fn from_json(bytes: &[u8], source: &Path) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(|e| artifact::invalid(source, e.to_string()))
    }
}

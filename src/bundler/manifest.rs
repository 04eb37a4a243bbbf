//! Artifact manifest: the set of files a build bundles
//!
//! Paths are `/`-separated and relative to the source root, e.g.
//! `wheatley/plugin.hy`. The manifest is ordered by path so every consumer
//! (the writer, `check` output, the record) sees the same order regardless
//! of filesystem enumeration order.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, fs};

/// How a bundled file was selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    /// The sub-package's own code, selected by module patterns
    Module,
    /// An auxiliary file, selected by a `package_data` pattern
    Resource,
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Module => f.write_str("module"),
            Self::Resource => f.write_str("resource"),
        }
    }
}

/// A file selected for the artifact, with its content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    pub path: String,
    pub package: String,
    pub kind: FileKind,
    pub hash: String,
    pub contents: Vec<u8>,
}

impl ManifestEntry {
    pub fn new(path: String, package: String, kind: FileKind, contents: Vec<u8>) -> Self {
        let hash = crate::hash::hash_bytes(&contents);
        Self {
            path,
            package,
            kind,
            hash,
            contents,
        }
    }

    pub fn size(&self) -> u64 {
        self.contents.len() as u64
    }
}

/// Ordered set of bundled files keyed by path
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    entries: BTreeMap<String, ManifestEntry>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry
    ///
    /// A path already recorded as a module stays a module; a module entry
    /// replaces an earlier resource entry for the same path. Two entries for
    /// one path with different content are a `DuplicatePath` error.
    pub fn insert(&mut self, entry: ManifestEntry) -> Result<()> {
        match self.entries.get(&entry.path) {
            Some(existing) if existing.hash != entry.hash => {
                return Err(fs::duplicate_path(entry.path));
            }
            Some(existing) if existing.kind == FileKind::Module => {}
            _ => {
                self.entries.insert(entry.path.clone(), entry);
            }
        }
        Ok(())
    }

    pub fn get(&self, path: &str) -> Option<&ManifestEntry> {
        self.entries.get(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in path order
    pub fn iter(&self) -> impl Iterator<Item = &ManifestEntry> {
        self.entries.values()
    }

    /// Paths in order
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Entries of one kind
    pub fn of_kind(&self, kind: FileKind) -> impl Iterator<Item = &ManifestEntry> {
        self.iter().filter(move |e| e.kind == kind)
    }

    /// Total content size in bytes
    pub fn total_size(&self) -> u64 {
        self.iter().map(ManifestEntry::size).sum()
    }
}

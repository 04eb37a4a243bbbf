//! Artifact reader
//!
//! Loads a `.tar.gz` artifact fully into memory, checks that every entry is
//! a regular file under the single `<name>-<version>/` root, and exposes the
//! parsed metadata, the record and the file contents.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Component, Path, PathBuf};

use flate2::read::GzDecoder;
use tracing::debug;

use super::metadata::CoreMetadata;
use super::record::Record;
use super::{PKG_INFO, RECORD_FILE, is_metadata_file};
use crate::error::{Result, artifact, fs};
use crate::hash::{hash_bytes, verify_hash};

/// An opened artifact
#[derive(Debug)]
pub struct ArtifactReader {
    path: PathBuf,
    entries: BTreeMap<String, Vec<u8>>,
    metadata: CoreMetadata,
    record: Record,
}

/// Split an archive path into its root directory and a safe relative path
fn split_entry_path(raw: &Path) -> Result<(String, String)> {
    let display = raw.display().to_string();
    let mut parts = Vec::new();
    for component in raw.components() {
        match component {
            Component::Normal(part) => parts.push(part.to_string_lossy().into_owned()),
            Component::CurDir => {}
            _ => return Err(artifact::unsafe_path(display)),
        }
    }

    if parts.len() < 2 {
        return Err(artifact::unsafe_path(display));
    }
    let root = parts.remove(0);
    Ok((root, parts.join("/")))
}

impl ArtifactReader {
    /// Open and index an artifact
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(fs::not_found(path.display().to_string()));
        }
        let file = File::open(path).map_err(|e| fs::read_failed(path, e))?;
        let mut archive = tar::Archive::new(GzDecoder::new(BufReader::new(file)));

        let mut root: Option<String> = None;
        let mut entries = BTreeMap::new();

        let iter = archive
            .entries()
            .map_err(|e| artifact::invalid(path, e.to_string()))?;
        for entry in iter {
            let mut entry = entry.map_err(|e| artifact::invalid(path, e.to_string()))?;
            let entry_type = entry.header().entry_type();
            if entry_type.is_dir() {
                continue;
            }
            let raw = entry
                .path()
                .map_err(|e| artifact::invalid(path, e.to_string()))?
                .into_owned();
            if !entry_type.is_file() {
                return Err(artifact::invalid(
                    path,
                    format!("unsupported entry type for {}", raw.display()),
                ));
            }

            let (entry_root, relative) = split_entry_path(&raw)?;
            match &root {
                Some(existing) if *existing != entry_root => {
                    return Err(artifact::invalid(
                        path,
                        format!("multiple root directories: {existing}, {entry_root}"),
                    ));
                }
                Some(_) => {}
                None => root = Some(entry_root),
            }

            let mut contents = Vec::new();
            entry
                .read_to_end(&mut contents)
                .map_err(|e| artifact::invalid(path, e.to_string()))?;

            if entries.insert(relative.clone(), contents).is_some() {
                return Err(artifact::invalid(path, format!("duplicate entry {relative}")));
            }
        }

        let root = root.ok_or_else(|| artifact::invalid(path, "archive is empty"))?;

        let pkg_info = entries
            .get(PKG_INFO)
            .ok_or_else(|| artifact::invalid(path, format!("missing {PKG_INFO}")))?;
        let pkg_info = String::from_utf8_lossy(pkg_info);
        let metadata =
            CoreMetadata::parse(&pkg_info).map_err(|reason| artifact::invalid(path, reason))?;

        let record_bytes = entries
            .get(RECORD_FILE)
            .ok_or_else(|| artifact::invalid(path, format!("missing {RECORD_FILE}")))?;
        let record = Record::from_json(record_bytes, &path.join(RECORD_FILE))?;

        if record.distribution_name() != root {
            return Err(artifact::invalid(
                path,
                format!(
                    "root directory '{root}' does not match {}",
                    record.distribution_name()
                ),
            ));
        }
        if metadata.name != record.name || metadata.version != record.version {
            return Err(artifact::invalid(
                path,
                format!("{PKG_INFO} and {RECORD_FILE} disagree on name or version"),
            ));
        }

        debug!(artifact = %path.display(), entries = entries.len(), "artifact opened");

        Ok(Self {
            path: path.to_path_buf(),
            entries,
            metadata,
            record,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn metadata(&self) -> &CoreMetadata {
        &self.metadata
    }

    pub fn record(&self) -> &Record {
        &self.record
    }

    /// Every file in the artifact, metadata files included, in path order
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Files bundled from sub-packages, in path order
    pub fn package_paths(&self) -> impl Iterator<Item = &str> {
        self.paths().filter(|p| !is_metadata_file(p))
    }

    /// Raw bytes of a file
    pub fn read(&self, path: &str) -> Result<&[u8]> {
        self.entries
            .get(path)
            .map(Vec::as_slice)
            .ok_or_else(|| artifact::resource_not_found(path))
    }

    /// Check the files against the record
    ///
    /// Every recorded file must be present with matching size and hash, and
    /// no unrecorded file may be present.
    pub fn verify(&self) -> Result<()> {
        for entry in &self.record.files {
            let contents = self.read(&entry.path)?;
            let actual = hash_bytes(contents);
            if contents.len() as u64 != entry.size || !verify_hash(&entry.hash, &actual) {
                return Err(artifact::hash_mismatch(&entry.path, &entry.hash, actual));
            }
        }

        if let Some(extra) = self
            .package_paths()
            .find(|p| self.record.find(p).is_none())
        {
            return Err(artifact::invalid(
                &self.path,
                format!("unrecorded file {extra}"),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_split_entry_path() {
        let (root, relative) = split_entry_path(Path::new("wheatley-0.1/wheatley/plugin.hy")).unwrap();
        assert_eq!(root, "wheatley-0.1");
        assert_eq!(relative, "wheatley/plugin.hy");
    }

    #[test]
    fn test_split_entry_path_rejects_unsafe() {
        assert!(split_entry_path(Path::new("wheatley-0.1/../etc/passwd")).is_err());
        assert!(split_entry_path(Path::new("/wheatley-0.1/x")).is_err());
        assert!(split_entry_path(Path::new("wheatley-0.1")).is_err());
    }

    #[test]
    fn test_open_missing_file() {
        let result = ArtifactReader::open(Path::new("/nonexistent/wheatley-0.1.tar.gz"));
        assert!(matches!(
            result,
            Err(crate::error::SatchelError::FileNotFound { .. })
        ));
    }
}

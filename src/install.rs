//! Artifact installation
//!
//! Unpacks a verified artifact into a target directory:
//!
//! ```text
//! <target>/wheatley/__init__
//! <target>/wheatley/plugin.hy
//! <target>/wheatley-0.1.satchel-info/PKG-INFO
//! <target>/wheatley-0.1.satchel-info/RECORD.json
//! ```
//!
//! The artifact is fully verified before the first write. Installing over an
//! older version of the same package removes the files only the old version
//! recorded, once every new file and the new metadata directory are in place.
//! A failed write leaves the old metadata directory and its files behind.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::artifact::{ArtifactReader, PKG_INFO, RECORD_FILE, Record};
use crate::error::{Result, fs};

/// Suffix of the per-distribution metadata directory
pub const INFO_DIR_SUFFIX: &str = ".satchel-info";

/// A distribution unpacked into a target directory
#[derive(Debug, Clone)]
pub struct InstalledPackage {
    pub target: PathBuf,
    pub info_dir: PathBuf,
    pub record: Record,
}

impl InstalledPackage {
    /// Absolute paths of the installed files
    pub fn files(&self) -> Vec<PathBuf> {
        self.record
            .files
            .iter()
            .map(|entry| self.target.join(&entry.path))
            .collect()
    }
}

/// Name of the metadata directory for a distribution
pub fn info_dir_name(distribution: &str) -> String {
    format!("{distribution}{INFO_DIR_SUFFIX}")
}

/// Records of every distribution installed in `target`, in directory order
pub fn installed_records(target: &Path) -> Result<Vec<(PathBuf, Record)>> {
    if !target.is_dir() {
        return Ok(Vec::new());
    }

    let mut info_dirs: Vec<PathBuf> = std::fs::read_dir(target)
        .map_err(|e| fs::read_failed(target, e))?
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_dir()
                && path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.ends_with(INFO_DIR_SUFFIX))
        })
        .collect();
    info_dirs.sort();

    let mut records = Vec::new();
    for dir in info_dirs {
        let record_path = dir.join(RECORD_FILE);
        if !record_path.is_file() {
            debug!(dir = %dir.display(), "skipping metadata directory without record");
            continue;
        }
        let bytes = std::fs::read(&record_path).map_err(|e| fs::read_failed(&record_path, e))?;
        records.push((dir, Record::from_json(&bytes, &record_path)?));
    }
    Ok(records)
}

fn write_file(path: &Path, contents: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| fs::write_failed(parent, e))?;
    }
    std::fs::write(path, contents).map_err(|e| fs::write_failed(path, e))
}

/// Remove an older installation of the same package
fn remove_previous(target: &Path, record: &Record) -> Result<()> {
    let keep: HashSet<&str> = record.files.iter().map(|e| e.path.as_str()).collect();

    for (dir, previous) in installed_records(target)? {
        if previous.name != record.name || previous.version == record.version {
            continue;
        }

        for entry in &previous.files {
            if keep.contains(entry.path.as_str()) {
                continue;
            }
            let stale = target.join(&entry.path);
            if stale.is_file() {
                std::fs::remove_file(&stale).map_err(|e| fs::write_failed(&stale, e))?;
                debug!(path = %stale.display(), "removed stale file");
            }
        }
        std::fs::remove_dir_all(&dir).map_err(|e| fs::write_failed(&dir, e))?;
        info!(
            name = %previous.name,
            version = %previous.version,
            "replaced previous installation"
        );
    }
    Ok(())
}

/// Install an artifact into `target`
pub fn install(artifact: &Path, target: &Path) -> Result<InstalledPackage> {
    let reader = ArtifactReader::open(artifact)?;
    reader.verify()?;

    let record = reader.record().clone();
    std::fs::create_dir_all(target).map_err(|e| fs::write_failed(target, e))?;

    for entry in &record.files {
        let destination = target.join(&entry.path);
        write_file(&destination, reader.read(&entry.path)?)?;
        debug!(path = %destination.display(), "installed file");
    }

    let info_dir = target.join(info_dir_name(&record.distribution_name()));
    write_file(&info_dir.join(PKG_INFO), reader.read(PKG_INFO)?)?;
    write_file(&info_dir.join(RECORD_FILE), reader.read(RECORD_FILE)?)?;

    remove_previous(target, &record)?;

    info!(
        distribution = %record.distribution_name(),
        target = %target.display(),
        files = record.files.len(),
        "installed"
    );

    Ok(InstalledPackage {
        target: target.to_path_buf(),
        info_dir,
        record,
    })
}

//! File discovery for declared sub-packages
//!
//! Walks a sub-package directory in sorted order, classifies each file by
//! matching its package-relative path against the module and resource
//! patterns, and reads the content of every selected file.

use std::path::{Component, Path, PathBuf};

use tracing::{debug, trace};
use walkdir::WalkDir;

use super::manifest::{FileKind, ManifestEntry};
use crate::error::{Result, descriptor, fs};
use crate::pattern::{ResourcePattern, any_match};

/// Files selected from one sub-package
#[derive(Debug, Default)]
pub struct Discovered {
    pub entries: Vec<ManifestEntry>,
    /// Resource patterns that matched nothing, in declaration order
    pub unmatched: Vec<String>,
}

/// Join path components with `/`
///
/// Fails with `InvalidPath` on a component that is not UTF-8; such names
/// have no faithful `/`-separated form.
pub fn to_slash_path(path: &Path) -> Result<String> {
    let mut parts = Vec::new();
    for component in path.components() {
        if let Component::Normal(part) = component {
            parts.push(part.to_str().ok_or_else(|| fs::invalid_path(path))?);
        }
    }
    Ok(parts.join("/"))
}

/// Discover module and resource files of a sub-package
///
/// `package_dir` is relative to `root`. Directories in `excluded` are
/// pruned from the walk.
pub fn discover_package(
    root: &Path,
    package: &str,
    package_dir: &Path,
    modules: &[ResourcePattern],
    resources: &[ResourcePattern],
    excluded: &[PathBuf],
) -> Result<Discovered> {
    let absolute_dir = root.join(package_dir);
    if !absolute_dir.is_dir() {
        return Err(descriptor::package_dir_not_found(
            package,
            absolute_dir.display().to_string(),
        ));
    }

    let dir_prefix = to_slash_path(package_dir)?;
    let mut match_counts = vec![0usize; resources.len()];
    let mut entries = Vec::new();

    let walker = WalkDir::new(&absolute_dir)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !excluded.iter().any(|dir| e.path() == dir.as_path()));

    for entry in walker {
        let entry = entry.map_err(|e| {
            let path = e
                .path()
                .map_or_else(|| absolute_dir.clone(), Path::to_path_buf);
            fs::read_failed(&path, e)
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let Ok(relative) = entry.path().strip_prefix(&absolute_dir) else {
            continue;
        };
        let relative = to_slash_path(relative).map_err(|_| fs::invalid_path(entry.path()))?;

        let mut kind = None;
        if any_match(modules, &relative) {
            kind = Some(FileKind::Module);
        }
        for (index, pattern) in resources.iter().enumerate() {
            if pattern.matches(&relative) {
                match_counts[index] += 1;
                kind.get_or_insert(FileKind::Resource);
            }
        }

        let Some(kind) = kind else {
            trace!(package, path = %relative, "skipping unmatched file");
            continue;
        };

        let contents = std::fs::read(entry.path()).map_err(|e| fs::read_failed(entry.path(), e))?;
        let path = if dir_prefix.is_empty() {
            relative
        } else {
            format!("{dir_prefix}/{relative}")
        };

        debug!(package, %path, %kind, size = contents.len(), "selected file");
        entries.push(ManifestEntry::new(path, package.to_string(), kind, contents));
    }

    let unmatched = resources
        .iter()
        .zip(&match_counts)
        .filter(|(_, count)| **count == 0)
        .map(|(pattern, _)| pattern.as_str().to_string())
        .collect();

    Ok(Discovered { entries, unmatched })
}

//! Command helper utilities

use std::path::{Path, PathBuf};

use crate::descriptor::PackageDescriptor;
use crate::error::{Result, fs};

/// Resolve the source root from the optional argument
///
/// If a root is provided, use it. Otherwise, resolve to the current
/// directory.
pub fn resolve_root(root: Option<PathBuf>) -> Result<PathBuf> {
    match root {
        Some(path) => Ok(path),
        None => std::env::current_dir()
            .map_err(|e| fs::io_error(format!("Failed to get current directory: {e}"))),
    }
}

/// Resolve a path given on the command line against the source root
pub fn resolve_in_root(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

/// Load the descriptor named by `file` under `root`
pub fn load_descriptor(root: &Path, file: &Path) -> Result<PackageDescriptor> {
    PackageDescriptor::load(&resolve_in_root(root, file))
}

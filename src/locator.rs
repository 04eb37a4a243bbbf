//! Runtime resource lookup
//!
//! Given the directory a distribution was installed into, finds the bundled
//! resources of one sub-package and reads them by their path relative to
//! that sub-package. The original source tree is never consulted.
//!
//! ```no_run
//! # fn main() -> satchel::error::Result<()> {
//! use satchel::locator::ResourceLocator;
//!
//! let locator = ResourceLocator::find(std::path::Path::new("site"), "wheatley")?;
//! for script in locator.matching("*.hy")? {
//!     let bytes = locator.read(locator.relative_path(script))?;
//!     println!("{} ({} bytes)", script.path, bytes.len());
//! }
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::artifact::{Record, RecordEntry};
use crate::bundler::FileKind;
use crate::bundler::discovery::to_slash_path;
use crate::descriptor::PackageDescriptor;
use crate::error::{Result, artifact, descriptor, fs};
use crate::hash::{hash_bytes, hash_file, verify_hash};
use crate::install::installed_records;
use crate::pattern::ResourcePattern;

/// Resources of one installed sub-package
#[derive(Debug, Clone)]
pub struct ResourceLocator {
    target: PathBuf,
    package: String,
    prefix: String,
    record: Record,
}

impl ResourceLocator {
    /// Locate the installed distribution that declares `package`
    pub fn find(target: &Path, package: &str) -> Result<Self> {
        let (_, record) = installed_records(target)?
            .into_iter()
            .find(|(_, record)| record.declares(package))
            .ok_or_else(|| artifact::package_not_installed(package, target))?;

        debug!(
            package,
            distribution = %record.distribution_name(),
            "located installed package"
        );

        Ok(Self {
            target: target.to_path_buf(),
            package: package.to_string(),
            prefix: to_slash_path(&PackageDescriptor::package_dir(package))?,
            record,
        })
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn record(&self) -> &Record {
        &self.record
    }

    /// Bundled resources of the sub-package, in path order
    pub fn resources(&self) -> Vec<&RecordEntry> {
        self.entries_of_kind(FileKind::Resource)
    }

    /// Module files of the sub-package, in path order
    pub fn modules(&self) -> Vec<&RecordEntry> {
        self.entries_of_kind(FileKind::Module)
    }

    fn entries_of_kind(&self, kind: FileKind) -> Vec<&RecordEntry> {
        let mut entries: Vec<&RecordEntry> = self
            .record
            .files_of(&self.package)
            .filter(|entry| entry.kind == kind)
            .collect();
        entries.sort_by(|a, b| a.path.cmp(&b.path));
        entries
    }

    /// Path of an entry relative to the sub-package directory
    pub fn relative_path<'e>(&self, entry: &'e RecordEntry) -> &'e str {
        entry
            .path
            .strip_prefix(&self.prefix)
            .and_then(|rest| rest.strip_prefix('/'))
            .unwrap_or(&entry.path)
    }

    /// Resources whose sub-package-relative path matches `pattern`
    pub fn matching(&self, pattern: &str) -> Result<Vec<&RecordEntry>> {
        let compiled = ResourcePattern::new(pattern)
            .map_err(|reason| descriptor::invalid_pattern(self.package.as_str(), pattern, reason))?;

        Ok(self
            .resources()
            .into_iter()
            .filter(|entry| compiled.matches(self.relative_path(entry)))
            .collect())
    }

    fn entry(&self, relative: &str) -> Result<&RecordEntry> {
        let full = format!("{}/{}", self.prefix, relative.trim_start_matches('/'));
        self.record
            .files_of(&self.package)
            .find(|entry| entry.path == full)
            .ok_or_else(|| artifact::resource_not_found(full))
    }

    /// Installed location of a file of the sub-package
    pub fn path_of(&self, relative: &str) -> Result<PathBuf> {
        let entry = self.entry(relative)?;
        Ok(self.target.join(&entry.path))
    }

    /// Read a file of the sub-package, checking it against the record
    pub fn read(&self, relative: &str) -> Result<Vec<u8>> {
        let entry = self.entry(relative)?;
        let path = self.target.join(&entry.path);
        if !path.is_file() {
            return Err(artifact::resource_not_found(entry.path.as_str()));
        }

        let contents = std::fs::read(&path).map_err(|e| fs::read_failed(&path, e))?;
        let actual = hash_bytes(&contents);
        if !verify_hash(&entry.hash, &actual) {
            return Err(artifact::hash_mismatch(&entry.path, &entry.hash, actual));
        }
        Ok(contents)
    }

    /// Check every installed file of the sub-package against the record
    pub fn verify(&self) -> Result<()> {
        for entry in self.record.files_of(&self.package) {
            let path = self.target.join(&entry.path);
            if !path.is_file() {
                return Err(artifact::resource_not_found(entry.path.as_str()));
            }
            let actual = hash_file(&path)?;
            if !verify_hash(&entry.hash, &actual) {
                return Err(artifact::hash_mismatch(&entry.path, &entry.hash, actual));
            }
        }
        debug!(package = %self.package, "installed files verified");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::bundler::build;
    use crate::error::SatchelError;
    use crate::install::install;
    use tempfile::TempDir;

    /// Build and install a two-level package, then drop the sources
    fn installed_site() -> TempDir {
        let src = TempDir::new().unwrap();
        let files = [
            ("wheatley/__init__", ""),
            ("wheatley/plugin.hy", "(plugin)"),
            ("wheatley/extra.hy", "(extra)"),
            ("wheatley/notes.txt", "notes"),
            ("wheatley/plugins/__init__", ""),
            ("wheatley/plugins/deep.hy", "(deep)"),
        ];
        for (path, content) in files {
            let full = src.path().join(path);
            std::fs::create_dir_all(full.parent().unwrap()).unwrap();
            std::fs::write(full, content).unwrap();
        }

        let mut descriptor = PackageDescriptor::new("wheatley", "0.1");
        descriptor.packages = vec!["wheatley".to_string(), "wheatley.plugins".to_string()];
        descriptor
            .package_data
            .insert(String::new(), vec!["*.hy".to_string()]);

        let dist = TempDir::new().unwrap();
        let report = build(&descriptor, src.path(), dist.path()).unwrap();
        drop(src);

        let site = TempDir::new().unwrap();
        install(&report.artifact, site.path()).unwrap();
        site
    }

    #[test]
    fn test_resources_per_sub_package() {
        let site = installed_site();

        let top = ResourceLocator::find(site.path(), "wheatley").unwrap();
        let paths: Vec<&str> = top.resources().iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["wheatley/extra.hy", "wheatley/plugin.hy"]);
        assert_eq!(top.modules().len(), 1);

        let nested = ResourceLocator::find(site.path(), "wheatley.plugins").unwrap();
        let paths: Vec<&str> = nested.resources().iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["wheatley/plugins/deep.hy"]);
        assert_eq!(nested.relative_path(nested.resources()[0]), "deep.hy");
    }

    #[test]
    fn test_read_round_trips_without_sources() {
        let site = installed_site();
        let locator = ResourceLocator::find(site.path(), "wheatley").unwrap();
        assert_eq!(locator.read("plugin.hy").unwrap(), b"(plugin)");
        assert_eq!(
            locator.path_of("plugin.hy").unwrap(),
            site.path().join("wheatley/plugin.hy")
        );
    }

    #[test]
    fn test_matching() {
        let site = installed_site();
        let locator = ResourceLocator::find(site.path(), "wheatley").unwrap();
        let matched = locator.matching("p*.hy").unwrap();
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].path, "wheatley/plugin.hy");
        assert!(locator.matching("../*").is_err());
    }

    #[test]
    fn test_unbundled_file_is_not_found() {
        let site = installed_site();
        let locator = ResourceLocator::find(site.path(), "wheatley").unwrap();
        assert!(matches!(
            locator.read("notes.txt"),
            Err(SatchelError::ResourceNotFound { .. })
        ));
    }

    #[test]
    fn test_modified_file_fails_hash_check() {
        let site = installed_site();
        std::fs::write(site.path().join("wheatley/plugin.hy"), "(tampered)").unwrap();

        let locator = ResourceLocator::find(site.path(), "wheatley").unwrap();
        assert!(matches!(
            locator.read("plugin.hy"),
            Err(SatchelError::HashMismatch { .. })
        ));
    }

    #[test]
    fn test_verify_installed_files() {
        let site = installed_site();
        let locator = ResourceLocator::find(site.path(), "wheatley").unwrap();
        locator.verify().unwrap();

        std::fs::remove_file(site.path().join("wheatley/extra.hy")).unwrap();
        assert!(matches!(
            locator.verify(),
            Err(SatchelError::ResourceNotFound { .. })
        ));
    }

    #[test]
    fn test_unknown_package() {
        let site = installed_site();
        assert!(matches!(
            ResourceLocator::find(site.path(), "glados"),
            Err(SatchelError::PackageNotInstalled { .. })
        ));
    }
}

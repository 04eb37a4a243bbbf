//! Resource bundler
//!
//! Turns a [`PackageDescriptor`] and a source tree into an artifact in two
//! steps:
//!
//! 1. [`Bundler::plan`] validates the descriptor, checks every sub-package
//!    directory, selects module and resource files and reads their content.
//!    Nothing is written.
//! 2. [`Bundler::build`] hands the finished plan to the artifact writer.
//!
//! Every error is raised by the first step, so a failing build never leaves
//! an artifact behind.

pub mod discovery;
pub mod manifest;

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::artifact::{CoreMetadata, Record, write_artifact};
use crate::descriptor::PackageDescriptor;
use crate::error::{Result, descriptor, fs};
use crate::warning::BuildWarning;

pub use discovery::discover_package;
pub use manifest::{FileKind, Manifest, ManifestEntry};

/// Everything needed to write an artifact
#[derive(Debug, Clone)]
pub struct BuildPlan {
    /// Canonical source root
    pub root: PathBuf,
    pub metadata: CoreMetadata,
    pub record: Record,
    pub manifest: Manifest,
    pub warnings: Vec<BuildWarning>,
}

/// Outcome of a completed build
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub artifact: PathBuf,
    pub manifest: Manifest,
    pub warnings: Vec<BuildWarning>,
}

/// Builds artifacts for one descriptor over one source root
#[derive(Debug)]
pub struct Bundler<'a> {
    descriptor: &'a PackageDescriptor,
    root: PathBuf,
    excluded: Vec<PathBuf>,
}

impl<'a> Bundler<'a> {
    /// Create a bundler for the source tree at `root`
    pub fn new(descriptor: &'a PackageDescriptor, root: &Path) -> Result<Self> {
        if !root.is_dir() {
            return Err(fs::not_found(root.display().to_string()));
        }
        let root = dunce::canonicalize(root).map_err(|e| fs::read_failed(root, e))?;

        Ok(Self {
            descriptor,
            root,
            excluded: Vec::new(),
        })
    }

    /// Never bundle anything below `dir`
    ///
    /// Directories that do not exist yet cannot contain files and are ignored.
    #[must_use]
    pub fn exclude(mut self, dir: &Path) -> Self {
        if let Ok(canonical) = dunce::canonicalize(dir) {
            if !self.excluded.contains(&canonical) {
                self.excluded.push(canonical);
            }
        }
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve the descriptor against the source tree without writing
    pub fn plan(&self) -> Result<BuildPlan> {
        let mut warnings = self.descriptor.validate()?;
        let name = self.descriptor.require_name()?;
        let version = self.descriptor.require_version()?;

        let long_description = self.descriptor.long_description_text(&self.root)?;
        let metadata = CoreMetadata::from_descriptor(self.descriptor, long_description)?;
        let modules = self.descriptor.module_patterns()?;
        let packages = self.descriptor.sub_packages();

        // All directories are checked before any file is read
        for package in &packages {
            let dir = self.root.join(PackageDescriptor::package_dir(package));
            if !dir.is_dir() {
                return Err(descriptor::package_dir_not_found(
                    *package,
                    dir.display().to_string(),
                ));
            }
        }

        let mut manifest = Manifest::new();
        for package in &packages {
            let resources = self.descriptor.resource_patterns(package)?;
            let found = discover_package(
                &self.root,
                package,
                &PackageDescriptor::package_dir(package),
                &modules,
                &resources,
                &self.excluded,
            )?;

            warnings.extend(found.unmatched.into_iter().map(|pattern| {
                BuildWarning::EmptyMatch {
                    package: (*package).to_string(),
                    pattern,
                }
            }));
            for entry in found.entries {
                manifest.insert(entry)?;
            }
        }

        for warning in &warnings {
            warn!("{warning}");
        }

        let record = Record::new(
            name,
            version,
            packages.iter().map(ToString::to_string).collect(),
            &manifest,
        );

        info!(
            name,
            version,
            files = manifest.len(),
            resources = manifest.of_kind(FileKind::Resource).count(),
            "build planned"
        );

        Ok(BuildPlan {
            root: self.root.clone(),
            metadata,
            record,
            manifest,
            warnings,
        })
    }

    /// Plan, then write the artifact into `out_dir`
    ///
    /// `out_dir` is excluded from discovery.
    pub fn build(&self, out_dir: &Path) -> Result<BuildReport> {
        let scoped = Bundler {
            descriptor: self.descriptor,
            root: self.root.clone(),
            excluded: self.excluded.clone(),
        }
        .exclude(out_dir);
        let plan = scoped.plan()?;

        let artifact = write_artifact(&plan, out_dir)?;

        Ok(BuildReport {
            artifact,
            manifest: plan.manifest,
            warnings: plan.warnings,
        })
    }
}

/// Plan a build of `descriptor` over `root`
pub fn plan(descriptor: &PackageDescriptor, root: &Path) -> Result<BuildPlan> {
    Bundler::new(descriptor, root)?.plan()
}

/// Build `descriptor` over `root` into `out_dir`
pub fn build(descriptor: &PackageDescriptor, root: &Path, out_dir: &Path) -> Result<BuildReport> {
    Bundler::new(descriptor, root)?.build(out_dir)
}

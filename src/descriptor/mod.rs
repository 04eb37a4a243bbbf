//! Package descriptor (satchel.yaml)
//!
//! The descriptor names the package, declares its sub-packages and maps each
//! sub-package to the glob patterns of auxiliary files bundled with it:
//!
//! ```yaml
//! name: wheatley
//! version: "0.1"
//! packages: [wheatley]
//! package_data:
//!   wheatley: ["*.hy"]
//! author: Example Author
//! license: Expat
//! readme: README.md
//! platforms: [any]
//! ```
//!
//! A descriptor is loaded once per build and never mutated afterwards.

pub mod license;
pub mod serialization;
mod validation;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SatchelError, config, descriptor, fs};
use crate::pattern::ResourcePattern;

pub use validation::validate_sub_package_name;

/// Default descriptor file name, looked up in the source root
pub const DESCRIPTOR_FILE: &str = "satchel.yaml";

/// `package_data` key whose patterns apply to every sub-package
pub const WILDCARD_PACKAGE: &str = "";

/// Module patterns used when the descriptor does not set `module_patterns`
pub const DEFAULT_MODULE_PATTERNS: &[&str] = &["__init__", "__init__.*", "*.py"];

/// Build-time description of a distributable package
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PackageDescriptor {
    /// Unique package name
    #[serde(
        default,
        deserialize_with = "serialization::deserialize_scalar",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,

    /// Package version (informally ordered, not parsed)
    #[serde(
        default,
        deserialize_with = "serialization::deserialize_scalar",
        skip_serializing_if = "Option::is_none"
    )]
    pub version: Option<String>,

    /// Declared sub-packages, as dotted names
    #[serde(default)]
    pub packages: Vec<String>,

    /// Sub-package name to resource glob patterns
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub package_data: BTreeMap<String, Vec<String>>,

    /// Globs selecting a sub-package's own code files
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_patterns: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,

    /// Short description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Inline long description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,

    /// File, relative to the source root, holding the long description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub readme: Option<PathBuf>,

    /// Project URL, may be empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub platforms: Vec<String>,
}

/// Returns the trimmed value when present and non-empty
fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(|v| v.trim()).filter(|v| !v.is_empty())
}

impl PackageDescriptor {
    /// Create a descriptor with the two required fields set
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            version: Some(version.into()),
            ..Self::default()
        }
    }

    /// Parse a descriptor from YAML without validating it
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Serialize the descriptor back to YAML
    #[cfg(test)]
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| config::parse_failed("<descriptor>", e.to_string()))
    }

    /// Read and parse a descriptor file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(config::not_found(path.display().to_string()));
        }

        let yaml = std::fs::read_to_string(path)
            .map_err(|e| config::read_failed(path.display().to_string(), e.to_string()))?;

        serde_yaml::from_str(&yaml)
            .map_err(|e| config::parse_failed(path.display().to_string(), e.to_string()))
    }

    /// Package name, or `MissingMetadata` when absent or blank
    pub fn require_name(&self) -> Result<&str> {
        non_empty(self.name.as_ref()).ok_or_else(|| descriptor::missing_metadata("name"))
    }

    /// Package version, or `MissingMetadata` when absent or blank
    pub fn require_version(&self) -> Result<&str> {
        non_empty(self.version.as_ref()).ok_or_else(|| descriptor::missing_metadata("version"))
    }

    /// `<name>-<version>`, the artifact base name
    pub fn distribution_name(&self) -> Result<String> {
        Ok(format!("{}-{}", self.require_name()?, self.require_version()?))
    }

    /// Check the descriptor, returning non-fatal warnings
    ///
    /// Metadata problems are reported before configuration problems.
    pub fn validate(&self) -> Result<Vec<crate::warning::BuildWarning>> {
        validation::validate(self)
    }

    /// Directory of a sub-package relative to the source root
    ///
    /// `wheatley.plugins` lives in `wheatley/plugins`.
    pub fn package_dir(name: &str) -> PathBuf {
        name.split('.').collect()
    }

    /// Sub-packages in deterministic order, duplicates removed
    pub fn sub_packages(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.packages.iter().map(String::as_str).collect();
        names.sort_unstable();
        names.dedup();
        names
    }

    /// Raw resource patterns for a sub-package, wildcard entries first
    pub fn patterns_for(&self, package: &str) -> Vec<&str> {
        let mut patterns: Vec<&str> = Vec::new();
        let keys = [WILDCARD_PACKAGE, package];
        for key in keys {
            if let Some(declared) = self.package_data.get(key) {
                for pattern in declared {
                    if !patterns.contains(&pattern.as_str()) {
                        patterns.push(pattern);
                    }
                }
            }
        }
        patterns
    }

    /// Compiled resource patterns for a sub-package
    pub fn resource_patterns(&self, package: &str) -> Result<Vec<ResourcePattern>> {
        self.patterns_for(package)
            .into_iter()
            .map(|pattern| {
                ResourcePattern::new(pattern)
                    .map_err(|reason| descriptor::invalid_pattern(package, pattern, reason))
            })
            .collect()
    }

    /// Compiled module patterns
    pub fn module_patterns(&self) -> Result<Vec<ResourcePattern>> {
        let raw: Vec<&str> = match &self.module_patterns {
            Some(patterns) => patterns.iter().map(String::as_str).collect(),
            None => DEFAULT_MODULE_PATTERNS.to_vec(),
        };

        raw.into_iter()
            .map(|pattern| {
                ResourcePattern::new(pattern).map_err(|reason| {
                    descriptor::invalid_pattern("module_patterns", pattern, reason)
                })
            })
            .collect()
    }

    /// Long description text, reading `readme` relative to `root` if set
    pub fn long_description_text(&self, root: &Path) -> Result<Option<String>> {
        match (&self.long_description, &self.readme) {
            (Some(_), Some(_)) => Err(SatchelError::ConflictingLongDescription),
            (Some(text), None) => Ok(Some(text.clone())),
            (None, Some(readme)) => {
                let path = root.join(readme);
                if !path.is_file() {
                    return Err(fs::not_found(path.display().to_string()));
                }
                std::fs::read_to_string(&path)
                    .map(Some)
                    .map_err(|e| fs::read_failed(&path, e))
            }
            (None, None) => Ok(None),
        }
    }
}

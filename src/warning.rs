//! Non-fatal findings reported alongside a build

use std::fmt;

use serde::Serialize;

/// A condition worth surfacing that does not fail the build
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BuildWarning {
    /// A declared pattern matched no file; its resource set is empty
    EmptyMatch { package: String, pattern: String },

    /// The license is not a recognized identifier
    UnrecognizedLicense { license: String },
}

impl fmt::Display for BuildWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyMatch { package, pattern } => write!(
                f,
                "pattern '{pattern}' for sub-package '{package}' matched no files"
            ),
            Self::UnrecognizedLicense { license } => {
                write!(f, "license '{license}' is not a recognized identifier")
            }
        }
    }
}

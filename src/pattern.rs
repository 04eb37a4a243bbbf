//! Compiled glob patterns for module and resource discovery
//!
//! Patterns are matched against `/`-separated paths relative to a
//! sub-package directory. `*` never crosses a separator, so `*.hy` only
//! matches files directly inside the sub-package while `**/*.hy` matches
//! at any depth.

use std::fmt;

use wax::{CandidatePath, Glob, Pattern};

/// A validated, compiled glob
#[derive(Clone)]
pub struct ResourcePattern {
    source: String,
    glob: Glob<'static>,
}

impl ResourcePattern {
    /// Compile a relative glob, returning the reason on rejection
    pub fn new(pattern: &str) -> std::result::Result<Self, String> {
        if pattern.trim().is_empty() {
            return Err("pattern is empty".to_string());
        }
        if pattern.starts_with('/') || pattern.starts_with('\\') {
            return Err("absolute patterns are not allowed".to_string());
        }
        if pattern.contains('\\') {
            return Err("use '/' as the path separator".to_string());
        }
        if pattern.split('/').any(|segment| segment == "..") {
            return Err("parent segments are not allowed".to_string());
        }

        let glob = Glob::new(pattern)
            .map_err(|e| e.to_string())?
            .into_owned();

        Ok(Self {
            source: pattern.to_string(),
            glob,
        })
    }

    /// The pattern as written in the descriptor
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Whether a package-relative path matches
    pub fn matches(&self, relative: &str) -> bool {
        let candidate = CandidatePath::from(relative);
        self.glob.matched(&candidate).is_some()
    }
}

impl fmt::Debug for ResourcePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ResourcePattern").field(&self.source).finish()
    }
}

impl fmt::Display for ResourcePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl PartialEq for ResourcePattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

/// Whether any of the patterns matches
pub fn any_match(patterns: &[ResourcePattern], relative: &str) -> bool {
    patterns.iter().any(|p| p.matches(relative))
}

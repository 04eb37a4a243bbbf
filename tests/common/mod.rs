//! Common test utilities for Satchel integration tests

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Descriptor used by most tests: one sub-package bundling `*.hy`
pub const WHEATLEY_DESCRIPTOR: &str = r#"
name: wheatley
version: "0.1"
description: Hy plugin loader
url: ""
license: Expat
packages:
  - wheatley
package_data:
  wheatley:
    - "*.hy"
"#;

/// A source tree for integration tests
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to the source root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    /// Create an empty source tree
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Create the `wheatley` package with one extension script and one stray file
    pub fn wheatley() -> Self {
        let workspace = Self::new();
        workspace.write_file("satchel.yaml", WHEATLEY_DESCRIPTOR);
        workspace.write_file("wheatley/__init__", "");
        workspace.write_file("wheatley/plugin.hy", "(defn hello [] \"hi\")\n");
        workspace.write_file("wheatley/notes.txt", "not bundled\n");
        workspace
    }

    /// Write a file in the source tree
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the source tree
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Read a file as bytes
    pub fn read_bytes(&self, path: &str) -> Vec<u8> {
        std::fs::read(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in the source tree
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Absolute path inside the source tree
    pub fn join(&self, path: &str) -> PathBuf {
        self.path.join(path)
    }

    /// Get path to satchel binary
    pub fn satchel_bin() -> PathBuf {
        PathBuf::from(env!("CARGO_BIN_EXE_satchel"))
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Command running the satchel binary with a clean environment
#[allow(dead_code)]
pub fn satchel_cmd() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(TestWorkspace::satchel_bin());
    // Ignore any developer overrides
    cmd.env_remove("SATCHEL_ROOT");
    cmd.env_remove("SATCHEL_LOG");
    cmd
}

/// Build the workspace with the binary and return the artifact path
#[allow(dead_code)]
pub fn build_artifact(workspace: &TestWorkspace) -> PathBuf {
    satchel_cmd()
        .current_dir(&workspace.path)
        .arg("build")
        .assert()
        .success();
    artifact_in(&workspace.path.join("dist"))
}

/// The single artifact in a directory
#[allow(dead_code)]
pub fn artifact_in(dir: &Path) -> PathBuf {
    let mut artifacts: Vec<PathBuf> = std::fs::read_dir(dir)
        .expect("Failed to read output directory")
        .map(|entry| entry.expect("Failed to read entry").path())
        .filter(|path| path.to_string_lossy().ends_with(".tar.gz"))
        .collect();
    assert_eq!(artifacts.len(), 1, "expected exactly one artifact");
    artifacts.remove(0)
}

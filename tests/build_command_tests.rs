//! Build command tests

mod common;

use common::{TestWorkspace, satchel_cmd};
use predicates::prelude::*;
use satchel::artifact::ArtifactReader;

#[test]
fn test_build_bundles_declared_files() {
    let workspace = TestWorkspace::wheatley();

    satchel_cmd()
        .current_dir(&workspace.path)
        .arg("build")
        .assert()
        .success()
        .stdout(predicate::str::contains("Built"))
        .stdout(predicate::str::contains("wheatley-0.1.tar.gz"))
        .stdout(predicate::str::contains("1 module(s), 1 resource(s)"));

    let reader = ArtifactReader::open(&workspace.join("dist/wheatley-0.1.tar.gz")).unwrap();
    let paths: Vec<&str> = reader.package_paths().collect();
    assert_eq!(paths, vec!["wheatley/__init__", "wheatley/plugin.hy"]);
    assert_eq!(
        reader.read("wheatley/plugin.hy").unwrap(),
        workspace.read_bytes("wheatley/plugin.hy").as_slice()
    );
}

#[test]
fn test_build_with_root_and_out_dir() {
    let workspace = TestWorkspace::wheatley();
    let out = tempfile::TempDir::new().unwrap();

    satchel_cmd()
        .args(["-C", workspace.path.to_str().unwrap(), "build", "-o"])
        .arg(out.path())
        .assert()
        .success();

    assert!(out.path().join("wheatley-0.1.tar.gz").is_file());
    assert!(!workspace.file_exists("dist"));
}

#[test]
fn test_build_root_from_env() {
    let workspace = TestWorkspace::wheatley();

    satchel_cmd()
        .env("SATCHEL_ROOT", &workspace.path)
        .arg("build")
        .assert()
        .success();

    assert!(workspace.file_exists("dist/wheatley-0.1.tar.gz"));
}

#[test]
fn test_build_custom_descriptor_file() {
    let workspace = TestWorkspace::wheatley();
    let descriptor = workspace.read_file("satchel.yaml");
    std::fs::remove_file(workspace.join("satchel.yaml")).unwrap();
    workspace.write_file("packaging/wheatley.yaml", &descriptor);

    satchel_cmd()
        .current_dir(&workspace.path)
        .args(["build", "-f", "packaging/wheatley.yaml"])
        .assert()
        .success();

    assert!(workspace.file_exists("dist/wheatley-0.1.tar.gz"));
}

#[test]
fn test_build_warns_on_empty_match() {
    let workspace = TestWorkspace::wheatley();
    std::fs::remove_file(workspace.join("wheatley/plugin.hy")).unwrap();

    satchel_cmd()
        .current_dir(&workspace.path)
        .arg("build")
        .assert()
        .success()
        .stderr(predicate::str::contains("warning:"))
        .stderr(predicate::str::contains("'*.hy'"))
        .stderr(predicate::str::contains("matched no files"));

    assert!(workspace.file_exists("dist/wheatley-0.1.tar.gz"));
}

#[test]
fn test_build_unknown_sub_package_fails_without_output() {
    let workspace = TestWorkspace::wheatley();
    workspace.write_file(
        "satchel.yaml",
        r#"
name: wheatley
version: "0.1"
packages: [wheatley]
package_data:
  other: ["*.hy"]
"#,
    );

    satchel_cmd()
        .current_dir(&workspace.path)
        .arg("build")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("'other'"))
        .stderr(predicate::str::contains("help:"));

    assert!(!workspace.file_exists("dist"));
}

#[test]
fn test_build_missing_version_fails() {
    let workspace = TestWorkspace::wheatley();
    workspace.write_file("satchel.yaml", "name: wheatley\npackages: [wheatley]\n");

    satchel_cmd()
        .current_dir(&workspace.path)
        .arg("build")
        .assert()
        .failure()
        .stderr(predicate::str::contains("'version'"));

    assert!(!workspace.file_exists("dist"));
}

#[test]
fn test_build_rejects_name_with_path_separator() {
    let workspace = TestWorkspace::wheatley();
    workspace.write_file(
        "satchel.yaml",
        "name: acme/tool\nversion: \"0.1\"\npackages: [wheatley]\n",
    );

    satchel_cmd()
        .current_dir(&workspace.path)
        .arg("build")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid descriptor field 'name'"))
        .stderr(predicate::str::contains("path separator"));

    assert!(!workspace.file_exists("dist"));
}

#[test]
fn test_build_rejects_unquoted_float_version() {
    let workspace = TestWorkspace::wheatley();
    workspace.write_file(
        "satchel.yaml",
        "name: wheatley\nversion: 1.10\npackages: [wheatley]\n",
    );

    satchel_cmd()
        .current_dir(&workspace.path)
        .arg("build")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse descriptor file"))
        .stderr(predicate::str::contains("quote the version"));

    assert!(!workspace.file_exists("dist"));
}

#[test]
fn test_build_missing_descriptor_fails() {
    let workspace = TestWorkspace::new();

    satchel_cmd()
        .current_dir(&workspace.path)
        .arg("build")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Descriptor file not found"));
}

#[test]
fn test_build_rejects_unknown_descriptor_field() {
    let workspace = TestWorkspace::wheatley();
    workspace.write_file(
        "satchel.yaml",
        "name: wheatley\nversion: \"0.1\"\npackages: [wheatley]\nscripts: [run]\n",
    );

    satchel_cmd()
        .current_dir(&workspace.path)
        .arg("build")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse descriptor file"));
}

#[test]
fn test_build_twice_is_byte_identical() {
    let workspace = TestWorkspace::wheatley();
    let artifact = common::build_artifact(&workspace);
    let first = std::fs::read(&artifact).unwrap();

    satchel_cmd()
        .current_dir(&workspace.path)
        .arg("build")
        .assert()
        .success();
    let second = std::fs::read(&artifact).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_build_does_not_modify_sources() {
    let workspace = TestWorkspace::wheatley();
    common::build_artifact(&workspace);

    assert_eq!(workspace.read_file("wheatley/notes.txt"), "not bundled\n");
    assert_eq!(
        workspace.read_file("wheatley/plugin.hy"),
        "(defn hello [] \"hi\")\n"
    );
}

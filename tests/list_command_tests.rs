//! List command tests

mod common;

use common::{TestWorkspace, build_artifact, satchel_cmd};
use predicates::prelude::*;

#[test]
fn test_list_shows_files_and_metadata() {
    let workspace = TestWorkspace::wheatley();
    let artifact = build_artifact(&workspace);

    satchel_cmd()
        .arg("list")
        .arg(&artifact)
        .assert()
        .success()
        .stdout(predicate::str::contains("wheatley 0.1"))
        .stdout(predicate::str::contains("Summary: Hy plugin loader"))
        .stdout(predicate::str::contains("module"))
        .stdout(predicate::str::contains("wheatley/__init__"))
        .stdout(predicate::str::contains("resource"))
        .stdout(predicate::str::contains("wheatley/plugin.hy"))
        .stdout(predicate::str::contains("Verified").not());
}

#[test]
fn test_list_verify() {
    let workspace = TestWorkspace::wheatley();
    let artifact = build_artifact(&workspace);

    satchel_cmd()
        .args(["list", "--verify"])
        .arg(&artifact)
        .assert()
        .success()
        .stdout(predicate::str::contains("Verified 2 file(s)"));
}

#[test]
fn test_list_missing_artifact() {
    let workspace = TestWorkspace::new();

    satchel_cmd()
        .args(["list"])
        .arg(workspace.join("missing.tar.gz"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_list_rejects_non_artifact() {
    let workspace = TestWorkspace::new();
    workspace.write_file("bogus.tar.gz", "definitely not gzip");

    satchel_cmd()
        .args(["list"])
        .arg(workspace.join("bogus.tar.gz"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid artifact"));
}

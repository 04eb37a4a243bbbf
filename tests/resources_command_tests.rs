//! Resources command tests

mod common;

use common::{TestWorkspace, build_artifact, satchel_cmd};
use predicates::prelude::*;

fn installed_site() -> (TestWorkspace, TestWorkspace) {
    let workspace = TestWorkspace::wheatley();
    workspace.write_file("wheatley/extra.hy", "(extra)\n");
    let artifact = build_artifact(&workspace);
    let site = TestWorkspace::new();

    satchel_cmd()
        .arg("install")
        .arg(&artifact)
        .arg("-t")
        .arg(&site.path)
        .assert()
        .success();

    (workspace, site)
}

#[test]
fn test_resources_lists_installed_paths() {
    let (_workspace, site) = installed_site();

    satchel_cmd()
        .args(["resources", "wheatley", "-t"])
        .arg(&site.path)
        .assert()
        .success()
        .stdout(predicate::str::contains("wheatley/extra.hy"))
        .stdout(predicate::str::contains("wheatley/plugin.hy"))
        .stdout(predicate::str::contains("__init__").not());
}

#[test]
fn test_resources_with_pattern() {
    let (_workspace, site) = installed_site();

    satchel_cmd()
        .args(["resources", "wheatley", "--pattern", "p*.hy", "-t"])
        .arg(&site.path)
        .assert()
        .success()
        .stdout(predicate::str::contains("wheatley/plugin.hy"))
        .stdout(predicate::str::contains("extra.hy").not());
}

#[test]
fn test_resources_unknown_package() {
    let (_workspace, site) = installed_site();

    satchel_cmd()
        .args(["resources", "glados", "-t"])
        .arg(&site.path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("'glados' is not installed"))
        .stderr(predicate::str::contains("help:"));
}

#[test]
fn test_resources_verify_detects_modified_file() {
    let (_workspace, site) = installed_site();

    satchel_cmd()
        .args(["resources", "wheatley", "--verify", "-t"])
        .arg(&site.path)
        .assert()
        .success();

    site.write_file("wheatley/plugin.hy", "(changed)\n");

    satchel_cmd()
        .args(["resources", "wheatley", "--verify", "-t"])
        .arg(&site.path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Hash mismatch"))
        .stderr(predicate::str::contains("wheatley/plugin.hy"));
}

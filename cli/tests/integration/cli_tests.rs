//! Integration tests for the CLI skeleton: help, version, global flags.

#![allow(clippy::expect_used)]

use predicates::prelude::*;

use crate::helpers::{ORG_MANIFEST, ghrunner, manifest};

#[test]
fn test_cli_no_args_shows_help() {
    // arg_required_else_help prints help on stderr and exits 2
    ghrunner().assert().code(2).stderr(predicate::str::contains(
        "Plan GitHub Actions self-hosted runner installations",
    ));
}

#[test]
fn test_cli_help_lists_commands() {
    ghrunner()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("plan"))
        .stdout(predicate::str::contains("render"))
        .stdout(predicate::str::contains("validate"))
        .stdout(predicate::str::contains("export"));
}

#[test]
fn test_version_command_shows_version() {
    ghrunner()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "ghrunner {}",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn test_version_command_json() {
    let output = ghrunner()
        .args(["version", "--json"])
        .output()
        .expect("run");
    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(v["version"], env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_unknown_platform_rejected() {
    ghrunner()
        .args(["plan", "--platform", "solaris"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_config_from_environment_variable() {
    let (_dir, path) = manifest(ORG_MANIFEST);
    ghrunner()
        .env("GHRUNNER_CONFIG", &path)
        .args(["plan", "--platform", "linux"])
        .assert()
        .success()
        .stdout(predicate::str::contains("first_runner"));
}

#[test]
fn test_missing_manifest_reports_path() {
    ghrunner()
        .args(["--config", "/nonexistent/runners.yaml", "plan"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: cannot read /nonexistent/runners.yaml"));
}

#[test]
fn test_missing_manifest_json_error_object() {
    let output = ghrunner()
        .args(["--json", "--config", "/nonexistent/runners.yaml", "plan"])
        .output()
        .expect("run");
    assert_eq!(output.status.code(), Some(1));
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(v["error"], true);
    assert_eq!(v["code"], "ERROR");
}

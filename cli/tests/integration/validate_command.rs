//! Integration tests for `ghrunner validate`.

#![allow(clippy::expect_used)]

use predicates::prelude::*;

use crate::helpers::{NO_IDENTITY_MANIFEST, ORG_MANIFEST, with_manifest};

const LINT_MANIFEST: &str = "\
org_name: github_org
instances:
  first_runner: {}
";

#[test]
fn test_validate_clean_manifest() {
    let (_dir, mut cmd) = with_manifest(ORG_MANIFEST, "linux");
    cmd.arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Manifest is valid"));
}

#[test]
fn test_validate_findings_are_warnings_by_default() {
    let (_dir, mut cmd) = with_manifest(LINT_MANIFEST, "linux");
    cmd.arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("first_runner: no labels declared"));
}

#[test]
fn test_validate_strict_exits_two_on_findings() {
    let (_dir, mut cmd) = with_manifest(LINT_MANIFEST, "linux");
    cmd.args(["validate", "--strict"]).assert().code(2);
}

#[test]
fn test_validate_strict_clean_manifest_succeeds() {
    let (_dir, mut cmd) = with_manifest(ORG_MANIFEST, "linux");
    cmd.args(["validate", "--strict"]).assert().success();
}

#[test]
fn test_validate_missing_identity_exits_one() {
    let (_dir, mut cmd) = with_manifest(NO_IDENTITY_MANIFEST, "linux");
    cmd.arg("validate")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("org_name"));
}

#[test]
fn test_validate_json_reports_findings() {
    let (_dir, mut cmd) = with_manifest(LINT_MANIFEST, "linux");
    let output = cmd.args(["validate", "--json"]).output().expect("run");
    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(v["valid"], true);
    let findings = v["findings"].as_array().expect("findings");
    assert!(!findings.is_empty());
    assert_eq!(findings[0]["instance"], "first_runner");
}

#[test]
fn test_validate_warns_on_unknown_top_level_key() {
    let manifest = format!("{ORG_MANIFEST}http_proxi: http://typo.local\n");
    let (_dir, mut cmd) = with_manifest(&manifest, "linux");
    cmd.arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("unknown key 'http_proxi' is ignored"));
}

#[test]
fn test_validate_rejects_unknown_instance_key() {
    let manifest = "\
org_name: github_org
instances:
  first_runner:
    lables: [linux]
";
    let (_dir, mut cmd) = with_manifest(manifest, "linux");
    cmd.arg("validate")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unknown field `lables`"));
}

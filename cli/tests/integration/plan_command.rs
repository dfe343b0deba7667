//! Integration tests for `ghrunner plan`.

#![allow(clippy::expect_used)]

use predicates::prelude::*;

use crate::helpers::{ABSENT_MANIFEST, NO_IDENTITY_MANIFEST, ORG_MANIFEST, with_manifest};

#[test]
fn test_plan_human_groups_by_instance() {
    let (_dir, mut cmd) = with_manifest(ORG_MANIFEST, "linux");
    cmd.arg("plan")
        .assert()
        .success()
        .stdout(predicate::str::contains("Plan (linux)"))
        .stdout(predicate::str::contains("shared:"))
        .stdout(predicate::str::contains("first_runner:"))
        .stdout(predicate::str::contains("github-actions-runner.first_runner.service"))
        .stdout(predicate::str::contains("7 artifacts (7 present, 0 absent)"));
}

#[test]
fn test_plan_quiet_prints_nothing() {
    let (_dir, mut cmd) = with_manifest(ORG_MANIFEST, "linux");
    cmd.args(["plan", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_plan_json_lists_artifacts_in_order() {
    let (_dir, mut cmd) = with_manifest(ORG_MANIFEST, "linux");
    let output = cmd.args(["plan", "--json"]).output().expect("run");
    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(v["platform"], "linux");
    let kinds: Vec<&str> = v["artifacts"]
        .as_array()
        .expect("array")
        .iter()
        .map(|a| a["kind"].as_str().expect("kind"))
        .collect();
    assert_eq!(
        kinds,
        ["directory", "directory", "archive", "exec", "file", "exec", "service_unit"]
    );
}

#[test]
fn test_plan_json_windows_has_no_unit() {
    let (_dir, mut cmd) = with_manifest(ORG_MANIFEST, "windows");
    let output = cmd.args(["plan", "--json"]).output().expect("run");
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    let artifacts = v["artifacts"].as_array().expect("array");
    assert_eq!(artifacts.len(), 5);
    assert!(artifacts.iter().all(|a| a["kind"] != "service_unit"));
    assert_eq!(artifacts[0]["name"], "C:/actions-runner-2.272.0");
}

#[test]
fn test_plan_absent_instance() {
    let (_dir, mut cmd) = with_manifest(ABSENT_MANIFEST, "linux");
    cmd.arg("plan")
        .assert()
        .success()
        .stdout(predicate::str::contains("5 artifacts (1 present, 4 absent)"));
}

#[test]
fn test_plan_without_identity_fails() {
    let (_dir, mut cmd) = with_manifest(NO_IDENTITY_MANIFEST, "linux");
    cmd.arg("plan")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Either 'org_name' or 'enterprise_name' is required",
        ));
}

#[test]
fn test_plan_without_identity_json_code() {
    let (_dir, mut cmd) = with_manifest(NO_IDENTITY_MANIFEST, "linux");
    let output = cmd.args(["plan", "--json"]).output().expect("run");
    assert_eq!(output.status.code(), Some(1));
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(v["code"], "CONFIGURATION_ERROR");
}

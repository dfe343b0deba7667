//! Integration tests for `ghrunner export`.

#![allow(clippy::expect_used)]

use predicates::prelude::*;

use crate::helpers::{ABSENT_MANIFEST, ORG_MANIFEST, with_manifest};

#[test]
fn test_export_writes_plan_and_files() {
    let (dir, mut cmd) = with_manifest(ORG_MANIFEST, "linux");
    let out = dir.path().join("export");
    cmd.arg("export")
        .arg("--out")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("exported plan to"));

    let plan = std::fs::read_to_string(out.join("plan.json")).expect("plan.json");
    let v: serde_json::Value = serde_json::from_str(&plan).expect("json");
    assert_eq!(v["artifacts"].as_array().expect("array").len(), 7);

    let script = std::fs::read_to_string(out.join("first_runner/configure_install_runner.sh"))
        .expect("script");
    assert!(script.contains("test_label1,test_label2"));
    let digest_file =
        std::fs::read_to_string(out.join("first_runner/configure_install_runner.sh.sha256"))
            .expect("digest file");
    let script_artifact = v["artifacts"]
        .as_array()
        .expect("array")
        .iter()
        .find(|a| a["kind"] == "file")
        .expect("script artifact");
    assert_eq!(
        digest_file,
        format!("{}\n", script_artifact["content_sha256"].as_str().expect("digest"))
    );
    assert!(
        out.join("first_runner/github-actions-runner.first_runner.service")
            .exists()
    );
}

#[test]
fn test_export_json_summary() {
    let (dir, mut cmd) = with_manifest(ORG_MANIFEST, "windows");
    let out = dir.path().join("export");
    let output = cmd
        .args(["export", "--json", "--out"])
        .arg(&out)
        .output()
        .expect("run");
    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(v["files"], 3);
    assert!(out.join("first_runner/configure_install_runner.ps1").exists());
}

#[test]
fn test_export_absent_only_writes_plan() {
    let (dir, mut cmd) = with_manifest(ABSENT_MANIFEST, "linux");
    let out = dir.path().join("export");
    cmd.arg("export")
        .arg("--out")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("4 artifacts are marked absent"));
    assert!(out.join("plan.json").exists());
    assert!(!out.join("old_runner").exists());
}

#[test]
fn test_export_rejects_instance_name_leaving_out_dir() {
    let manifest = "\
org_name: github_org
instances:
  ../escaped:
    repo_name: test_repo
";
    let (dir, mut cmd) = with_manifest(manifest, "linux");
    let out = dir.path().join("export");
    cmd.arg("export")
        .arg("--out")
        .arg(&out)
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Instance name '../escaped' cannot be used as a directory name",
        ));
    assert!(!dir.path().join("escaped").exists());
    assert!(!out.exists());
}

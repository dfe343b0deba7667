//! Tests for the plan and export services driven through port doubles.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::path::Path;

use ghrunner_cli::application::services::{export_service, plan_service};
use ghrunner_cli::domain::{ConfigurationError, InstanceError};
use runner_common::{Ensure, InstanceConfig, Platform};

use crate::mocks::{
    BrokenConfigStore, InMemoryConfigStore, NullReporter, RecordingWriter, org_manifest,
    repo_instance,
};

#[test]
fn test_plan_propagates_load_failure() {
    let err = plan_service::plan(&BrokenConfigStore, Platform::Linux).unwrap_err();
    assert!(err.to_string().contains("cannot read"), "got: {err}");
}

#[test]
fn test_plan_without_identity_is_configuration_error() {
    let mut manifest = org_manifest("");
    manifest
        .instances
        .insert("first_runner".into(), repo_instance("test_repo", &[]));
    let err = plan_service::plan(&InMemoryConfigStore::new(manifest), Platform::Linux)
        .unwrap_err();
    assert!(err.downcast_ref::<ConfigurationError>().is_some());
    assert!(err.to_string().contains("memory://runners.yaml"));
}

#[test]
fn test_find_instance_unknown_name() {
    let mut manifest = org_manifest("github_org");
    manifest
        .instances
        .insert("first_runner".into(), repo_instance("test_repo", &[]));
    let resolved =
        plan_service::resolve(&InMemoryConfigStore::new(manifest), Platform::Linux).unwrap();
    let err = plan_service::find_instance(&resolved, "second_runner").unwrap_err();
    assert!(matches!(
        err.downcast_ref::<InstanceError>(),
        Some(InstanceError::NotFound { .. })
    ));
    assert!(err.to_string().contains("first_runner"));
}

#[test]
fn test_export_writes_plan_and_rendered_files() {
    let mut manifest = org_manifest("github_org");
    manifest
        .instances
        .insert("first_runner".into(), repo_instance("test_repo", &["a"]));
    manifest.instances.insert(
        "old_runner".into(),
        InstanceConfig {
            ensure: Ensure::Absent,
            ..InstanceConfig::default()
        },
    );
    let plan = plan_service::plan(&InMemoryConfigStore::new(manifest), Platform::Linux).unwrap();

    let writer = RecordingWriter::default();
    let n = export_service::export(&plan, Path::new("out"), &writer, &NullReporter).unwrap();

    let files = writer.files.borrow();
    assert_eq!(n, files.len());
    assert!(files.contains_key("plan.json"));
    assert!(files.contains_key("first_runner/configure_install_runner.sh"));
    assert!(!files.keys().any(|k| k.starts_with("old_runner/")));

    let plan_json: serde_json::Value = serde_json::from_str(&files["plan.json"]).unwrap();
    assert_eq!(plan_json["platform"], "linux");
}

#[test]
fn test_export_windows_has_no_unit_file() {
    let mut manifest = org_manifest("github_org");
    manifest
        .instances
        .insert("first_runner".into(), repo_instance("test_repo", &[]));
    let plan =
        plan_service::plan(&InMemoryConfigStore::new(manifest), Platform::Windows).unwrap();
    let files = export_service::export_files(&plan).unwrap();
    assert!(files.contains_key("first_runner/configure_install_runner.ps1"));
    assert!(!files.keys().any(|k| k.contains(".service")));
}

//! Non-fatal manifest checks — pure functions, no I/O.
//!
//! Compilation never fails on anything reported here; these findings point
//! at manifests that compile but probably do not do what was intended.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use runner_common::RunnerManifest;
use serde::Serialize;

/// Instance names become path components and unit names, so they are held
/// to a conservative character set.
pub static INSTANCE_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Safety: this is a compile-time constant pattern — cannot fail.
    #[allow(clippy::expect_used)]
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_.-]{0,62}$").expect("valid regex")
});

/// A label must survive being joined with `,` and passed as one argument.
pub static LABEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^[^\s,]+$").expect("valid regex")
});

/// One lint result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
    pub message: String,
}

impl Finding {
    fn global(message: impl Into<String>) -> Self {
        Self {
            instance: None,
            message: message.into(),
        }
    }

    fn instance(name: &str, message: impl Into<String>) -> Self {
        Self {
            instance: Some(name.to_string()),
            message: message.into(),
        }
    }
}

/// Returns `true` if `name` is safe to use as an instance name.
pub fn is_valid_instance_name(name: &str) -> bool {
    INSTANCE_NAME_RE.is_match(name) && !name.contains("..")
}

fn is_set(value: Option<&String>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

/// Collects every finding for `manifest`, global ones first.
#[must_use]
pub fn lint_manifest(manifest: &RunnerManifest) -> Vec<Finding> {
    let global = &manifest.global;
    let mut findings = Vec::new();

    let has_org = is_set(global.org_name.as_ref());
    let has_enterprise = is_set(global.enterprise_name.as_ref());
    if has_org && has_enterprise {
        findings.push(Finding::global(
            "both org_name and enterprise_name are set; enterprise_name takes precedence",
        ));
    }
    if manifest.instances.is_empty() {
        findings.push(Finding::global("no instances declared"));
    }
    for key in manifest.unknown.keys() {
        findings.push(Finding::global(format!("unknown key '{key}' is ignored")));
    }

    for (name, instance) in &manifest.instances {
        if !is_valid_instance_name(name) {
            findings.push(Finding::instance(
                name,
                "name must be alphanumeric with '_', '.' or '-' and at most 63 characters",
            ));
        }
        if !instance.ensure.is_present() {
            continue;
        }
        if has_org && !has_enterprise && !is_set(instance.repo_name.as_ref()) {
            findings.push(Finding::instance(
                name,
                "no repo_name; the runner registers organization-wide",
            ));
        }
        if has_enterprise && is_set(instance.repo_name.as_ref()) {
            findings.push(Finding::instance(
                name,
                "repo_name is ignored for enterprise runners",
            ));
        }
        if instance.labels.is_empty() {
            findings.push(Finding::instance(name, "no labels declared"));
        }
        let mut seen = HashSet::new();
        for label in &instance.labels {
            if !LABEL_RE.is_match(label) {
                findings.push(Finding::instance(
                    name,
                    format!("label '{label}' contains whitespace or ','"),
                ));
            }
            if !seen.insert(label.as_str()) {
                findings.push(Finding::instance(name, format!("duplicate label '{label}'")));
            }
        }
    }

    findings
}

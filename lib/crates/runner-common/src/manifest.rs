// lib/crates/runner-common/src/manifest.rs

use std::collections::BTreeMap;

use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};

use crate::types::Ensure;

/// Runner manifest (`runners.yaml`): global defaults at the top level plus
/// one entry per runner instance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunnerManifest {
    #[serde(flatten)]
    pub global: GlobalConfig,
    /// Instances keyed by name. Ordered so every compilation visits them in
    /// the same sequence.
    #[serde(default)]
    pub instances: BTreeMap<String, InstanceConfig>,
    /// Top-level keys no field claims, kept so they can be reported.
    #[serde(flatten, skip_serializing)]
    pub unknown: BTreeMap<String, IgnoredAny>,
}

/// Process-wide defaults shared by every instance.
///
/// Every field is optional in the manifest; unset values fall back to the
/// platform defaults at resolution time.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GlobalConfig {
    pub org_name: Option<String>,
    pub enterprise_name: Option<String>,
    pub base_dir_name: Option<String>,
    pub package_name: Option<String>,
    /// Runner version, e.g. `"2.272.0"`.
    pub package_ensure: Option<String>,
    pub package_extension: Option<String>,
    pub repository_url: Option<String>,
    pub github_domain: Option<String>,
    pub github_api: Option<String>,
    pub personal_access_token: Option<String>,
    pub user: Option<String>,
    pub group: Option<String>,
    pub http_proxy: Option<String>,
    pub https_proxy: Option<String>,
    pub no_proxy: Option<String>,
    /// Prefix for the registered runner name (`<hostname>-<instance>`).
    pub hostname: Option<String>,
}

/// Per-instance settings and overrides.
///
/// Identity (`org_name` / `enterprise_name`) and the shared install layout
/// (`base_dir_name`, `package_*`, `repository_url`) are global only.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct InstanceConfig {
    pub ensure: Ensure,
    pub repo_name: Option<String>,
    /// Runner labels, rendered in declaration order.
    pub labels: Vec<String>,
    pub http_proxy: Option<String>,
    pub https_proxy: Option<String>,
    pub no_proxy: Option<String>,
    pub github_domain: Option<String>,
    pub github_api: Option<String>,
    pub personal_access_token: Option<String>,
    pub user: Option<String>,
    pub group: Option<String>,
}

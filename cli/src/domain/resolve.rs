//! Configuration overlay — merges global defaults and per-instance overrides
//! into fully resolved values.
//!
//! Pure functions only — no I/O. Resolution is total once the identity
//! scope is known; the only failure in the pipeline is identity resolution.

use runner_common::{Ensure, GlobalConfig, InstanceConfig};
use serde::Serialize;

use crate::domain::identity::IdentityScope;
use crate::domain::paths::{self, InstallPaths};
use crate::domain::platform::{DEFAULT_REPOSITORY_URL, DEFAULT_VERSION, PlatformProfile};
use crate::domain::proxy::ProxySettings;

// ── Constants ────────────────────────────────────────────────────────────────

pub const DEFAULT_GITHUB_DOMAIN: &str = "https://github.com";
pub const DEFAULT_GITHUB_API: &str = "https://api.github.com";
/// Rendered in place of a missing access token. Not a secret: it marks an
/// unattended or test configuration.
pub const TOKEN_PLACEHOLDER: &str = "PAT";

// ── Resolved value types ─────────────────────────────────────────────────────

/// Registration endpoint pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Endpoint {
    pub base_url: String,
    pub api_url: String,
}

impl Endpoint {
    /// Instance override, then global override, then the public service.
    /// The API URL is derived from the chosen domain unless set explicitly
    /// at either level.
    #[must_use]
    pub fn resolve(global: &GlobalConfig, instance: &InstanceConfig) -> Self {
        let base_url = instance
            .github_domain
            .as_deref()
            .or(global.github_domain.as_deref())
            .unwrap_or(DEFAULT_GITHUB_DOMAIN)
            .trim_end_matches('/')
            .to_string();
        let api_url = instance
            .github_api
            .as_deref()
            .or(global.github_api.as_deref())
            .map_or_else(
                || derive_api_url(&base_url),
                |api| api.trim_end_matches('/').to_string(),
            );
        Self { base_url, api_url }
    }
}

/// Public GitHub has a dedicated API host; other domains serve the API
/// under `/api/v3`.
fn derive_api_url(base_url: &str) -> String {
    if base_url == DEFAULT_GITHUB_DOMAIN {
        DEFAULT_GITHUB_API.to_string()
    } else {
        format!("{base_url}/api/v3")
    }
}

/// Owner, group and mode applied to created filesystem objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OwnershipSpec {
    pub user: String,
    pub group: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
}

impl OwnershipSpec {
    #[must_use]
    pub fn resolve(
        profile: &PlatformProfile,
        user: Option<&String>,
        group: Option<&String>,
    ) -> Self {
        Self {
            user: user.map_or_else(|| profile.default_owner.to_string(), Clone::clone),
            group: group.map_or_else(|| profile.default_owner.to_string(), Clone::clone),
            mode: None,
        }
    }

    #[must_use]
    pub fn with_mode(&self, mode: &str) -> Self {
        Self {
            mode: Some(mode.to_string()),
            ..self.clone()
        }
    }
}

/// Runner package coordinates shared by every instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageSpec {
    pub name: String,
    pub version: String,
    pub extension: String,
    pub repository_url: String,
}

impl PackageSpec {
    #[must_use]
    pub fn resolve(profile: &PlatformProfile, global: &GlobalConfig) -> Self {
        Self {
            name: global
                .package_name
                .clone()
                .unwrap_or_else(|| profile.default_package_name.to_string()),
            version: global
                .package_ensure
                .clone()
                .unwrap_or_else(|| DEFAULT_VERSION.to_string()),
            extension: global
                .package_extension
                .clone()
                .unwrap_or_else(|| profile.default_package_extension.to_string()),
            repository_url: global
                .repository_url
                .as_deref()
                .unwrap_or(DEFAULT_REPOSITORY_URL)
                .trim_end_matches('/')
                .to_string(),
        }
    }

    /// `<name>-<version>.<extension>`
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}-{}.{}", self.name, self.version, self.extension)
    }

    /// `<repository_url>/v<version>/<file_name>`
    #[must_use]
    pub fn source_url(&self) -> String {
        format!("{}/v{}/{}", self.repository_url, self.version, self.file_name())
    }
}

/// Layout shared by all instances: the versioned root directory and the
/// package it is populated from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedLayout {
    pub base_dir_name: String,
    pub root_path: String,
    pub package: PackageSpec,
    pub ownership: OwnershipSpec,
}

impl SharedLayout {
    #[must_use]
    pub fn resolve(profile: &PlatformProfile, global: &GlobalConfig) -> Self {
        let package = PackageSpec::resolve(profile, global);
        let base_dir_name = global
            .base_dir_name
            .clone()
            .unwrap_or_else(|| profile.default_base_dir.to_string());
        Self {
            root_path: paths::root_path(&base_dir_name, &package.version),
            base_dir_name,
            package,
            ownership: OwnershipSpec::resolve(
                profile,
                global.user.as_ref(),
                global.group.as_ref(),
            ),
        }
    }
}

/// One instance with every setting determined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedInstance {
    pub name: String,
    pub ensure: Ensure,
    pub identity: IdentityScope,
    /// Value passed to `--url`.
    pub target_url: String,
    /// API path that issues registration tokens, relative to `endpoint.api_url`.
    pub registration_path: String,
    /// Runner display name, `<hostname>-<instance>` when a hostname is set.
    pub runner_name: String,
    pub labels: Vec<String>,
    pub token: String,
    pub endpoint: Endpoint,
    pub proxy: ProxySettings,
    pub ownership: OwnershipSpec,
    pub package: PackageSpec,
    pub paths: InstallPaths,
}

/// Applies the instance overlay on top of the global configuration.
#[must_use]
pub fn resolve_instance(
    profile: &PlatformProfile,
    global: &GlobalConfig,
    identity: &IdentityScope,
    layout: &SharedLayout,
    name: &str,
    instance: &InstanceConfig,
) -> ResolvedInstance {
    let endpoint = Endpoint::resolve(global, instance);
    let repo_name = instance.repo_name.as_deref();

    let token = instance
        .personal_access_token
        .as_ref()
        .or(global.personal_access_token.as_ref())
        .filter(|t| !t.is_empty())
        .map_or_else(|| TOKEN_PLACEHOLDER.to_string(), Clone::clone);

    let runner_name = match global.hostname.as_deref().filter(|h| !h.is_empty()) {
        Some(host) => format!("{host}-{name}"),
        None => name.to_string(),
    };

    ResolvedInstance {
        name: name.to_string(),
        ensure: instance.ensure,
        identity: identity.clone(),
        target_url: identity.target_url(&endpoint.base_url, repo_name),
        registration_path: identity.registration_token_path(repo_name),
        runner_name,
        labels: instance.labels.clone(),
        token,
        proxy: ProxySettings::resolve(global, instance),
        ownership: OwnershipSpec::resolve(
            profile,
            instance.user.as_ref().or(global.user.as_ref()),
            instance.group.as_ref().or(global.group.as_ref()),
        ),
        package: layout.package.clone(),
        paths: InstallPaths::new(&layout.base_dir_name, &layout.package.version, name),
        endpoint,
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────

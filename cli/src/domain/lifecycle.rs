//! Lifecycle compilation — turns a manifest into an ordered list of
//! artifact intents for an external convergence agent.
//!
//! Nothing here touches the filesystem or spawns processes. Every pass
//! recomputes the desired state from scratch; no history is kept between
//! passes. The configuration step is emitted on every pass and relies on the
//! script being safe to re-run (see `domain::script`), so no completion
//! marker is tracked.

use runner_common::{Ensure, Platform, RunnerManifest};
use serde::Serialize;
use tracing::debug;

use crate::domain::error::ConfigurationError;
use crate::domain::identity::resolve_identity;
use crate::domain::platform::{PlatformProfile, ScriptDialect};
use crate::domain::resolve::{OwnershipSpec, ResolvedInstance, SharedLayout, resolve_instance};
use crate::domain::script::configuration_script;
use crate::domain::unit::{content_digest, systemd_unit, unit_name};

// ── Constants ────────────────────────────────────────────────────────────────

pub const DIRECTORY_MODE: &str = "0644";
pub const SCRIPT_MODE: &str = "0755";

// ── Artifact intents ─────────────────────────────────────────────────────────

/// Interpreter an execution step is dispatched through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Interpreter {
    PowerShell,
}

/// Typed properties of one managed artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Resource {
    Directory {
        path: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        ownership: Option<OwnershipSpec>,
    },
    Archive {
        path: String,
        source: String,
        extract_path: String,
        /// Present once extraction has happened.
        creates: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        ownership: Option<OwnershipSpec>,
    },
    File {
        path: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        content: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        content_sha256: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        ownership: Option<OwnershipSpec>,
    },
    Exec {
        command: String,
        cwd: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        user: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        interpreter: Option<Interpreter>,
    },
    ServiceUnit {
        #[serde(skip_serializing_if = "Option::is_none")]
        content: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        content_sha256: Option<String>,
        enable: bool,
        active: bool,
    },
}

/// One desired-state record handed to the convergence agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artifact {
    /// Stable identity: a path for filesystem objects, `<instance>-<descriptor>`
    /// for archives and execution steps, the unit name for services.
    pub name: String,
    /// Owning instance; `None` for the shared root directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
    pub ensure: Ensure,
    #[serde(flatten)]
    pub resource: Resource,
}

impl Artifact {
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self.resource {
            Resource::Directory { .. } => "directory",
            Resource::Archive { .. } => "archive",
            Resource::File { .. } => "file",
            Resource::Exec { .. } => "exec",
            Resource::ServiceUnit { .. } => "service_unit",
        }
    }
}

/// Compiled output of one pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Plan {
    pub platform: Platform,
    pub artifacts: Vec<Artifact>,
}

impl Plan {
    /// Artifact with the given name, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Artifact> {
        self.artifacts.iter().find(|a| a.name == name)
    }

    /// Artifacts owned by `instance`, in emission order.
    pub fn for_instance<'a>(&'a self, instance: &'a str) -> impl Iterator<Item = &'a Artifact> {
        self.artifacts
            .iter()
            .filter(move |a| a.instance.as_deref() == Some(instance))
    }
}

// ── Resolution ───────────────────────────────────────────────────────────────

/// Every instance of a manifest resolved against one platform.
#[derive(Debug, Clone)]
pub struct ResolvedManifest {
    pub profile: PlatformProfile,
    pub layout: SharedLayout,
    /// Sorted by instance name.
    pub instances: Vec<ResolvedInstance>,
}

/// Resolves identity once, then every declared instance.
///
/// # Errors
///
/// Returns [`ConfigurationError::MissingIdentity`] when the manifest names
/// neither an organization nor an enterprise. Nothing is resolved in that
/// case, for any instance.
pub fn resolve_manifest(
    manifest: &RunnerManifest,
    platform: Platform,
) -> Result<ResolvedManifest, ConfigurationError> {
    let profile = PlatformProfile::for_platform(platform);
    let global = &manifest.global;
    let identity = resolve_identity(global.org_name.as_deref(), global.enterprise_name.as_deref())?;
    let layout = SharedLayout::resolve(&profile, global);

    let instances = manifest
        .instances
        .iter()
        .map(|(name, instance)| {
            resolve_instance(&profile, global, &identity, &layout, name, instance)
        })
        .collect();

    Ok(ResolvedManifest {
        profile,
        layout,
        instances,
    })
}

/// Compiles a manifest into its ordered artifact plan.
///
/// # Errors
///
/// Fails only when identity resolution fails; see [`resolve_manifest`].
pub fn compile(manifest: &RunnerManifest, platform: Platform) -> Result<Plan, ConfigurationError> {
    Ok(resolve_manifest(manifest, platform)?.plan())
}

impl ResolvedManifest {
    #[must_use]
    pub fn instance(&self, name: &str) -> Option<&ResolvedInstance> {
        self.instances.iter().find(|i| i.name == name)
    }

    /// Shared root directory first, then each instance's artifacts.
    #[must_use]
    pub fn plan(&self) -> Plan {
        let mut artifacts = vec![Artifact {
            name: self.layout.root_path.clone(),
            instance: None,
            ensure: Ensure::Present,
            resource: Resource::Directory {
                path: self.layout.root_path.clone(),
                ownership: Some(self.layout.ownership.with_mode(DIRECTORY_MODE)),
            },
        }];

        for instance in &self.instances {
            let emitted = instance_artifacts(&self.profile, instance);
            debug!(
                instance = %instance.name,
                ensure = %instance.ensure,
                artifacts = emitted.len(),
                "compiled runner instance"
            );
            artifacts.extend(emitted);
        }

        Plan {
            platform: self.profile.platform,
            artifacts,
        }
    }
}

// ── Per-instance artifact sets ───────────────────────────────────────────────

/// Artifacts for one instance in dependency order.
///
/// Present: directory, archive, ownership fix, script, configuration step,
/// service unit. Absent: service unit, script, archive, directory; no
/// execution step is emitted.
#[must_use]
pub fn instance_artifacts(profile: &PlatformProfile, instance: &ResolvedInstance) -> Vec<Artifact> {
    match instance.ensure {
        Ensure::Present => present_artifacts(profile, instance),
        Ensure::Absent => absent_artifacts(profile, instance),
    }
}

struct Names {
    archive: String,
    archive_path: String,
    script_path: String,
    unit: String,
}

impl Names {
    fn new(profile: &PlatformProfile, instance: &ResolvedInstance) -> Self {
        let file_name = instance.package.file_name();
        Self {
            archive: format!("{}-{file_name}", instance.name),
            archive_path: instance.paths.in_instance(&file_name),
            script_path: instance.paths.in_instance(profile.configurator_name),
            unit: unit_name(&instance.name),
        }
    }
}

fn artifact(instance: &ResolvedInstance, name: String, ensure: Ensure, resource: Resource) -> Artifact {
    Artifact {
        name,
        instance: Some(instance.name.clone()),
        ensure,
        resource,
    }
}

fn present_artifacts(profile: &PlatformProfile, instance: &ResolvedInstance) -> Vec<Artifact> {
    let names = Names::new(profile, instance);
    let dir = &instance.paths.instance;
    let owner = &instance.ownership;
    let mut out = Vec::with_capacity(6);

    out.push(artifact(
        instance,
        dir.clone(),
        Ensure::Present,
        Resource::Directory {
            path: dir.clone(),
            ownership: Some(owner.with_mode(DIRECTORY_MODE)),
        },
    ));

    out.push(artifact(
        instance,
        names.archive,
        Ensure::Present,
        Resource::Archive {
            path: names.archive_path,
            source: instance.package.source_url(),
            extract_path: dir.clone(),
            creates: instance.paths.in_instance("bin"),
            ownership: Some(owner.clone()),
        },
    ));

    if profile.fixes_ownership {
        out.push(artifact(
            instance,
            format!("{}-ownership", instance.name),
            Ensure::Present,
            Resource::Exec {
                command: format!("/bin/chown -R {}:{} {dir}", owner.user, owner.group),
                cwd: dir.clone(),
                user: Some(owner.user.clone()),
                interpreter: None,
            },
        ));
    }

    let script = configuration_script(profile, instance);
    out.push(artifact(
        instance,
        names.script_path.clone(),
        Ensure::Present,
        Resource::File {
            path: names.script_path.clone(),
            content_sha256: Some(content_digest(&script)),
            content: Some(script),
            ownership: Some(owner.with_mode(SCRIPT_MODE)),
        },
    ));

    // POSIX runs the script as the owner; the alternative platform has no
    // explicit user and goes through the elevated PowerShell host instead.
    let (user, interpreter) = match profile.dialect {
        ScriptDialect::Bash => (Some(owner.user.clone()), None),
        ScriptDialect::PowerShell => (None, Some(Interpreter::PowerShell)),
    };
    out.push(artifact(
        instance,
        format!("{}-run_configure_install_runner", instance.name),
        Ensure::Present,
        Resource::Exec {
            command: names.script_path,
            cwd: dir.clone(),
            user,
            interpreter,
        },
    ));

    if profile.has_service_unit {
        let unit = systemd_unit(instance);
        out.push(artifact(
            instance,
            names.unit,
            Ensure::Present,
            Resource::ServiceUnit {
                content_sha256: Some(content_digest(&unit)),
                content: Some(unit),
                enable: true,
                active: true,
            },
        ));
    }

    out
}

fn absent_artifacts(profile: &PlatformProfile, instance: &ResolvedInstance) -> Vec<Artifact> {
    let names = Names::new(profile, instance);
    let dir = &instance.paths.instance;
    let mut out = Vec::with_capacity(4);

    if profile.has_service_unit {
        out.push(artifact(
            instance,
            names.unit,
            Ensure::Absent,
            Resource::ServiceUnit {
                content: None,
                content_sha256: None,
                enable: false,
                active: false,
            },
        ));
    }

    out.push(artifact(
        instance,
        names.script_path.clone(),
        Ensure::Absent,
        Resource::File {
            path: names.script_path,
            content: None,
            content_sha256: None,
            ownership: None,
        },
    ));

    out.push(artifact(
        instance,
        names.archive,
        Ensure::Absent,
        Resource::Archive {
            path: names.archive_path,
            source: instance.package.source_url(),
            extract_path: dir.clone(),
            creates: instance.paths.in_instance("bin"),
            ownership: None,
        },
    ));

    out.push(artifact(
        instance,
        dir.clone(),
        Ensure::Absent,
        Resource::Directory {
            path: dir.clone(),
            ownership: None,
        },
    ));

    out
}

// ── Unit tests ───────────────────────────────────────────────────────────────

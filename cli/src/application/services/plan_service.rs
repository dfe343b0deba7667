//! Application service — manifest compilation use-cases.

use anyhow::{Context, Result};
use runner_common::Platform;
use tracing::info;

use crate::application::ports::ConfigStore;
use crate::domain::error::InstanceError;
use crate::domain::{
    Finding, Plan, ResolvedInstance, ResolvedManifest, lint_manifest, resolve_manifest,
};

/// Load the manifest and resolve every instance for `platform`.
///
/// # Errors
///
/// Returns an error if the manifest cannot be loaded or names no identity.
pub fn resolve(store: &impl ConfigStore, platform: Platform) -> Result<ResolvedManifest> {
    let manifest = store.load()?;
    let resolved = resolve_manifest(&manifest, platform).with_context(|| compile_context(store))?;
    info!(
        platform = %platform,
        instances = resolved.instances.len(),
        "resolved runner manifest"
    );
    Ok(resolved)
}

fn compile_context(store: &impl ConfigStore) -> String {
    match store.path() {
        Ok(path) => format!("cannot compile {}", path.display()),
        Err(_) => "cannot compile runner manifest".to_string(),
    }
}

/// Load the manifest and compile its artifact plan.
///
/// # Errors
///
/// Returns an error if the manifest cannot be loaded or names no identity.
pub fn plan(store: &impl ConfigStore, platform: Platform) -> Result<Plan> {
    Ok(resolve(store, platform)?.plan())
}

/// Compile the manifest, then lint it.
///
/// Lint findings never fail the call; only a manifest that cannot be
/// loaded or compiled does.
///
/// # Errors
///
/// Returns an error if the manifest cannot be loaded or names no identity.
pub fn validate(store: &impl ConfigStore, platform: Platform) -> Result<(Plan, Vec<Finding>)> {
    let manifest = store.load()?;
    let plan = resolve_manifest(&manifest, platform)
        .with_context(|| compile_context(store))?
        .plan();
    let findings = lint_manifest(&manifest);
    info!(findings = findings.len(), "linted runner manifest");
    Ok((plan, findings))
}

/// Look up one resolved instance by name.
///
/// # Errors
///
/// Returns [`InstanceError::NotFound`] listing the declared instances.
pub fn find_instance<'a>(
    resolved: &'a ResolvedManifest,
    name: &str,
) -> Result<&'a ResolvedInstance> {
    resolved.instance(name).ok_or_else(|| {
        let declared: Vec<&str> = resolved.instances.iter().map(|i| i.name.as_str()).collect();
        InstanceError::NotFound {
            name: name.to_string(),
            declared: if declared.is_empty() {
                "(none)".to_string()
            } else {
                declared.join(", ")
            },
        }
        .into()
    })
}

//! Application service — export a compiled plan for a convergence agent.
//!
//! The export directory holds `plan.json` plus every rendered file of the
//! plan under `<instance>/<file name>`, each with a `.sha256` digest next
//! to it. Instance names become directory names, so every name is checked
//! before anything is built.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};

use crate::application::ports::{ArtifactWriter, ProgressReporter};
use crate::domain::lint::is_valid_instance_name;
use crate::domain::unit::content_digest;
use crate::domain::{InstanceError, Plan, Resource};

pub const PLAN_FILE: &str = "plan.json";

/// Build the relative path → content map for `plan`.
///
/// # Errors
///
/// Returns [`InstanceError::UnsafeName`] if an instance name would leave the
/// export directory, or an error if the plan cannot be serialized.
pub fn export_files(plan: &Plan) -> Result<BTreeMap<String, String>> {
    if let Some(name) = plan
        .artifacts
        .iter()
        .filter_map(|a| a.instance.as_deref())
        .find(|name| !is_valid_instance_name(name))
    {
        return Err(InstanceError::UnsafeName(name.to_string()).into());
    }

    let mut files = BTreeMap::new();
    let json = serde_json::to_string_pretty(plan).context("cannot serialize plan")?;
    files.insert(PLAN_FILE.to_string(), format!("{json}\n"));

    for artifact in &plan.artifacts {
        let Some(instance) = artifact.instance.as_deref() else {
            continue;
        };
        let (file_name, content) = match &artifact.resource {
            Resource::File {
                path,
                content: Some(content),
                ..
            } => (
                path.rsplit('/').next().unwrap_or(path.as_str()),
                content,
            ),
            Resource::ServiceUnit {
                content: Some(content),
                ..
            } => (artifact.name.as_str(), content),
            _ => continue,
        };
        let rel = format!("{instance}/{file_name}");
        files.insert(format!("{rel}.sha256"), format!("{}\n", content_digest(content)));
        files.insert(rel, content.clone());
    }

    Ok(files)
}

/// Write the export for `plan` into `dir`.
///
/// Returns the number of files written.
///
/// # Errors
///
/// Returns an error if serialization or any write fails.
pub fn export(
    plan: &Plan,
    dir: &Path,
    writer: &impl ArtifactWriter,
    reporter: &impl ProgressReporter,
) -> Result<usize> {
    let files = export_files(plan)?;
    reporter.step(&format!("writing {} files to {}", files.len(), dir.display()));
    writer.write_artifacts(dir, &files)?;
    let absent = plan
        .artifacts
        .iter()
        .filter(|a| !a.ensure.is_present())
        .count();
    if absent > 0 {
        reporter.warn(&format!("{absent} artifacts are marked absent"));
    }
    reporter.success(&format!("exported plan to {}", dir.display()));
    Ok(files.len())
}

//! `ghrunner render` — print one generated file of an instance.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::plan_service;
use crate::domain::InstanceError;
use crate::domain::script::configuration_script;
use crate::domain::unit::{content_digest, systemd_unit, unit_name};
use crate::output::json;

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    /// Instance name as declared in the manifest
    pub instance: String,

    /// Print the service unit instead of the configuration script
    #[arg(long)]
    pub unit: bool,
}

/// Run the render command.
///
/// # Errors
///
/// Returns an error if the manifest does not compile, the instance is not
/// declared or absent, or `--unit` is requested where no unit exists.
pub fn run(app: &AppContext, args: &RenderArgs) -> Result<ExitCode> {
    let resolved = plan_service::resolve(&app.config_store, app.platform)?;
    let instance = plan_service::find_instance(&resolved, &args.instance)?;
    if !instance.ensure.is_present() {
        return Err(InstanceError::Absent(instance.name.clone()).into());
    }

    let (path, content) = if args.unit {
        if !resolved.profile.has_service_unit {
            return Err(InstanceError::NoServiceUnit(instance.name.clone()).into());
        }
        (unit_name(&instance.name), systemd_unit(instance))
    } else {
        (
            instance.paths.in_instance(resolved.profile.configurator_name),
            configuration_script(&resolved.profile, instance),
        )
    };

    if app.is_json() {
        let doc = serde_json::json!({
            "instance": instance.name,
            "path": path,
            "content": content,
            "content_sha256": content_digest(&content),
        });
        println!("{}", json::to_pretty(&doc)?);
    } else {
        print!("{content}");
    }
    Ok(ExitCode::SUCCESS)
}

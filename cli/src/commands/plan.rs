//! `ghrunner plan` — show the compiled artifact plan.

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::plan_service;
use crate::output::{HumanRenderer, json};

/// Run the plan command.
///
/// # Errors
///
/// Returns an error if the manifest cannot be loaded or compiled.
pub fn run(app: &AppContext) -> Result<ExitCode> {
    let plan = plan_service::plan(&app.config_store, app.platform)?;
    if app.is_json() {
        println!("{}", json::to_pretty(&plan)?);
    } else {
        HumanRenderer::new(&app.output).render_plan(&plan);
    }
    Ok(ExitCode::SUCCESS)
}

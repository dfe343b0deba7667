//! `ghrunner validate` — compile the manifest and report lint findings.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::plan_service;
use crate::output::{HumanRenderer, json};

/// Exit status for `--strict` runs that produced findings.
pub const FINDINGS_EXIT: u8 = 2;

/// Arguments for the validate command.
#[derive(Args)]
pub struct ValidateArgs {
    /// Exit with status 2 when any finding is reported
    #[arg(long)]
    pub strict: bool,
}

/// Run the validate command.
///
/// # Errors
///
/// Returns an error if the manifest cannot be loaded or compiled.
pub fn run(app: &AppContext, args: &ValidateArgs) -> Result<ExitCode> {
    let (plan, findings) = plan_service::validate(&app.config_store, app.platform)?;

    if app.is_json() {
        let doc = serde_json::json!({
            "valid": true,
            "artifacts": plan.artifacts.len(),
            "findings": findings,
        });
        println!("{}", json::to_pretty(&doc)?);
    } else {
        HumanRenderer::new(&app.output).render_findings(&findings);
    }

    if args.strict && !findings.is_empty() {
        return Ok(ExitCode::from(FINDINGS_EXIT));
    }
    Ok(ExitCode::SUCCESS)
}

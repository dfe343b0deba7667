//! `ghrunner export` — write the plan and generated files to disk.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::{export_service, plan_service};
use crate::infra::fs::LocalFs;
use crate::output::{SilentReporter, TerminalReporter, json};

/// Arguments for the export command.
#[derive(Args)]
pub struct ExportArgs {
    /// Destination directory, created if missing
    #[arg(long, value_name = "DIR")]
    pub out: PathBuf,
}

/// Run the export command.
///
/// # Errors
///
/// Returns an error if the manifest does not compile or a file cannot be
/// written.
pub fn run(app: &AppContext, args: &ExportArgs) -> Result<ExitCode> {
    let plan = plan_service::plan(&app.config_store, app.platform)?;
    if app.is_json() {
        let files = export_service::export(&plan, &args.out, &LocalFs, &SilentReporter)?;
        let doc = serde_json::json!({
            "out": args.out.display().to_string(),
            "files": files,
            "artifacts": plan.artifacts.len(),
        });
        println!("{}", json::to_pretty(&doc)?);
    } else {
        let reporter = TerminalReporter::new(&app.output);
        export_service::export(&plan, &args.out, &LocalFs, &reporter)?;
    }
    Ok(ExitCode::SUCCESS)
}

//! ghrunner - GitHub Actions self-hosted runner provisioning planner

#![cfg_attr(test, allow(clippy::expect_used))]

use std::process::ExitCode;

use clap::Parser;

use ghrunner_cli::cli::Cli;
use ghrunner_cli::output::json::format_error;

fn main() -> ExitCode {
    ghrunner_cli::logging::init();
    let cli = Cli::parse();
    let json = cli.json;
    match cli.run() {
        Ok(code) => code,
        Err(e) => {
            if json {
                let code = error_code(&e);
                match format_error(&format!("{e:#}"), code) {
                    Ok(doc) => println!("{doc}"),
                    Err(_) => eprintln!("Error: {e:#}"),
                }
            } else {
                eprintln!("Error: {e:#}");
            }
            ExitCode::FAILURE
        }
    }
}

fn error_code(e: &anyhow::Error) -> &'static str {
    use ghrunner_cli::domain::{ConfigurationError, InstanceError};
    if e.downcast_ref::<ConfigurationError>().is_some() {
        "CONFIGURATION_ERROR"
    } else if e.downcast_ref::<InstanceError>().is_some() {
        "INSTANCE_ERROR"
    } else {
        "ERROR"
    }
}

//! CLI argument parsing with clap derive

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use runner_common::Platform;

use crate::app::{AppContext, AppFlags};
use crate::commands;

/// Plan GitHub Actions self-hosted runner installations
#[derive(Parser)]
#[command(
    name = "ghrunner",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Runner manifest to read
    #[arg(long, global = true, env = "GHRUNNER_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Platform to compile for [default: host]
    #[arg(long, global = true, value_enum)]
    pub platform: Option<Platform>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the artifact plan for every instance
    Plan,

    /// Print the generated files of one instance
    Render(commands::render::RenderArgs),

    /// Check the manifest for errors and suspicious settings
    Validate(commands::validate::ValidateArgs),

    /// Write the plan and generated files to a directory
    Export(commands::export::ExportArgs),

    /// Show version
    Version,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub fn run(self) -> Result<ExitCode> {
        let Cli {
            json,
            quiet,
            no_color,
            config,
            platform,
            command,
        } = self;
        let app = AppContext::new(AppFlags {
            no_color,
            quiet,
            json,
            config,
            platform,
        });
        match command {
            Command::Plan => commands::plan::run(&app),
            Command::Render(args) => commands::render::run(&app, &args),
            Command::Validate(args) => commands::validate::run(&app, &args),
            Command::Export(args) => commands::export::run(&app, &args),
            Command::Version => commands::version::run(&app),
        }
    }
}

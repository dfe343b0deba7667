//! Integration tests for ghrunner CLI
//!
//! These tests spawn the actual binary against manifests written to a
//! temporary directory.

mod cli_tests;
mod export_command;
mod plan_command;
mod validate_command;

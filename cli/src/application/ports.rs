//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` and `runner_common` — never
//! from `crate::infra`, `crate::commands`, or `crate::output`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Result;
use runner_common::RunnerManifest;

// ── Configuration Port ────────────────────────────────────────────────────────

/// Abstracts where the runner manifest is read from.
pub trait ConfigStore {
    /// Load and parse the manifest.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest cannot be read or parsed.
    fn load(&self) -> Result<RunnerManifest>;
    /// Location of the manifest, for messages.
    ///
    /// # Errors
    ///
    /// Returns an error if the location cannot be determined.
    fn path(&self) -> Result<PathBuf>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait — no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}

// ── Filesystem Port ───────────────────────────────────────────────────────────

/// Abstracts writing exported artifact files to the local filesystem.
pub trait ArtifactWriter {
    /// Write `files` (relative path → content) below `dir`, creating
    /// intermediate directories.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory or file cannot be written.
    fn write_artifacts(&self, dir: &Path, files: &BTreeMap<String, String>) -> Result<()>;
}

//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `std::fs`, `std::process`, or `std::net`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use thiserror::Error;

// ── Configuration errors ──────────────────────────────────────────────────────

/// Fatal errors raised while resolving the desired-state manifest.
///
/// Any of these aborts the whole compilation pass: no artifact is emitted
/// for any instance.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("Either 'org_name' or 'enterprise_name' is required to create runner instances")]
    MissingIdentity,
}

// ── Lookup errors ─────────────────────────────────────────────────────────────

/// Errors raised by commands that address a single instance.
#[derive(Debug, Error)]
pub enum InstanceError {
    #[error("Instance '{name}' not found. Declared instances: {declared}")]
    NotFound { name: String, declared: String },

    #[error("Instance '{0}' has no service unit on this platform.")]
    NoServiceUnit(String),

    #[error("Instance '{0}' is absent; nothing is rendered for it.")]
    Absent(String),

    #[error(
        "Instance name '{0}' cannot be used as a directory name. Use letters, digits, '_', '.' or '-'."
    )]
    UnsafeName(String),
}

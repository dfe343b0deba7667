//! Domain layer — pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod error;
pub mod identity;
pub mod lifecycle;
pub mod lint;
pub mod paths;
pub mod platform;
pub mod proxy;
pub mod resolve;
pub mod script;
pub mod unit;

pub use error::{ConfigurationError, InstanceError};
pub use identity::{IdentityScope, resolve_identity};
pub use lifecycle::{Artifact, Plan, ResolvedManifest, Resource, compile, resolve_manifest};
pub use lint::{Finding, lint_manifest};
pub use platform::PlatformProfile;
pub use resolve::{Endpoint, OwnershipSpec, ResolvedInstance};

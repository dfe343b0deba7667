pub mod manifest;
pub mod types;

pub use manifest::{GlobalConfig, InstanceConfig, RunnerManifest};
pub use types::{Ensure, Platform};

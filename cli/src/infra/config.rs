//! Infrastructure implementation of the `ConfigStore` port.

use anyhow::{Context, Result};
use runner_common::RunnerManifest;
use std::path::PathBuf;

use crate::application::ports::ConfigStore;

/// Environment variable overriding the manifest location.
pub const CONFIG_ENV: &str = "GHRUNNER_CONFIG";

/// Production implementation of `ConfigStore` that reads a YAML file on disk.
///
/// Location precedence: explicit path, then `GHRUNNER_CONFIG`, then
/// `~/.ghrunner/runners.yaml`.
#[derive(Debug, Default, Clone)]
pub struct YamlConfigStore {
    explicit: Option<PathBuf>,
}

impl YamlConfigStore {
    #[must_use]
    pub fn new(explicit: Option<PathBuf>) -> Self {
        Self { explicit }
    }
}

impl ConfigStore for YamlConfigStore {
    fn load(&self) -> Result<RunnerManifest> {
        let path = self.path()?;
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loading runner manifest");
        serde_yaml::from_str(&content).with_context(|| format!("cannot parse {}", path.display()))
    }

    fn path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.explicit {
            return Ok(path.clone());
        }
        if let Ok(val) = std::env::var(CONFIG_ENV) {
            return Ok(PathBuf::from(val));
        }
        let home =
            dirs::home_dir().ok_or_else(|| anyhow::anyhow!("cannot determine home directory"))?;
        Ok(home.join(".ghrunner").join("runners.yaml"))
    }
}

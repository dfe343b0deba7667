//! Filesystem infrastructure — implements `ArtifactWriter`.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};

use crate::application::ports::ArtifactWriter;

/// Production filesystem implementation of `ArtifactWriter`.
pub struct LocalFs;

impl ArtifactWriter for LocalFs {
    fn write_artifacts(&self, dir: &Path, files: &BTreeMap<String, String>) -> Result<()> {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating export dir {}", dir.display()))?;
        for (rel, content) in files {
            let path = dir.join(rel);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("creating directory {}", parent.display()))?;
            }
            std::fs::write(&path, content)
                .with_context(|| format!("writing artifact {}", path.display()))?;
            tracing::debug!(path = %path.display(), bytes = content.len(), "wrote artifact");
        }
        Ok(())
    }
}

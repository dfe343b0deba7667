//! Proxy settings overlay.
//!
//! Pure functions only — no I/O.

use runner_common::{GlobalConfig, InstanceConfig};

/// Proxy settings after the instance overlay has been applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProxySettings {
    pub http_proxy: Option<String>,
    pub https_proxy: Option<String>,
    pub no_proxy: Option<String>,
}

/// Instance value if set, otherwise the global value.
fn overlay(instance: Option<&String>, global: Option<&String>) -> Option<String> {
    instance.or(global).cloned()
}

impl ProxySettings {
    /// Merges each field independently: the instance value wins, then the
    /// global one, otherwise the field stays unset.
    #[must_use]
    pub fn resolve(global: &GlobalConfig, instance: &InstanceConfig) -> Self {
        Self {
            http_proxy: overlay(instance.http_proxy.as_ref(), global.http_proxy.as_ref()),
            https_proxy: overlay(instance.https_proxy.as_ref(), global.https_proxy.as_ref()),
            no_proxy: overlay(instance.no_proxy.as_ref(), global.no_proxy.as_ref()),
        }
    }

    /// Environment assignments for every field that is set, in a fixed order.
    #[must_use]
    pub fn env_pairs(&self) -> Vec<(&'static str, &str)> {
        [
            ("http_proxy", self.http_proxy.as_deref()),
            ("https_proxy", self.https_proxy.as_deref()),
            ("no_proxy", self.no_proxy.as_deref()),
        ]
        .into_iter()
        .filter_map(|(k, v)| v.map(|v| (k, v)))
        .collect()
    }
}

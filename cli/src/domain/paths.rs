//! Install path derivation. Deterministic string composition, no filesystem
//! lookups.

/// Versioned root directory shared by all instances: `<base_dir_name>-<version>`.
#[must_use]
pub fn root_path(base_dir_name: &str, version: &str) -> String {
    format!("{base_dir_name}-{version}")
}

/// Directory owned by one instance: `<root_path>/<instance_name>`.
#[must_use]
pub fn instance_path(root_path: &str, instance_name: &str) -> String {
    format!("{root_path}/{instance_name}")
}

/// Paths computed for one instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallPaths {
    pub root: String,
    pub instance: String,
}

impl InstallPaths {
    #[must_use]
    pub fn new(base_dir_name: &str, version: &str, instance_name: &str) -> Self {
        let root = root_path(base_dir_name, version);
        let instance = instance_path(&root, instance_name);
        Self { root, instance }
    }

    /// A file directly inside the instance directory.
    #[must_use]
    pub fn in_instance(&self, file_name: &str) -> String {
        format!("{}/{file_name}", self.instance)
    }
}

//! Platform capability profiles.
//!
//! The platform is picked once at the top of a compilation pass; every
//! OS-specific decision afterwards reads the selected profile instead of
//! branching on the OS again.

use runner_common::Platform;

/// Default runner version when the manifest does not pin one.
pub const DEFAULT_VERSION: &str = "2.272.0";
/// Release download location for the official runner archives.
pub const DEFAULT_REPOSITORY_URL: &str = "https://github.com/actions/runner/releases/download";

/// Script dialect used for the configuration script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptDialect {
    Bash,
    PowerShell,
}

/// Everything the compiler needs to know about the target OS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformProfile {
    pub platform: Platform,
    pub default_base_dir: &'static str,
    pub default_owner: &'static str,
    pub default_package_name: &'static str,
    pub default_package_extension: &'static str,
    /// File name of the configuration script inside the instance directory.
    pub configurator_name: &'static str,
    /// Runner-provided registration tool inside the instance directory.
    pub config_tool: &'static str,
    pub dialect: ScriptDialect,
    /// Whether a systemd unit is managed for each instance.
    pub has_service_unit: bool,
    /// Whether a recursive ownership fix runs after extraction.
    pub fixes_ownership: bool,
}

const LINUX: PlatformProfile = PlatformProfile {
    platform: Platform::Linux,
    default_base_dir: "/opt/actions-runner",
    default_owner: "root",
    default_package_name: "actions-runner-linux-x64",
    default_package_extension: "tar.gz",
    configurator_name: "configure_install_runner.sh",
    config_tool: "config.sh",
    dialect: ScriptDialect::Bash,
    has_service_unit: true,
    fixes_ownership: true,
};

const WINDOWS: PlatformProfile = PlatformProfile {
    platform: Platform::Windows,
    default_base_dir: "C:/actions-runner",
    default_owner: "Administrator",
    default_package_name: "actions-runner-win-x64",
    default_package_extension: "zip",
    configurator_name: "configure_install_runner.ps1",
    config_tool: "config.cmd",
    dialect: ScriptDialect::PowerShell,
    has_service_unit: false,
    fixes_ownership: false,
};

impl PlatformProfile {
    #[must_use]
    pub fn for_platform(platform: Platform) -> Self {
        match platform {
            Platform::Linux => LINUX,
            Platform::Windows => WINDOWS,
        }
    }
}

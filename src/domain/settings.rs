//! Settings file domain models.

use std::path::PathBuf;

use serde::Deserialize;

use super::AppError;

/// Site-wide defaults loaded from the optional settings file.
///
/// Every value is optional; command-line arguments take precedence and
/// OS-derived defaults fill whatever is left.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Defaults for virtual host fields.
    #[serde(default)]
    pub defaults: DefaultSettings,
    /// Platform overrides that skip detection.
    #[serde(default)]
    pub platform: PlatformSettings,
    /// Installation target overrides.
    #[serde(default)]
    pub install: InstallSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DefaultSettings {
    pub bind_address: Option<String>,
    pub http_port: Option<u16>,
    pub https_port: Option<u16>,
    pub log_directory: Option<PathBuf>,
    /// Base directory for generated document roots.
    pub vhosts_root: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlatformSettings {
    /// `redhat` or `debian`.
    pub os_family: Option<String>,
    /// Apache release, e.g. `2.4`.
    pub apache_version: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InstallSettings {
    /// Directory receiving `{server_name}.conf`.
    pub vhost_dir: Option<PathBuf>,
}

impl Settings {
    /// Parse settings from TOML text.
    pub fn parse(content: &str) -> Result<Settings, AppError> {
        Ok(toml::from_str(content)?)
    }
}

//! Settings file loading.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::{AppError, Settings};

/// Environment variable naming an alternate settings file.
pub const SETTINGS_ENV: &str = "VHOSTGEN_CONFIG";

/// Settings file consulted when nothing else is specified.
pub const DEFAULT_SETTINGS_PATH: &str = "/etc/vhostgen/config.toml";

/// Load settings from `explicit`, then `$VHOSTGEN_CONFIG`, then the default path.
///
/// An explicitly named file must exist; a missing default file yields empty
/// settings.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings, AppError> {
    let from_env = std::env::var_os(SETTINGS_ENV).map(PathBuf::from);
    match explicit.map(Path::to_path_buf).or(from_env) {
        Some(path) => read_settings(&path),
        None => {
            let path = Path::new(DEFAULT_SETTINGS_PATH);
            if path.is_file() { read_settings(path) } else { Ok(Settings::default()) }
        }
    }
}

fn read_settings(path: &Path) -> Result<Settings, AppError> {
    if !path.is_file() {
        return Err(AppError::SettingsMissing(path.to_path_buf()));
    }
    debug!(path = %path.display(), "loading settings");
    let content = fs::read_to_string(path)?;
    Settings::parse(&content)
}

//! Platform facts read from the running host.

use std::fs;
use std::path::PathBuf;

use tracing::{debug, warn};

use super::command::run_command;
use crate::domain::{AppError, ApacheDialect, Distribution, OsFamily};
use crate::ports::PlatformInfo;

const OS_RELEASE: &str = "/etc/os-release";

/// [`PlatformInfo`] backed by `/etc/os-release` and the Apache control binary.
#[derive(Debug, Clone)]
pub struct SystemPlatform {
    os_release: PathBuf,
}

impl SystemPlatform {
    pub fn new() -> Self {
        Self::with_os_release(OS_RELEASE)
    }

    /// Read distribution facts from a custom os-release file.
    pub fn with_os_release(path: impl Into<PathBuf>) -> Self {
        Self { os_release: path.into() }
    }
}

impl Default for SystemPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformInfo for SystemPlatform {
    fn distribution(&self) -> Result<Distribution, AppError> {
        let content = fs::read_to_string(&self.os_release).map_err(|e| {
            AppError::PlatformDetection(format!("cannot read {}: {}", self.os_release.display(), e))
        })?;
        let distribution = Distribution::from_os_release(&content);
        debug!(id = %distribution.id, family = %distribution.family(), "detected distribution");
        Ok(distribution)
    }

    fn apache_dialect(&self, family: OsFamily) -> Result<ApacheDialect, AppError> {
        let output = run_command(family.apache_binary(), &["-v"])?;
        let dialect = ApacheDialect::from_version_output(&output)?;
        debug!(%dialect, "detected apache dialect");
        Ok(dialect)
    }

    fn apache_root(&self, family: OsFamily) -> Result<PathBuf, AppError> {
        let output = run_command(family.apache_binary(), &["-V"])?;
        match parse_httpd_root(&output) {
            Some(root) => Ok(root),
            None => {
                let fallback = family.default_apache_root();
                warn!(root = %fallback.display(), "apache did not report HTTPD_ROOT, using default");
                Ok(fallback)
            }
        }
    }
}

/// Extract `HTTPD_ROOT` from `apachectl -V` output.
///
/// The value is reduced to path-safe characters.
pub fn parse_httpd_root(output: &str) -> Option<PathBuf> {
    let line = output.lines().find(|line| line.contains("HTTPD_ROOT"))?;
    let (_, value) = line.split_once('=')?;
    let root: String = value
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '/' | '.'))
        .collect();

    if root.is_empty() { None } else { Some(PathBuf::from(root)) }
}

use std::path::PathBuf;

use crate::domain::{AppError, ApacheDialect, Distribution, OsFamily};

/// Port supplying facts about the host platform.
///
/// The template engine never probes the system itself; callers resolve these
/// facts up front and pass them in through [`crate::domain::VHostConfig`].
pub trait PlatformInfo {
    /// Distribution identity of the host.
    fn distribution(&self) -> Result<Distribution, AppError>;

    /// Packaging family of the host.
    fn os_family(&self) -> Result<OsFamily, AppError> {
        Ok(self.distribution()?.family())
    }

    /// Authorization dialect of the Apache server managed the `family` way.
    fn apache_dialect(&self, family: OsFamily) -> Result<ApacheDialect, AppError>;

    /// Server root reported by the `family` control binary (`HTTPD_ROOT`).
    fn apache_root(&self, family: OsFamily) -> Result<PathBuf, AppError>;
}

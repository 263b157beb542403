//! Report detected platform facts.

use std::path::PathBuf;

use serde::Serialize;
use tracing::warn;

use crate::app::AppContext;
use crate::app::resolve::{VHostRequest, resolve_dialect, resolve_os_family};
use crate::domain::{AppError, ApacheDialect, Distribution, OsFamily};
use crate::ports::{PlatformInfo, ServiceControl, SiteStore};

#[derive(Debug, Clone, Serialize)]
pub struct PlatformReport {
    pub os_family: OsFamily,
    pub distribution: Option<Distribution>,
    pub apache_dialect: Option<ApacheDialect>,
    pub apache_root: Option<PathBuf>,
    pub vhost_dir: Option<PathBuf>,
}

/// Collect platform facts, honouring settings-file overrides.
///
/// Only the OS family is mandatory; facts that need a running Apache are
/// reported as unknown when it cannot be queried.
pub fn execute<P, S, C>(ctx: &AppContext<P, S, C>) -> Result<PlatformReport, AppError>
where
    P: PlatformInfo,
    S: SiteStore,
    C: ServiceControl,
{
    let request = VHostRequest::default();
    let settings = ctx.settings();
    let platform = ctx.platform();

    let os_family = resolve_os_family(&request, settings, platform)?;
    let distribution = known(platform.distribution(), "distribution");
    let apache_dialect =
        known(resolve_dialect(&request, settings, platform, os_family), "apache dialect");
    let apache_root = known(platform.apache_root(os_family), "apache root");
    let vhost_dir = settings
        .install
        .vhost_dir
        .clone()
        .or_else(|| apache_root.as_ref().map(|root| root.join(os_family.vhost_dir_name())));

    Ok(PlatformReport { os_family, distribution, apache_dialect, apache_root, vhost_dir })
}

fn known<T>(result: Result<T, AppError>, what: &str) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(error = %err, "could not determine {}", what);
            None
        }
    }
}

impl PlatformReport {
    /// Human-readable summary, one fact per line.
    pub fn to_text(&self) -> String {
        fn or_unknown(value: Option<String>) -> String {
            value.unwrap_or_else(|| "unknown".to_string())
        }

        let distribution = self.distribution.as_ref();
        [
            format!("OS Family: {}", self.os_family),
            format!("OS Distribution: {}", or_unknown(distribution.map(|d| d.id.clone()))),
            format!(
                "OS Release Version: {}",
                or_unknown(distribution.and_then(|d| d.version.clone()))
            ),
            format!("Apache Version: {}", or_unknown(self.apache_dialect.map(|d| d.to_string()))),
            format!(
                "Apache Configuration Base: {}",
                or_unknown(self.apache_root.as_ref().map(|p| p.display().to_string()))
            ),
            format!(
                "Apache Vhost Configuration Directory: {}",
                or_unknown(self.vhost_dir.as_ref().map(|p| p.display().to_string()))
            ),
        ]
        .join("\n")
    }
}

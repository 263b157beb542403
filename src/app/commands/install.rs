//! Install a rendered virtual host into the Apache configuration tree.

use std::path::PathBuf;

use tracing::info;

use crate::app::AppContext;
use crate::app::resolve::{VHostRequest, resolve};
use crate::domain::{AppError, OsFamily, vhost_template};
use crate::ports::{PlatformInfo, ServiceControl, SiteStore};

/// Line `httpd.conf` needs before Red-Hat `vhost.d` sites are loaded.
pub const VHOST_INCLUDE: &str = "Include vhost.d/*.conf";

#[derive(Debug, Clone, Default)]
pub struct InstallOptions {
    /// Target directory; derived from the Apache root when absent.
    pub vhost_dir: Option<PathBuf>,
    /// Replace an existing `{server_name}.conf`.
    pub force: bool,
    /// Enable the site and gracefully reload Apache afterwards.
    pub reload: bool,
}

#[derive(Debug, Clone)]
pub struct InstallOutcome {
    pub server_name: String,
    pub config_path: PathBuf,
    pub document_root: PathBuf,
    pub document_root_created: bool,
    /// Main server config that received [`VHOST_INCLUDE`].
    pub include_added_to: Option<PathBuf>,
    pub reloaded: bool,
}

enum VHostDir {
    Explicit(PathBuf),
    UnderApacheRoot { root: PathBuf, dir: PathBuf },
}

impl VHostDir {
    fn path(&self) -> &PathBuf {
        match self {
            VHostDir::Explicit(dir) => dir,
            VHostDir::UnderApacheRoot { dir, .. } => dir,
        }
    }
}

pub fn execute<P, S, C>(
    ctx: &AppContext<P, S, C>,
    request: &VHostRequest,
    options: &InstallOptions,
) -> Result<InstallOutcome, AppError>
where
    P: PlatformInfo,
    S: SiteStore,
    C: ServiceControl,
{
    let config = resolve(request, ctx.settings(), ctx.platform())?;
    let text = vhost_template::render(&config)?;
    let sites = ctx.sites();

    let explicit_dir =
        options.vhost_dir.clone().or_else(|| ctx.settings().install.vhost_dir.clone());
    let target = match explicit_dir {
        Some(dir) => VHostDir::Explicit(dir),
        None => {
            let root = ctx.platform().apache_root(config.os_family)?;
            let dir = root.join(config.os_family.vhost_dir_name());
            VHostDir::UnderApacheRoot { root, dir }
        }
    };

    let config_path = target.path().join(config.file_name());
    if sites.exists(&config_path) && !options.force {
        return Err(AppError::SiteExists(config_path));
    }

    sites.ensure_dir(target.path())?;
    let include_added_to = match (&target, config.os_family) {
        (VHostDir::UnderApacheRoot { root, .. }, OsFamily::RedHat) => {
            let httpd_conf = root.join("conf").join("httpd.conf");
            if sites.contains_line(&httpd_conf, VHOST_INCLUDE)? {
                None
            } else {
                sites.append_line(&httpd_conf, VHOST_INCLUDE)?;
                Some(httpd_conf)
            }
        }
        _ => None,
    };

    sites.write_file(&config_path, &text)?;
    info!(path = %config_path.display(), "installed virtual host");

    let document_root_created = sites.ensure_dir(&config.document_root)?;

    if options.reload {
        ctx.service().enable_site(config.os_family, &config.server_name)?;
        ctx.service().graceful_reload(config.os_family)?;
    }

    Ok(InstallOutcome {
        server_name: config.server_name,
        config_path,
        document_root: config.document_root,
        document_root_created,
        include_added_to,
        reloaded: options.reload,
    })
}

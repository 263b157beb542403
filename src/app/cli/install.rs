//! Install command implementation.

use std::path::{Path, PathBuf};

use super::VHostArgs;
use crate::app::api::InstallOptions;
use crate::domain::AppError;

pub(super) fn run_install(
    vhost: VHostArgs,
    vhost_dir: Option<PathBuf>,
    force: bool,
    reload: bool,
    settings_path: Option<&Path>,
) -> Result<(), AppError> {
    let options = InstallOptions { vhost_dir, force, reload };
    let outcome = crate::app::api::install(&vhost.into_request(), &options, settings_path)?;

    println!("✅ Installed {} at {}", outcome.server_name, outcome.config_path.display());
    if let Some(httpd_conf) = &outcome.include_added_to {
        println!("  Added vhost.d include to {}", httpd_conf.display());
    }
    if outcome.document_root_created {
        println!("  Created document root {}", outcome.document_root.display());
    }
    if outcome.reloaded {
        println!("  Reloaded Apache");
    }
    Ok(())
}

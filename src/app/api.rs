//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::Path;

use crate::adapters::settings_file::load_settings;
use crate::adapters::{ApacheServiceControl, FilesystemSiteStore, SystemPlatform};
use crate::app::{
    AppContext,
    commands::{install, platform, render},
};

pub use crate::app::commands::install::{InstallOptions, InstallOutcome};
pub use crate::app::commands::platform::PlatformReport;
pub use crate::app::commands::render::RenderOutcome;
pub use crate::app::resolve::VHostRequest;
pub use crate::domain::AppError;

type SystemContext = AppContext<SystemPlatform, FilesystemSiteStore, ApacheServiceControl>;

/// Create an `AppContext` backed by the running host.
fn create_context(settings_path: Option<&Path>) -> Result<SystemContext, AppError> {
    let settings = load_settings(settings_path)?;
    Ok(AppContext::new(
        settings,
        SystemPlatform::new(),
        FilesystemSiteStore::new(),
        ApacheServiceControl::new(),
    ))
}

/// Render a virtual host without installing it.
pub fn render(
    request: &VHostRequest,
    settings_path: Option<&Path>,
) -> Result<RenderOutcome, AppError> {
    let ctx = create_context(settings_path)?;
    render::execute(&ctx, request)
}

/// Render and install a virtual host, optionally reloading Apache.
pub fn install(
    request: &VHostRequest,
    options: &InstallOptions,
    settings_path: Option<&Path>,
) -> Result<InstallOutcome, AppError> {
    let ctx = create_context(settings_path)?;
    install::execute(&ctx, request, options)
}

/// Detect platform facts.
pub fn platform(settings_path: Option<&Path>) -> Result<PlatformReport, AppError> {
    let ctx = create_context(settings_path)?;
    platform::execute(&ctx)
}

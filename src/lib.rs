//! vhostgen: generate and install Apache virtual host configuration.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;


pub use app::api::{
    InstallOptions, InstallOutcome, PlatformReport, RenderOutcome, VHostRequest, install, platform,
};
pub use app::resolve::resolve;
pub use domain::vhost_template::render;
pub use domain::{AppError, ApacheDialect, OsFamily, Settings, VHostConfig};

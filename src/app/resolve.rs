//! Configuration resolver.
//!
//! Layers command-line values over the settings file and OS-derived
//! defaults, producing a validated [`VHostConfig`].

use std::path::PathBuf;

use tracing::{debug, warn};

use crate::domain::vhost_config::{
    DEFAULT_BIND_ADDRESS, DEFAULT_HTTP_PORT, DEFAULT_HTTPS_PORT, DEFAULT_VHOSTS_ROOT,
    default_aliases, default_document_root,
};
use crate::domain::{AppError, ApacheDialect, OsFamily, Settings, VHostConfig};
use crate::ports::PlatformInfo;

/// Raw virtual host values as supplied by the caller.
///
/// `None` means "not supplied". `server_aliases: Some(vec![])` is an explicit
/// empty list and suppresses the `www.` default.
#[derive(Debug, Clone, Default)]
pub struct VHostRequest {
    pub server_name: Option<String>,
    pub server_aliases: Option<Vec<String>>,
    pub document_root: Option<PathBuf>,
    pub bind_address: Option<String>,
    pub http_port: Option<u16>,
    pub https_port: Option<u16>,
    pub log_directory: Option<PathBuf>,
    pub enable_ssl: bool,
    pub ssl_certificate_file: Option<PathBuf>,
    pub ssl_certificate_key_file: Option<PathBuf>,
    pub ssl_certificate_ca_file: Option<PathBuf>,
    pub os_family: Option<String>,
    pub apache_version: Option<String>,
}

impl VHostRequest {
    pub fn for_server(server_name: impl Into<String>) -> Self {
        Self { server_name: Some(server_name.into()), ..Self::default() }
    }
}

/// Resolve a request into a validated configuration.
///
/// The platform is probed only for facts that neither the request nor the
/// settings file provide.
pub fn resolve(
    request: &VHostRequest,
    settings: &Settings,
    platform: &impl PlatformInfo,
) -> Result<VHostConfig, AppError> {
    let server_name = request
        .server_name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or(AppError::MissingRequiredField("server_name"))?
        .to_string();

    let (ssl_certificate_file, ssl_certificate_key_file, ssl_certificate_ca_file) =
        resolve_ssl(request)?;

    let os_family = resolve_os_family(request, settings, platform)?;
    let apache_dialect = resolve_dialect(request, settings, platform, os_family)?;
    let defaults = &settings.defaults;

    let vhosts_root =
        defaults.vhosts_root.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_VHOSTS_ROOT));

    let config = VHostConfig {
        server_aliases: request
            .server_aliases
            .clone()
            .unwrap_or_else(|| default_aliases(&server_name)),
        document_root: request
            .document_root
            .clone()
            .unwrap_or_else(|| default_document_root(&vhosts_root, &server_name)),
        bind_address: request
            .bind_address
            .clone()
            .or_else(|| defaults.bind_address.clone())
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
        http_port: request.http_port.or(defaults.http_port).unwrap_or(DEFAULT_HTTP_PORT),
        https_port: request.https_port.or(defaults.https_port).unwrap_or(DEFAULT_HTTPS_PORT),
        log_directory: request
            .log_directory
            .clone()
            .or_else(|| defaults.log_directory.clone())
            .unwrap_or_else(|| os_family.default_log_directory()),
        enable_ssl: request.enable_ssl,
        ssl_certificate_file,
        ssl_certificate_key_file,
        ssl_certificate_ca_file,
        apache_dialect,
        os_family,
        server_name,
    };

    config.validate()?;
    debug!(?config, "resolved virtual host");
    Ok(config)
}

type SslFiles = (Option<PathBuf>, Option<PathBuf>, Option<PathBuf>);

fn resolve_ssl(request: &VHostRequest) -> Result<SslFiles, AppError> {
    let files = (
        request.ssl_certificate_file.clone(),
        request.ssl_certificate_key_file.clone(),
        request.ssl_certificate_ca_file.clone(),
    );

    if request.enable_ssl {
        if files.0.is_none() || files.1.is_none() {
            return Err(AppError::ssl_error(
                "enabling SSL requires both a certificate file and a certificate key file",
            ));
        }
        return Ok(files);
    }

    if files.0.is_some() || files.1.is_some() || files.2.is_some() {
        warn!("certificate files were supplied without enabling SSL, ignoring them");
    }
    Ok((None, None, None))
}

/// OS family from the request, then the settings file, then the platform.
pub fn resolve_os_family(
    request: &VHostRequest,
    settings: &Settings,
    platform: &impl PlatformInfo,
) -> Result<OsFamily, AppError> {
    match request.os_family.as_deref().or(settings.platform.os_family.as_deref()) {
        Some(name) => name.parse(),
        None => platform.os_family(),
    }
}

/// Apache dialect from the request, then the settings file, then the
/// platform's `os_family` control binary.
pub fn resolve_dialect(
    request: &VHostRequest,
    settings: &Settings,
    platform: &impl PlatformInfo,
    os_family: OsFamily,
) -> Result<ApacheDialect, AppError> {
    match request.apache_version.as_deref().or(settings.platform.apache_version.as_deref()) {
        Some(version) => version.parse(),
        None => platform.apache_dialect(os_family),
    }
}

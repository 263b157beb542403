//! Resolved virtual host record.

use std::path::{Path, PathBuf};

use super::{AppError, ApacheDialect, OsFamily};

pub const DEFAULT_BIND_ADDRESS: &str = "*";
pub const DEFAULT_HTTP_PORT: u16 = 80;
pub const DEFAULT_HTTPS_PORT: u16 = 443;
pub const DEFAULT_VHOSTS_ROOT: &str = "/var/www/vhosts";

/// Fully-resolved input to the template engine.
///
/// Built once per invocation by the configuration resolver and never mutated
/// while rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VHostConfig {
    pub server_name: String,
    pub server_aliases: Vec<String>,
    pub document_root: PathBuf,
    pub bind_address: String,
    pub http_port: u16,
    pub https_port: u16,
    pub log_directory: PathBuf,
    pub enable_ssl: bool,
    pub ssl_certificate_file: Option<PathBuf>,
    pub ssl_certificate_key_file: Option<PathBuf>,
    pub ssl_certificate_ca_file: Option<PathBuf>,
    pub apache_dialect: ApacheDialect,
    pub os_family: OsFamily,
}

impl VHostConfig {
    /// Config for `server_name` with every optional field at its default.
    pub fn new(
        server_name: impl Into<String>,
        os_family: OsFamily,
        apache_dialect: ApacheDialect,
    ) -> Self {
        let server_name = server_name.into();
        Self {
            server_aliases: default_aliases(&server_name),
            document_root: default_document_root(Path::new(DEFAULT_VHOSTS_ROOT), &server_name),
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            http_port: DEFAULT_HTTP_PORT,
            https_port: DEFAULT_HTTPS_PORT,
            log_directory: os_family.default_log_directory(),
            enable_ssl: false,
            ssl_certificate_file: None,
            ssl_certificate_key_file: None,
            ssl_certificate_ca_file: None,
            apache_dialect,
            os_family,
            server_name,
        }
    }

    /// Check the record invariants.
    ///
    /// `server_name` must be a plain host name since it becomes a file name
    /// and a log file prefix. Aliases and the bind address are single Apache
    /// tokens. SSL must be enabled exactly when both a certificate and a key
    /// are present.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.server_name.trim().is_empty() {
            return Err(AppError::MissingRequiredField("server_name"));
        }
        if !is_host_name(&self.server_name) {
            return Err(invalid(
                "server_name",
                format!("'{}' is not a valid host name", self.server_name.escape_debug()),
            ));
        }

        for alias in &self.server_aliases {
            if !is_token(alias) {
                return Err(invalid(
                    "server_alias",
                    format!("'{}' must be a single non-empty word", alias.escape_debug()),
                ));
            }
        }
        if !is_token(&self.bind_address) {
            return Err(invalid(
                "bind_address",
                format!("'{}' must be a single non-empty word", self.bind_address.escape_debug()),
            ));
        }

        let paths = [
            ("document_root", Some(&self.document_root)),
            ("log_directory", Some(&self.log_directory)),
            ("ssl_certificate_file", self.ssl_certificate_file.as_ref()),
            ("ssl_certificate_key_file", self.ssl_certificate_key_file.as_ref()),
            ("ssl_certificate_ca_file", self.ssl_certificate_ca_file.as_ref()),
        ];
        for (field, path) in paths.into_iter().filter_map(|(f, p)| p.map(|p| (f, p))) {
            if path.to_string_lossy().chars().any(char::is_control) {
                return Err(invalid(field, "control characters are not allowed".to_string()));
            }
        }

        let has_pair =
            self.ssl_certificate_file.is_some() && self.ssl_certificate_key_file.is_some();
        if self.enable_ssl {
            if self.ssl_certificate_file.is_none() {
                return Err(AppError::ssl_error("SSL is enabled but no certificate file was given"));
            }
            if self.ssl_certificate_key_file.is_none() {
                return Err(AppError::ssl_error(
                    "SSL is enabled but no certificate key file was given",
                ));
            }
        } else if has_pair {
            return Err(AppError::ssl_error("certificate files were given but SSL is not enabled"));
        }

        Ok(())
    }

    /// Aliases joined the way `ServerAlias` expects them.
    pub fn server_alias_line(&self) -> String {
        self.server_aliases.join(" ")
    }

    /// File name of the installed configuration (`{server_name}.conf`).
    pub fn file_name(&self) -> String {
        format!("{}.conf", self.server_name)
    }
}

fn invalid(field: &'static str, reason: String) -> AppError {
    AppError::InvalidField { field, reason }
}

/// Letters, digits, `-`, `_` and `.`, not starting with a dot.
fn is_host_name(name: &str) -> bool {
    !name.starts_with('.')
        && name.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

fn is_token(value: &str) -> bool {
    !value.is_empty() && !value.chars().any(|c| c.is_whitespace() || c.is_control())
}

/// Alias list used when none was supplied.
pub fn default_aliases(server_name: &str) -> Vec<String> {
    vec![format!("www.{}", server_name)]
}

/// `{vhosts_root}/{server_name}/httpdocs`
pub fn default_document_root(vhosts_root: &Path, server_name: &str) -> PathBuf {
    vhosts_root.join(server_name).join("httpdocs")
}

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::Serialize;

use super::AppError;

/// Packaging and filesystem layout convention of the host operating system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OsFamily {
    /// RHEL, CentOS, Fedora and friends (`httpd`).
    RedHat,
    /// Debian, Ubuntu and derivatives (`apache2`).
    Debian,
}

impl OsFamily {
    pub const ALL: [OsFamily; 2] = [OsFamily::RedHat, OsFamily::Debian];

    /// Canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            OsFamily::RedHat => "redhat",
            OsFamily::Debian => "debian",
        }
    }

    /// Classify a distribution identifier such as `ubuntu` or `centos`.
    ///
    /// Only Debian-like identifiers map to [`OsFamily::Debian`]; everything
    /// else is treated as Red-Hat-like.
    pub fn from_distribution(id: &str) -> OsFamily {
        match id.trim().to_lowercase().as_str() {
            "debian" | "ubuntu" | "linuxmint" | "raspbian" => OsFamily::Debian,
            _ => OsFamily::RedHat,
        }
    }

    /// Default directory for per-site access and error logs.
    pub fn default_log_directory(&self) -> PathBuf {
        match self {
            OsFamily::RedHat => PathBuf::from("/var/log/httpd"),
            OsFamily::Debian => PathBuf::from("/var/log/apache2"),
        }
    }

    /// Name of the Apache control binary.
    pub fn apache_binary(&self) -> &'static str {
        match self {
            OsFamily::RedHat => "apachectl",
            OsFamily::Debian => "apache2ctl",
        }
    }

    /// Directory under the Apache root holding virtual host files.
    pub fn vhost_dir_name(&self) -> &'static str {
        match self {
            OsFamily::RedHat => "vhost.d",
            OsFamily::Debian => "sites-available",
        }
    }

    /// Fallback Apache root when the server binary does not report one.
    pub fn default_apache_root(&self) -> PathBuf {
        match self {
            OsFamily::RedHat => PathBuf::from("/etc/httpd"),
            OsFamily::Debian => PathBuf::from("/etc/apache2"),
        }
    }

    /// Whether sites must be enabled with `a2ensite` before a reload.
    pub fn uses_site_enabling(&self) -> bool {
        matches!(self, OsFamily::Debian)
    }
}

impl FromStr for OsFamily {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "redhat" | "rhel" => Ok(OsFamily::RedHat),
            "debian" => Ok(OsFamily::Debian),
            other => Err(AppError::UnsupportedOsFamily(other.to_string())),
        }
    }
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

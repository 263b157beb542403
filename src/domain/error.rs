use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for vhostgen operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A required field was absent or blank.
    #[error("Missing required field '{0}'")]
    MissingRequiredField(&'static str),

    /// A field holds characters Apache or the filesystem cannot take verbatim.
    #[error("Invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    /// SSL was requested without a usable certificate/key pair.
    #[error("Invalid SSL configuration: {0}")]
    InvalidSslConfiguration(String),

    /// Apache version that maps to neither known dialect.
    #[error("Unsupported Apache version '{0}': expected 2.2 or 2.4+")]
    UnsupportedDialect(String),

    /// OS family name that is neither Red-Hat-like nor Debian-like.
    #[error("Unsupported OS family '{0}': must be one of redhat, debian")]
    UnsupportedOsFamily(String),

    /// Explicitly requested settings file does not exist.
    #[error("Settings file not found: {}", .0.display())]
    SettingsMissing(PathBuf),

    /// TOML parsing error.
    #[error("Settings parse error: {0}")]
    SettingsParse(#[from] toml::de::Error),

    /// Template engine failure.
    #[error("Failed to render virtual host: {0}")]
    TemplateRender(String),

    /// Platform facts could not be determined.
    #[error("Platform detection failed: {0}")]
    PlatformDetection(String),

    /// External command exited unsuccessfully or could not be spawned.
    #[error("Command '{command}' failed: {details}")]
    CommandFailed { command: String, details: String },

    /// Virtual host file already present at the install target.
    #[error("Virtual host already exists at {} (use --force to overwrite)", .0.display())]
    SiteExists(PathBuf),

    /// JSON serialization error.
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    pub fn ssl_error<S: Into<String>>(message: S) -> Self {
        AppError::InvalidSslConfiguration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view of the failure.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::MissingRequiredField(_)
            | AppError::InvalidField { .. }
            | AppError::InvalidSslConfiguration(_)
            | AppError::UnsupportedDialect(_)
            | AppError::UnsupportedOsFamily(_)
            | AppError::SettingsParse(_)
            | AppError::TemplateRender(_)
            | AppError::Serialization(_) => io::ErrorKind::InvalidInput,
            AppError::SettingsMissing(_) => io::ErrorKind::NotFound,
            AppError::SiteExists(_) => io::ErrorKind::AlreadyExists,
            AppError::PlatformDetection(_) | AppError::CommandFailed { .. } => {
                io::ErrorKind::Other
            }
        }
    }
}

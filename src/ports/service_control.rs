use crate::domain::{AppError, OsFamily};

/// Port for controlling the running Apache service.
pub trait ServiceControl {
    /// Enable an available site (`a2ensite` on Debian-like hosts).
    fn enable_site(&self, family: OsFamily, server_name: &str) -> Result<(), AppError>;

    /// Gracefully reload the server so new configuration takes effect.
    fn graceful_reload(&self, family: OsFamily) -> Result<(), AppError>;
}

use tracing::info;

use super::command::run_command;
use crate::domain::{AppError, OsFamily};
use crate::ports::ServiceControl;

/// [`ServiceControl`] that shells out to `a2ensite` and `apachectl`.
#[derive(Debug, Clone, Default)]
pub struct ApacheServiceControl;

impl ApacheServiceControl {
    pub fn new() -> Self {
        Self
    }
}

impl ServiceControl for ApacheServiceControl {
    fn enable_site(&self, family: OsFamily, server_name: &str) -> Result<(), AppError> {
        if !family.uses_site_enabling() {
            return Ok(());
        }
        run_command("a2ensite", &[server_name])?;
        info!(%server_name, "enabled site");
        Ok(())
    }

    fn graceful_reload(&self, family: OsFamily) -> Result<(), AppError> {
        run_command(family.apache_binary(), &["-k", "graceful"])?;
        info!(binary = family.apache_binary(), "reloaded apache");
        Ok(())
    }
}

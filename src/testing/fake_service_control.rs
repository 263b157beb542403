use std::sync::Mutex;

use crate::domain::{AppError, OsFamily};
use crate::ports::ServiceControl;

/// Records service actions instead of running them.
#[derive(Default)]
pub struct FakeServiceControl {
    pub actions: Mutex<Vec<String>>,
    pub fail_reload: bool,
}

impl FakeServiceControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_reload() -> Self {
        Self { fail_reload: true, ..Self::default() }
    }

    pub fn actions(&self) -> Vec<String> {
        self.actions.lock().unwrap().clone()
    }
}

impl ServiceControl for FakeServiceControl {
    fn enable_site(&self, family: OsFamily, server_name: &str) -> Result<(), AppError> {
        if family.uses_site_enabling() {
            self.actions.lock().unwrap().push(format!("a2ensite {}", server_name));
        }
        Ok(())
    }

    fn graceful_reload(&self, family: OsFamily) -> Result<(), AppError> {
        let command = format!("{} -k graceful", family.apache_binary());
        if self.fail_reload {
            return Err(AppError::CommandFailed { command, details: "exit status: 1".into() });
        }
        self.actions.lock().unwrap().push(command);
        Ok(())
    }
}

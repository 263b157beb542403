//! Render command implementation.

use std::path::Path;

use super::VHostArgs;
use crate::domain::AppError;

pub(super) fn run_render(vhost: VHostArgs, settings_path: Option<&Path>) -> Result<(), AppError> {
    let outcome = crate::app::api::render(&vhost.into_request(), settings_path)?;
    print!("{}", outcome.text);
    Ok(())
}

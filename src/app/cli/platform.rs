//! Platform command implementation.

use std::path::Path;

use crate::domain::AppError;

pub(super) fn run_platform(json: bool, settings_path: Option<&Path>) -> Result<(), AppError> {
    let report = crate::app::api::platform(settings_path)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.to_text());
    }
    Ok(())
}

use std::process::Command;

use tracing::debug;

use crate::domain::AppError;

/// Run `program` with `args` and return its trimmed stdout.
///
/// Spawn failures and non-zero exits both surface as
/// [`AppError::CommandFailed`] carrying stderr when there is any.
pub fn run_command(program: &str, args: &[&str]) -> Result<String, AppError> {
    let rendered = format!("{} {}", program, args.join(" ")).trim_end().to_string();
    debug!(command = %rendered, "running command");

    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|e| AppError::CommandFailed { command: rendered.clone(), details: e.to_string() })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(AppError::CommandFailed {
            command: rendered,
            details: if stderr.is_empty() {
                format!("exited with {}", output.status)
            } else {
                stderr
            },
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

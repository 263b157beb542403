use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

use tracing::info;

use crate::domain::AppError;
use crate::ports::SiteStore;

/// Filesystem-based site store implementation.
#[derive(Debug, Clone, Default)]
pub struct FilesystemSiteStore;

impl FilesystemSiteStore {
    pub fn new() -> Self {
        Self
    }
}

impl SiteStore for FilesystemSiteStore {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn ensure_dir(&self, path: &Path) -> Result<bool, AppError> {
        if path.is_dir() {
            return Ok(false);
        }
        fs::create_dir_all(path)?;
        info!(path = %path.display(), "created directory");
        Ok(true)
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        fs::write(path, content)?;
        info!(path = %path.display(), bytes = content.len(), "wrote file");
        Ok(())
    }

    fn contains_line(&self, path: &Path, line: &str) -> Result<bool, AppError> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(content.lines().any(|l| l.trim() == line)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
            Err(err) => Err(err.into()),
        }
    }

    fn append_line(&self, path: &Path, line: &str) -> Result<(), AppError> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        writeln!(file, "{}", line)?;
        info!(path = %path.display(), %line, "appended line");
        Ok(())
    }
}

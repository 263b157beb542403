use std::path::Path;

use crate::domain::AppError;

/// Port for persisting virtual host files and site directories.
pub trait SiteStore {
    /// Check whether a file or directory exists.
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory and its parents. Returns true if it was created.
    fn ensure_dir(&self, path: &Path) -> Result<bool, AppError>;

    /// Write `content` to `path`, replacing any existing file.
    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError>;

    /// Whether `path` has a line equal to `line`, ignoring surrounding
    /// whitespace. A missing file contains nothing.
    fn contains_line(&self, path: &Path, line: &str) -> Result<bool, AppError>;

    /// Append a single line to `path`, creating the file if needed.
    fn append_line(&self, path: &Path, line: &str) -> Result<(), AppError>;
}

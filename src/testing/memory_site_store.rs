use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::SiteStore;

/// In-memory site store for command tests.
#[derive(Default)]
pub struct MemorySiteStore {
    pub files: Mutex<BTreeMap<PathBuf, String>>,
    pub dirs: Mutex<BTreeSet<PathBuf>>,
}

impl MemorySiteStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dir(self, path: impl Into<PathBuf>) -> Self {
        self.dirs.lock().unwrap().insert(path.into());
        self
    }

    pub fn with_file(self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files.lock().unwrap().insert(path.into(), content.to_string());
        self
    }

    pub fn read(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.lock().unwrap().get(path.as_ref()).cloned()
    }

    pub fn has_dir(&self, path: impl AsRef<Path>) -> bool {
        self.dirs.lock().unwrap().contains(path.as_ref())
    }
}

impl SiteStore for MemorySiteStore {
    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path) || self.has_dir(path)
    }

    fn ensure_dir(&self, path: &Path) -> Result<bool, AppError> {
        Ok(self.dirs.lock().unwrap().insert(path.to_path_buf()))
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        self.files.lock().unwrap().insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn contains_line(&self, path: &Path, line: &str) -> Result<bool, AppError> {
        Ok(self.read(path).is_some_and(|content| content.lines().any(|l| l.trim() == line)))
    }

    fn append_line(&self, path: &Path, line: &str) -> Result<(), AppError> {
        let mut files = self.files.lock().unwrap();
        let entry = files.entry(path.to_path_buf()).or_default();
        entry.push_str(line);
        entry.push('\n');
        Ok(())
    }
}

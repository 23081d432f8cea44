//! On-disk settings backend.

use std::io;
use std::path::PathBuf;

use super::SettingsBackend;

/// File name used when no explicit path is configured.
pub const DEFAULT_SETTINGS_FILE: &str = "settings.json";

/// [`SettingsBackend`] backed by a single file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    /// Creates a backend for the file at `path`.  Nothing is touched on disk.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `settings.json` relative to the process working directory.
    pub fn in_current_dir() -> Self {
        Self::new(DEFAULT_SETTINGS_FILE)
    }
}

impl SettingsBackend for FileBackend {
    fn location(&self) -> PathBuf {
        self.path.clone()
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn read_to_string(&self) -> io::Result<String> {
        std::fs::read_to_string(&self.path)
    }

    fn write(&self, contents: &str) -> io::Result<()> {
        // Ensure directory exists before writing.
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                std::fs::create_dir_all(dir)?;
            }
        }
        std::fs::write(&self.path, contents)
    }

    /// Removes the file, or the whole tree if a directory sits at the path.
    fn remove(&self) -> io::Result<()> {
        if self.path.is_dir() {
            std::fs::remove_dir_all(&self.path)
        } else {
            std::fs::remove_file(&self.path)
        }
    }
}

//! In-memory settings backend.
//!
//! Lets tests and embedders exercise [`super::SettingsStore`] without disk
//! I/O.  Clones share the same buffer, so a test can keep one handle to
//! inspect what the store wrote through another.

use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};

use super::SettingsBackend;

/// [`SettingsBackend`] holding the document text in a shared buffer.
#[derive(Debug, Clone)]
pub struct MemoryBackend {
    location: PathBuf,
    contents: Arc<Mutex<Option<String>>>,
}

impl MemoryBackend {
    /// Creates an empty backend, as if no settings file existed yet.
    pub fn new() -> Self {
        Self {
            location: PathBuf::from("memory://settings.json"),
            contents: Arc::new(Mutex::new(None)),
        }
    }

    /// Creates a backend that already holds `contents`.
    pub fn with_contents(contents: impl Into<String>) -> Self {
        let backend = Self::new();
        *backend.buffer() = Some(contents.into());
        backend
    }

    /// Returns a copy of the current document text, if any.
    pub fn contents(&self) -> Option<String> {
        self.buffer().clone()
    }

    fn buffer(&self) -> MutexGuard<'_, Option<String>> {
        // A panic while holding the lock cannot leave a half-written String.
        self.contents
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsBackend for MemoryBackend {
    fn location(&self) -> PathBuf {
        self.location.clone()
    }

    fn exists(&self) -> bool {
        self.buffer().is_some()
    }

    fn read_to_string(&self) -> io::Result<String> {
        self.buffer()
            .clone()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "settings document not found"))
    }

    fn write(&self, contents: &str) -> io::Result<()> {
        *self.buffer() = Some(contents.to_string());
        Ok(())
    }

    fn remove(&self) -> io::Result<()> {
        match self.buffer().take() {
            Some(_) => Ok(()),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                "settings document not found",
            )),
        }
    }
}

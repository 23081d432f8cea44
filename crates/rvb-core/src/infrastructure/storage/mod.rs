//! Storage infrastructure: settings file persistence.
//!
//! - [`SettingsBackend`] abstracts the single file the settings live in.
//! - [`file::FileBackend`] is the production implementation (a path on disk).
//! - [`memory::MemoryBackend`] keeps the document in memory for tests and
//!   embedders that never touch the disk.
//! - [`store::SettingsStore`] implements the read / write / reset operations
//!   on top of any backend.
//!
//! Every operation reads or writes the whole document.  There is no locking:
//! two processes writing the same file race and the last writer wins.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub mod file;
pub mod memory;
pub mod store;

pub use file::{FileBackend, DEFAULT_SETTINGS_FILE};
pub use memory::MemoryBackend;
pub use store::SettingsStore;

/// Error type for settings file operations.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// A file system I/O error occurred.
    #[error("I/O error accessing settings at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file exists but does not hold a valid settings document.
    #[error("failed to parse settings JSON at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The document could not be serialized to JSON.
    #[error("failed to serialize settings: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Trait abstracting the file that holds `settings.json`.
///
/// The production implementation is [`FileBackend`]; tests use
/// [`MemoryBackend`] or a mockall-generated `MockSettingsBackend`.
#[cfg_attr(test, mockall::automock)]
pub trait SettingsBackend {
    /// Where the document lives, for logs and error messages.
    fn location(&self) -> PathBuf;
    /// Returns `true` if the document currently exists.
    fn exists(&self) -> bool;
    /// Reads the whole document as UTF-8 text.
    fn read_to_string(&self) -> io::Result<String>;
    /// Replaces the whole document with `contents`.
    fn write(&self, contents: &str) -> io::Result<()>;
    /// Deletes the document.  Returns `NotFound` if it does not exist.
    fn remove(&self) -> io::Result<()>;
}

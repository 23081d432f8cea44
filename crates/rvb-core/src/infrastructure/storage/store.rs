//! `SettingsStore`: read, write and reset `settings.json`.
//!
//! The store never caches.  Every call goes back to the backend, parses the
//! whole document, and (for writes) serializes the whole document again,
//! pretty-printed with two-space indentation.
//!
//! If the document does not exist yet, reads create it with the defaults from
//! [`SettingsDocument::default`] first:
//!
//! ```text
//! get_sources()      ─► missing? ─► write defaults ─► return default sources
//!                               └─► present ─────► parse ─► return sources
//! ```

use std::io;
use std::path::PathBuf;

use serde_json::Value;
use tracing::{debug, info};

use super::{FileBackend, SettingsBackend, SettingsError};
use crate::domain::settings::{SettingsDocument, Sources};

/// Whole-document accessor for the builder settings.
///
/// # Example
///
/// ```rust
/// use rvb_core::{MemoryBackend, SettingsStore};
/// use serde_json::json;
///
/// let store = SettingsStore::new(MemoryBackend::new());
/// store.write_patches("com.app", json!(["p1"])).unwrap();
/// assert_eq!(store.get_patch_list("com.app").unwrap(), json!(["p1"]));
/// ```
#[derive(Debug, Clone)]
pub struct SettingsStore<B = FileBackend> {
    backend: B,
}

impl SettingsStore<FileBackend> {
    /// Opens the settings file at `path`.  The file is created lazily.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::new(FileBackend::new(path))
    }

    /// Opens `settings.json` in the process working directory.
    pub fn in_current_dir() -> Self {
        Self::new(FileBackend::in_current_dir())
    }
}

impl<B: SettingsBackend> SettingsStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Location of the backing document.
    pub fn path(&self) -> PathBuf {
        self.backend.location()
    }

    /// Creates the document with default contents if it does not exist.
    ///
    /// Returns `true` when the document was created by this call.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Io`] if the default document cannot be written.
    pub fn ensure_file(&self) -> Result<bool, SettingsError> {
        if self.backend.exists() {
            return Ok(false);
        }
        self.save(&SettingsDocument::default())?;
        info!("created default settings at {}", self.path().display());
        Ok(true)
    }

    /// Reads and parses the whole document.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Io`] if the document cannot be read (including
    /// when it does not exist) and [`SettingsError::Parse`] if it is not a
    /// valid settings document.
    pub fn load(&self) -> Result<SettingsDocument, SettingsError> {
        let path = self.path();
        let content = self
            .backend
            .read_to_string()
            .map_err(|source| SettingsError::Io {
                path: path.clone(),
                source,
            })?;
        debug!("read {} bytes of settings from {}", content.len(), path.display());
        serde_json::from_str(&content).map_err(|source| SettingsError::Parse { path, source })
    }

    /// Returns the stored patch selection for `package_name`.
    ///
    /// Yields an empty JSON array when the document was just created or has
    /// no entry for the package.
    pub fn get_patch_list(&self, package_name: &str) -> Result<Value, SettingsError> {
        if self.ensure_file()? {
            return Ok(empty_patch_list());
        }
        let doc = self.load()?;
        match doc.patches_for(package_name) {
            Some(patches) => Ok(patches.clone()),
            None => {
                debug!("no stored patches for {package_name}");
                Ok(empty_patch_list())
            }
        }
    }

    /// Stores `patches` as the selection for `package_name`, replacing any
    /// previous selection for that package.
    pub fn write_patches(&self, package_name: &str, patches: Value) -> Result<(), SettingsError> {
        self.ensure_file()?;
        let mut doc = self.load()?;
        doc.upsert_patches(package_name, patches);
        self.save(&doc)?;
        info!("saved patch selection for {package_name}");
        Ok(())
    }

    /// Returns the `sources` section as stored, creating the document with
    /// the built-in defaults if it does not exist.
    ///
    /// A document without a `sources` section yields the defaults; nothing is
    /// written back.
    pub fn get_sources(&self) -> Result<Sources, SettingsError> {
        if self.ensure_file()? {
            return Ok(Sources::default());
        }
        Ok(self.load()?.sources.unwrap_or_default())
    }

    /// Replaces the `sources` section wholesale.  Everything else in the
    /// document is written back as it was read.
    pub fn write_sources(&self, sources: Sources) -> Result<(), SettingsError> {
        self.ensure_file()?;
        let mut doc = self.load()?;
        doc.sources = Some(sources);
        self.save(&doc)?;
        info!("saved sources to {}", self.path().display());
        Ok(())
    }

    /// Deletes the document and recreates it with defaults.
    ///
    /// A missing document is not an error.
    pub fn reset_patches_sources(&self) -> Result<(), SettingsError> {
        match self.backend.remove() {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(source) => {
                return Err(SettingsError::Io {
                    path: self.path(),
                    source,
                })
            }
        }
        self.save(&SettingsDocument::default())?;
        info!("reset settings at {}", self.path().display());
        Ok(())
    }

    fn save(&self, doc: &SettingsDocument) -> Result<(), SettingsError> {
        let content = serde_json::to_string_pretty(doc).map_err(SettingsError::Serialize)?;
        self.backend
            .write(&content)
            .map_err(|source| SettingsError::Io {
                path: self.path(),
                source,
            })
    }
}

fn empty_patch_list() -> Value {
    Value::Array(Vec::new())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

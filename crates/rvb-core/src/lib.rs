//! # rvb-core
//!
//! Shared library for the ReVanced builder containing the persisted settings
//! model and the store that reads and writes it.
//!
//! # Architecture overview
//!
//! The builder remembers two things between runs:
//!
//! - **Sources** – which GitHub repositories the CLI, patches, integrations and
//!   microG builds are downloaded from, plus two boolean-ish flags
//!   (`prereleases`, `cli4`).
//! - **Patch selections** – for every target application package, the list of
//!   patches the user picked last time.
//!
//! Both live in a single `settings.json` document.  This crate is split into:
//!
//! - **`domain`** – The document types and their built-in defaults.  No I/O.
//!
//! - **`infrastructure`** – The [`SettingsStore`] plus the
//!   [`SettingsBackend`] seam it reads and writes through.  The production
//!   backend is a file on disk; tests use an in-memory buffer.

pub mod domain;
pub mod infrastructure;

pub use domain::settings::{keys, PackageEntry, SettingsDocument, Sources, DEFAULT_SOURCES};
pub use infrastructure::storage::{
    FileBackend, MemoryBackend, SettingsBackend, SettingsError, SettingsStore,
    DEFAULT_SETTINGS_FILE,
};

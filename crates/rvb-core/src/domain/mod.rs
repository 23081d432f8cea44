//! Domain entities for the builder settings.
//!
//! Everything in here is plain data: the shape of `settings.json`, its default
//! contents and small lookups over it.  Reading and writing the file is the
//! job of [`crate::infrastructure::storage`].

/// The persisted settings document.
///
/// See [`settings::SettingsDocument`] for the main type.
pub mod settings;

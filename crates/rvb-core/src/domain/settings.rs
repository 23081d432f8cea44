//! The `settings.json` document.
//!
//! ```json
//! {
//!   "sources": {
//!     "cli": "inotia00/revanced-cli",
//!     "patches": "inotia00/revanced-patches",
//!     "integrations": "inotia00/revanced-integrations",
//!     "microg": "ReVanced/GmsCore",
//!     "prereleases": "false",
//!     "cli4": "false"
//!   },
//!   "patches": [
//!     { "name": "com.google.android.youtube", "patches": ["hide-shorts-button"] }
//!   ]
//! }
//! ```
//!
//! # Round-tripping
//!
//! A rewrite changes only the field being written.  Keys the builder does not
//! know about (at the top level, inside `sources`, or on a package entry) are
//! kept in `extra` maps and written back unchanged.  Source values are kept as
//! raw JSON, so a hand-edited `"prereleases": false` survives as a boolean.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Well-known keys of the `sources` section.
pub mod keys {
    pub const CLI: &str = "cli";
    pub const PATCHES: &str = "patches";
    pub const INTEGRATIONS: &str = "integrations";
    pub const MICROG: &str = "microg";
    pub const PRERELEASES: &str = "prereleases";
    pub const CLI4: &str = "cli4";
}

/// Built-in sources, in the order they are written to a fresh file.
pub const DEFAULT_SOURCES: [(&str, &str); 6] = [
    (keys::CLI, "inotia00/revanced-cli"),
    (keys::PATCHES, "inotia00/revanced-patches"),
    (keys::INTEGRATIONS, "inotia00/revanced-integrations"),
    (keys::MICROG, "ReVanced/GmsCore"),
    (keys::PRERELEASES, "false"),
    (keys::CLI4, "false"),
];

/// Top-level document stored in `settings.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SettingsDocument {
    /// `None` only for a hand-edited file without a `sources` section; such a
    /// file is written back without one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<Sources>,
    /// One entry per target package, in insertion order.
    #[serde(default)]
    pub patches: Vec<PackageEntry>,
    /// Any other top-level keys found in the file.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Upstream repositories and release flags, exactly as stored.
///
/// The flags are normally the strings `"true"` / `"false"` because that is
/// what the file has always contained.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Sources {
    entries: Map<String, Value>,
}

/// Patch selection for a single application package.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PackageEntry {
    /// Android package name, e.g. `com.google.android.youtube`.
    pub name: String,
    /// Opaque to the store; the frontend decides the shape.
    #[serde(default)]
    pub patches: Value,
    /// Any other keys found on the entry.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for Sources {
    fn default() -> Self {
        DEFAULT_SOURCES.into_iter().collect()
    }
}

impl Default for SettingsDocument {
    fn default() -> Self {
        Self {
            sources: Some(Sources::default()),
            patches: Vec::new(),
            extra: Map::new(),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Sources {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl Sources {
    /// Raw value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Value under `key` if it is a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Sets `key`, keeping its position if it already exists.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.entries.insert(key.to_string(), value.into());
    }

    pub fn entries(&self) -> &Map<String, Value> {
        &self.entries
    }

    /// Returns `true` when pre-release builds should be downloaded.
    pub fn prereleases_enabled(&self) -> bool {
        self.flag(keys::PRERELEASES)
    }

    /// Returns `true` when the 4.x CLI argument style should be used.
    pub fn cli4_enabled(&self) -> bool {
        self.flag(keys::CLI4)
    }

    // "true" or a JSON `true`; anything else is off.
    fn flag(&self, key: &str) -> bool {
        match self.get(key) {
            Some(Value::String(s)) => s == "true",
            Some(Value::Bool(b)) => *b,
            _ => false,
        }
    }
}

impl SettingsDocument {
    /// Returns the stored patches for `name`, if an entry exists.
    pub fn patches_for(&self, name: &str) -> Option<&Value> {
        self.patches
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| &entry.patches)
    }

    /// Replaces the patches of the entry called `name`, or appends a new entry.
    ///
    /// Keeps at most one entry per package name.  Other keys on an existing
    /// entry are left alone.
    pub fn upsert_patches(&mut self, name: &str, patches: Value) {
        match self.patches.iter_mut().find(|entry| entry.name == name) {
            Some(entry) => entry.patches = patches,
            None => self.patches.push(PackageEntry {
                name: name.to_string(),
                patches,
                extra: Map::new(),
            }),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_sources_match_builtin_repositories() {
        // Arrange / Act
        let sources = Sources::default();

        // Assert
        assert_eq!(sources.get_str(keys::CLI), Some("inotia00/revanced-cli"));
        assert_eq!(sources.get_str(keys::PATCHES), Some("inotia00/revanced-patches"));
        assert_eq!(
            sources.get_str(keys::INTEGRATIONS),
            Some("inotia00/revanced-integrations")
        );
        assert_eq!(sources.get_str(keys::MICROG), Some("ReVanced/GmsCore"));
        assert_eq!(sources.get_str(keys::PRERELEASES), Some("false"));
        assert_eq!(sources.get_str(keys::CLI4), Some("false"));
        assert_eq!(sources.entries().len(), 6);
    }

    #[test]
    fn test_default_document_has_no_patch_entries() {
        let doc = SettingsDocument::default();
        assert!(doc.patches.is_empty());
        assert!(doc.extra.is_empty());
    }

    #[test]
    fn test_default_document_pretty_json_layout() {
        // Arrange
        let expected = r#"{
  "sources": {
    "cli": "inotia00/revanced-cli",
    "patches": "inotia00/revanced-patches",
    "integrations": "inotia00/revanced-integrations",
    "microg": "ReVanced/GmsCore",
    "prereleases": "false",
    "cli4": "false"
  },
  "patches": []
}"#;

        // Act
        let text = serde_json::to_string_pretty(&SettingsDocument::default()).unwrap();

        // Assert
        assert_eq!(text, expected);
    }

    #[test]
    fn test_flags_accept_strings_and_booleans() {
        let mut sources = Sources::default();
        assert!(!sources.prereleases_enabled());
        assert!(!sources.cli4_enabled());

        sources.set(keys::PRERELEASES, "true");
        sources.set(keys::CLI4, true);
        assert!(sources.prereleases_enabled());
        assert!(sources.cli4_enabled());

        // Anything that is not "true" or `true` counts as off.
        sources.set(keys::PRERELEASES, "yes");
        assert!(!sources.prereleases_enabled());
    }

    #[test]
    fn test_set_existing_key_keeps_position() {
        let mut sources = Sources::default();

        sources.set(keys::CLI, "me/cli");

        let order: Vec<&str> = sources.entries().keys().map(String::as_str).collect();
        assert_eq!(order[0], keys::CLI);
        assert_eq!(sources.get_str(keys::CLI), Some("me/cli"));
    }

    #[test]
    fn test_patches_for_unknown_package_is_none() {
        let doc = SettingsDocument::default();
        assert!(doc.patches_for("com.unknown").is_none());
    }

    #[test]
    fn test_upsert_appends_new_entry() {
        // Arrange
        let mut doc = SettingsDocument::default();

        // Act
        doc.upsert_patches("com.app", json!(["p1"]));
        doc.upsert_patches("com.other", json!(["p2"]));

        // Assert
        assert_eq!(doc.patches.len(), 2);
        assert_eq!(doc.patches[0].name, "com.app");
        assert_eq!(doc.patches[1].name, "com.other");
        assert_eq!(doc.patches_for("com.other"), Some(&json!(["p2"])));
    }

    #[test]
    fn test_upsert_replaces_existing_entry_in_place() {
        // Arrange
        let mut doc = SettingsDocument::default();
        doc.upsert_patches("com.app", json!(["p1"]));
        doc.upsert_patches("com.other", json!([]));

        // Act
        doc.upsert_patches("com.app", json!(["p1", "p2"]));

        // Assert: still two entries, first position kept
        assert_eq!(doc.patches.len(), 2);
        assert_eq!(doc.patches[0].name, "com.app");
        assert_eq!(doc.patches[0].patches, json!(["p1", "p2"]));
    }

    #[test]
    fn test_partial_sources_are_not_filled_with_defaults() {
        // Arrange
        let text = r#"{ "sources": { "cli": "me/my-cli" }, "patches": [] }"#;

        // Act
        let doc: SettingsDocument = serde_json::from_str(text).expect("deserialize partial");
        let written = serde_json::to_value(&doc).unwrap();

        // Assert
        assert_eq!(written["sources"], json!({ "cli": "me/my-cli" }));
    }

    #[test]
    fn test_non_string_source_values_are_kept() {
        let text = r#"{ "sources": { "cli": "a/b", "prereleases": false } }"#;

        let doc: SettingsDocument = serde_json::from_str(text).expect("deserialize");

        let sources = doc.sources.expect("sources present");
        assert_eq!(sources.get(keys::PRERELEASES), Some(&json!(false)));
        assert_eq!(sources.get_str(keys::PRERELEASES), None);
    }

    #[test]
    fn test_unknown_keys_survive_a_round_trip() {
        // Arrange
        let text = r#"{
            "theme": "dark",
            "sources": { "cli": "a/b", "mirror": "example.org" },
            "patches": [ { "name": "com.x", "patches": ["q"], "version": "1.2" } ]
        }"#;

        // Act
        let doc: SettingsDocument = serde_json::from_str(text).expect("deserialize");
        let written = serde_json::to_value(&doc).unwrap();

        // Assert
        assert_eq!(written["theme"], json!("dark"));
        assert_eq!(written["sources"]["mirror"], json!("example.org"));
        assert_eq!(written["patches"][0]["version"], json!("1.2"));
    }

    #[test]
    fn test_document_without_sources_is_written_without_sources() {
        let doc: SettingsDocument = serde_json::from_str(r#"{ "patches": [] }"#).unwrap();

        let written = serde_json::to_value(&doc).unwrap();

        assert!(doc.sources.is_none());
        assert!(written.get("sources").is_none());
    }

    #[test]
    fn test_package_entry_patches_are_opaque() {
        // Arrange: any JSON shape is accepted as the patch selection
        let text = r#"{ "patches": [ { "name": "com.app", "patches": { "enabled": ["a"], "options": { "x": 1 } } } ] }"#;

        // Act
        let doc: SettingsDocument = serde_json::from_str(text).expect("deserialize");

        // Assert
        assert_eq!(
            doc.patches_for("com.app"),
            Some(&json!({ "enabled": ["a"], "options": { "x": 1 } }))
        );
    }

    #[test]
    fn test_deserialize_invalid_json_returns_error() {
        let result: Result<SettingsDocument, serde_json::Error> = serde_json::from_str("{ not json");
        assert!(result.is_err());
    }
}

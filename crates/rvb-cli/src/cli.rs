//! Command-line argument definitions.
//!
//! ```text
//! rvb-settings [--settings <PATH>] <COMMAND>
//!
//! Commands:
//!   init                       Create settings.json with defaults if missing
//!   show                       Print the whole settings document
//!   sources get                Print the configured sources
//!   sources set [--cli ..] ..  Change individual sources
//!   patches get <PACKAGE>      Print the patch selection for a package
//!   patches set <PACKAGE> <JSON>
//!   reset                      Delete and recreate settings.json with defaults
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use rvb_core::{keys, Sources, DEFAULT_SETTINGS_FILE};

/// ReVanced builder settings.
///
/// Reads and writes the `settings.json` file that stores source repositories
/// and per-package patch selections.
#[derive(Debug, Parser)]
#[command(
    name = "rvb-settings",
    about = "Inspect and edit the ReVanced builder settings file",
    version
)]
pub struct Cli {
    /// Path of the settings file.
    #[arg(long, global = true, default_value = DEFAULT_SETTINGS_FILE, env = "RVB_SETTINGS")]
    pub settings: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// Create the settings file with defaults if it does not exist.
    Init,
    /// Print the whole settings document.
    Show,
    /// Read or change the source repositories.
    #[command(subcommand)]
    Sources(SourcesCommand),
    /// Read or change per-package patch selections.
    #[command(subcommand)]
    Patches(PatchesCommand),
    /// Delete the settings file and recreate it with defaults.
    Reset,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum SourcesCommand {
    /// Print the configured sources.
    Get,
    /// Change sources.  Options that are not given keep their current value.
    Set(SourcesArgs),
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum PatchesCommand {
    /// Print the stored patch selection for a package.
    Get {
        /// Android package name, e.g. `com.google.android.youtube`.
        package: String,
    },
    /// Store the patch selection for a package.
    Set {
        /// Android package name.
        package: String,
        /// Patch selection as JSON, e.g. `'["hide-shorts-button"]'`.
        patches: String,
    },
}

/// Source overrides for `sources set`.
#[derive(Debug, Default, Args, PartialEq, Eq)]
pub struct SourcesArgs {
    /// `owner/repo` of the patching CLI.
    #[arg(long)]
    pub cli: Option<String>,
    /// `owner/repo` of the patch bundle.
    #[arg(long)]
    pub patches: Option<String>,
    /// `owner/repo` of the integrations APK.
    #[arg(long)]
    pub integrations: Option<String>,
    /// `owner/repo` of the microG / GmsCore build.
    #[arg(long)]
    pub microg: Option<String>,
    /// Download pre-release builds.
    #[arg(long)]
    pub prereleases: Option<bool>,
    /// Use the 4.x CLI argument style.
    #[arg(long)]
    pub cli4: Option<bool>,
}

impl SourcesArgs {
    /// Returns `current` with every given option applied.
    ///
    /// Flags are stored as `"true"` / `"false"` strings, like a fresh file.
    pub fn apply_to(&self, mut current: Sources) -> Sources {
        let repos = [
            (keys::CLI, &self.cli),
            (keys::PATCHES, &self.patches),
            (keys::INTEGRATIONS, &self.integrations),
            (keys::MICROG, &self.microg),
        ];
        for (key, value) in repos {
            if let Some(value) = value {
                current.set(key, value.as_str());
            }
        }
        for (key, flag) in [(keys::PRERELEASES, self.prereleases), (keys::CLI4, self.cli4)] {
            if let Some(flag) = flag {
                current.set(key, flag.to_string());
            }
        }
        current
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

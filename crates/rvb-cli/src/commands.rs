//! Command dispatch: maps each [`Command`] onto a [`SettingsStore`] call.
//!
//! Output goes to the supplied writer so tests can capture it; the binary
//! passes stdout.

use std::io::Write;

use anyhow::Context;
use rvb_core::{SettingsBackend, SettingsStore};
use serde_json::Value;
use tracing::{debug, warn};

use crate::cli::{Command, PatchesCommand, SourcesCommand};

/// Runs `command` against `store`, writing any result to `out`.
///
/// # Errors
///
/// Returns an error if the store fails, if a patch selection is not valid
/// JSON, or if writing to `out` fails.
pub fn run<B, W>(store: &SettingsStore<B>, command: Command, out: &mut W) -> anyhow::Result<()>
where
    B: SettingsBackend,
    W: Write,
{
    debug!("running {command:?} against {}", store.path().display());

    match command {
        Command::Init => {
            let created = store.ensure_file()?;
            if created {
                writeln!(out, "created {}", store.path().display())?;
            } else {
                writeln!(out, "{} already exists", store.path().display())?;
            }
        }
        Command::Show => {
            let doc = store.load()?;
            print_json(out, &doc)?;
        }
        Command::Sources(SourcesCommand::Get) => {
            let sources = store.get_sources()?;
            print_json(out, &sources)?;
        }
        Command::Sources(SourcesCommand::Set(args)) => {
            if args.is_empty() {
                warn!("sources set called without any options; nothing changed");
                return Ok(());
            }
            let updated = args.apply_to(store.get_sources()?);
            store.write_sources(updated.clone())?;
            print_json(out, &updated)?;
        }
        Command::Patches(PatchesCommand::Get { package }) => {
            let patches = store.get_patch_list(&package)?;
            print_json(out, &patches)?;
        }
        Command::Patches(PatchesCommand::Set { package, patches }) => {
            let patches: Value = serde_json::from_str(&patches)
                .with_context(|| format!("patch selection for {package} is not valid JSON"))?;
            store.write_patches(&package, patches)?;
            writeln!(out, "saved patches for {package}")?;
        }
        Command::Reset => {
            store.reset_patches_sources()?;
            writeln!(out, "reset {}", store.path().display())?;
        }
    }
    Ok(())
}

fn print_json<W: Write, T: serde::Serialize>(out: &mut W, value: &T) -> anyhow::Result<()> {
    let text = serde_json::to_string_pretty(value)?;
    writeln!(out, "{text}")?;
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

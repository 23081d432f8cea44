//! `rvb-settings` entry point.
//!
//! Parses the command line, initialises logging and runs one command against
//! the settings file.
//!
//! # Environment variables
//!
//! | Variable       | Default         | Description                       |
//! |----------------|-----------------|-----------------------------------|
//! | `RVB_SETTINGS` | `settings.json` | Settings file path                |
//! | `RUST_LOG`     | `warn`          | `tracing` filter (logs on stderr) |

use std::io;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rvb_cli::cli::Cli;
use rvb_cli::commands;
use rvb_core::SettingsStore;

fn main() -> anyhow::Result<()> {
    // Initialise structured logging.  Level is overridden by `RUST_LOG`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    info!("using settings file {}", cli.settings.display());

    let store = SettingsStore::open(&cli.settings);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    commands::run(&store, cli.command, &mut out)
        .with_context(|| format!("settings command failed for {}", cli.settings.display()))
}

//! cli
//!
//! Command-line interface layer for Gridwit.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Load configuration and resolve the database path
//! - Delegate to command handlers
//!
//! The CLI layer is thin. Handlers open the store, call the library
//! (ingest pipeline or query surface), and format output; none of the
//! import or query semantics live here.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use std::path::PathBuf;

use anyhow::{Context as _, Result};

use crate::core::config::Config;
use crate::ui::Verbosity;

/// Execution context for commands.
///
/// Carries the loaded configuration and the global flag overrides.
#[derive(Debug, Clone)]
pub struct Context {
    /// Loaded configuration.
    pub config: Config,
    /// `--db` override, if any.
    pub db_override: Option<PathBuf>,
    /// Output verbosity from `--quiet` / `--debug`.
    pub verbosity: Verbosity,
}

impl Context {
    /// The database path, with the CLI flag taking precedence.
    pub fn database(&self) -> PathBuf {
        self.db_override
            .clone()
            .unwrap_or_else(|| self.config.database())
    }
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::load().context("failed to load configuration")?,
    };

    let ctx = Context {
        config,
        db_override: cli.db.clone(),
        verbosity: Verbosity::from_flags(cli.quiet, cli.debug),
    };

    commands::dispatch(cli.command, &ctx)
}

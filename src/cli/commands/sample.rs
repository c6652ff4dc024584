//! sample command - Write a sample puzzle document tree

use std::path::Path;

use anyhow::{Context as _, Result};

use crate::cli::Context;
use crate::ingest::sample::write_sample_tree;
use crate::ui::output;

/// Write sample data under `dir` (or the configured puzzles directory).
pub fn sample(ctx: &Context, dir: Option<&Path>) -> Result<()> {
    let base = dir
        .map(|d| d.to_path_buf())
        .unwrap_or_else(|| ctx.config.puzzles_dir());

    let path = write_sample_tree(&base)
        .with_context(|| format!("failed to write sample data under {}", base.display()))?;

    output::print(
        format!("Created sample puzzle at {}.", path.display()),
        ctx.verbosity,
    );
    Ok(())
}

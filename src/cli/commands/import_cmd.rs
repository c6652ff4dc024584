//! import command - Import puzzle documents (destructive full refresh)

use std::path::Path;

use anyhow::{Context as _, Result};

use crate::cli::Context;
use crate::ingest::import_all;
use crate::ui::output;

use super::open_store;

/// Import every document under `dir` (or the configured puzzles
/// directory).
///
/// # Arguments
///
/// * `ctx` - Execution context
/// * `dir` - Source directory override
///
/// Individual document failures are reported and do not fail the
/// command; only a missing source directory or an unusable database
/// does.
pub fn import(ctx: &Context, dir: Option<&Path>) -> Result<()> {
    let source = dir
        .map(|d| d.to_path_buf())
        .unwrap_or_else(|| ctx.config.puzzles_dir());
    let mut store = open_store(ctx)?;

    output::debug(
        format!("importing from {}", source.display()),
        ctx.verbosity,
    );

    let report = import_all(&source, &mut store)
        .with_context(|| format!("import from {} failed", source.display()))?;

    for failure in &report.failures {
        output::warn(
            format!("skipped {}: {}", failure.path.display(), failure.reason),
            ctx.verbosity,
        );
    }

    output::print(
        format!(
            "Imported {} puzzle(s), {} failed, {} clue(s) dropped.",
            report.processed, report.failed, report.dropped_clues
        ),
        ctx.verbosity,
    );
    Ok(())
}

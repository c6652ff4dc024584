//! progress command - Per-user solving progress

use anyhow::{Context as _, Result};

use crate::cli::Context;
use crate::ui::output;

use super::open_store;

/// Record progress on a puzzle (creates the entry).
pub fn save_progress(
    ctx: &Context,
    user_id: i64,
    puzzle_id: i64,
    progress: &str,
    completed: bool,
) -> Result<()> {
    let blob = parse_blob(progress)?;
    let store = open_store(ctx)?;
    let saved = store.save_progress(user_id, puzzle_id, &blob, completed)?;
    output::json(&saved)?;
    Ok(())
}

/// Update existing progress.
pub fn update_progress(
    ctx: &Context,
    user_id: i64,
    puzzle_id: i64,
    progress: &str,
    completed: Option<bool>,
) -> Result<()> {
    let blob = parse_blob(progress)?;
    let store = open_store(ctx)?;
    let saved = store.update_progress(user_id, puzzle_id, &blob, completed)?;
    output::json(&saved)?;
    Ok(())
}

fn parse_blob(progress: &str) -> Result<serde_json::Value> {
    serde_json::from_str(progress).context("--progress must be valid JSON")
}

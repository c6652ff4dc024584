//! status command - Report archive health and record counts

use anyhow::Result;

use crate::cli::Context;
use crate::ui::output;

use super::open_store;

/// Print the archive's health summary as JSON.
///
/// Reaching the counts proves the database is openable and queryable,
/// which is the whole health check.
pub fn status(ctx: &Context) -> Result<()> {
    let store = open_store(ctx)?;
    let report = store.status()?;

    output::json(&serde_json::json!({
        "status": "healthy",
        "database": "connected",
        "puzzle_count": report.puzzle_count,
        "clue_count": report.clue_count,
        "timestamp": report.timestamp,
    }))?;
    Ok(())
}

//! list command - List puzzles, paginated

use anyhow::Result;

use crate::cli::Context;
use crate::ui::output;

use super::open_store;

/// List one page of puzzles as JSON.
pub fn list(ctx: &Context, page: u64, per_page: Option<u64>) -> Result<()> {
    let store = open_store(ctx)?;
    let per_page = per_page.unwrap_or_else(|| ctx.config.per_page());
    let result = store.list_puzzles(page, per_page)?;
    output::json(&result)?;
    Ok(())
}

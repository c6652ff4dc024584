//! search command - Search puzzles

use anyhow::Result;

use crate::cli::Context;
use crate::store::SearchFilters;
use crate::ui::output;

use super::open_store;

/// Search puzzles and print one page of results as JSON.
///
/// # Arguments
///
/// * `ctx` - Execution context
/// * `author` - Author substring filter
/// * `date` - Exact publication date filter (M/D/YYYY)
/// * `word` - Answer substring filter
/// * `clue` - Clue text substring filter
/// * `page` - 1-based page number
/// * `per_page` - Page size override
#[allow(clippy::too_many_arguments)]
pub fn search(
    ctx: &Context,
    author: Option<String>,
    date: Option<String>,
    word: Option<String>,
    clue: Option<String>,
    page: u64,
    per_page: Option<u64>,
) -> Result<()> {
    let store = open_store(ctx)?;
    let filters = SearchFilters {
        author,
        date,
        word,
        clue,
    };
    let per_page = per_page.unwrap_or_else(|| ctx.config.per_page());
    let result = store.search(&filters, page, per_page)?;
    output::json(&result)?;
    Ok(())
}

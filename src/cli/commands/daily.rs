//! daily command - Show a randomly selected daily puzzle

use anyhow::Result;

use crate::cli::Context;
use crate::ui::output;

use super::open_store;

/// Print a random puzzle as JSON and record it in the daily history.
pub fn daily(ctx: &Context) -> Result<()> {
    let store = open_store(ctx)?;
    let puzzle = store.daily_puzzle()?;
    output::json(&puzzle)?;
    Ok(())
}

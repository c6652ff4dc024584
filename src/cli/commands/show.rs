//! show command - Show one puzzle with its clues

use anyhow::Result;

use crate::cli::Context;
use crate::ui::output;

use super::open_store;

/// Print one puzzle with its clues as JSON.
pub fn show(ctx: &Context, id: i64) -> Result<()> {
    let store = open_store(ctx)?;
    let puzzle = store.get_puzzle(id)?;
    output::json(&puzzle)?;
    Ok(())
}

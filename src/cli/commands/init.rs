//! init command - Initialize the puzzle archive database

use anyhow::Result;

use crate::cli::Context;
use crate::ui::output;

use super::open_store;

/// Initialize the archive.
///
/// Opening the store creates the database and applies the schema, so
/// this is little more than an explicit, idempotent first touch.
pub fn init(ctx: &Context) -> Result<()> {
    let db = ctx.database();
    let already = db.exists();

    open_store(ctx)?;

    if already {
        output::print(
            format!("Archive at {} is already initialized.", db.display()),
            ctx.verbosity,
        );
    } else {
        output::print(
            format!("Initialized puzzle archive at {}.", db.display()),
            ctx.verbosity,
        );
    }
    Ok(())
}

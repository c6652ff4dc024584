//! user command - User management

use anyhow::Result;

use crate::cli::Context;
use crate::ui::output;

use super::open_store;

/// Create a user and print it as JSON.
pub fn create_user(ctx: &Context, username: &str, email: &str) -> Result<()> {
    let store = open_store(ctx)?;
    let user = store.create_user(username, email)?;
    output::json(&user)?;
    Ok(())
}

/// Print a user's saved puzzles as JSON.
pub fn user_puzzles(ctx: &Context, user_id: i64) -> Result<()> {
    let store = open_store(ctx)?;
    let entries = store.user_puzzles(user_id)?;
    output::json(&serde_json::json!({ "puzzles": entries }))?;
    Ok(())
}

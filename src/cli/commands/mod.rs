//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Validates command-specific arguments
//! 2. Opens the store and calls the library
//! 3. Formats and displays output
//!
//! Handlers do not implement import or query semantics directly.

mod completion;
mod daily;
mod import_cmd;
mod init;
mod list;
mod progress;
mod sample;
mod search;
mod show;
mod status;
mod user;
mod verify;

// Re-export command functions for testing and direct invocation
pub use completion::completion;
pub use daily::daily;
pub use import_cmd::import;
pub use init::init;
pub use list::list;
pub use progress::{save_progress, update_progress};
pub use sample::sample;
pub use search::search;
pub use show::show;
pub use status::status;
pub use user::{create_user, user_puzzles};
pub use verify::verify;

use anyhow::{Context as _, Result};

use crate::cli::args::{Command, ProgressAction, UserAction};
use crate::cli::Context;
use crate::store::SqliteStore;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Init => init::init(ctx),
        Command::Import { dir } => import_cmd::import(ctx, dir.as_deref()),
        Command::Sample { dir } => sample::sample(ctx, dir.as_deref()),
        Command::List { page, per_page } => list::list(ctx, page, per_page),
        Command::Show { id } => show::show(ctx, id),
        Command::Daily => daily::daily(ctx),
        Command::Search {
            author,
            date,
            word,
            clue,
            page,
            per_page,
        } => search::search(ctx, author, date, word, clue, page, per_page),
        Command::Status => status::status(ctx),
        Command::Verify => verify::verify(ctx),
        Command::User { action } => match action {
            UserAction::Create { username, email } => user::create_user(ctx, &username, &email),
            UserAction::Puzzles { user_id } => user::user_puzzles(ctx, user_id),
        },
        Command::Progress { action } => match action {
            ProgressAction::Save {
                user_id,
                puzzle_id,
                progress,
                completed,
            } => progress::save_progress(ctx, user_id, puzzle_id, &progress, completed),
            ProgressAction::Update {
                user_id,
                puzzle_id,
                progress,
                completed,
            } => progress::update_progress(ctx, user_id, puzzle_id, &progress, completed),
        },
        Command::Completion { shell } => completion::completion(shell),
    }
}

/// Open the archive, creating the database's parent directory if needed.
pub(crate) fn open_store(ctx: &Context) -> Result<SqliteStore> {
    let db = ctx.database();
    if let Some(parent) = db.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }
    SqliteStore::open(&db).with_context(|| format!("failed to open archive at {}", db.display()))
}

//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--db <path>`: Use this database file (overrides config)
//! - `--config <path>`: Load this config file (overrides standard locations)
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Gridwit - crossword puzzle archive over SQLite
#[derive(Parser, Debug)]
#[command(name = "gridwit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Use this database file instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Load this config file instead of the standard locations
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize the puzzle archive database
    #[command(
        name = "init",
        long_about = "Initialize the puzzle archive database.\n\n\
            Creates the database file (and its parent directory) if needed and \
            applies the schema. Safe to run on an existing archive; nothing is \
            deleted."
    )]
    Init,

    /// Import puzzle documents (destructive full refresh)
    #[command(
        name = "import",
        long_about = "Import every .json puzzle document under a directory.\n\n\
            This is a destructive full refresh: all existing puzzles and clues \
            are deleted before the walk, so running it twice leaves exactly one \
            copy of each document's data. Documents are visited in name order \
            (year/month/filename trees import chronologically) and each one is \
            its own transaction - a bad document is rolled back, reported, and \
            skipped without stopping the batch.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Import from the configured puzzles directory
    gridwit import

    # Import an explicit tree into an explicit database
    gridwit --db archive.db import ./nyt_crosswords

    # Smoke-test the pipeline with generated sample data
    gridwit sample ./sample_puzzles
    gridwit import ./sample_puzzles"
    )]
    Import {
        /// Directory holding the year/month document tree
        #[arg(value_name = "DIR")]
        dir: Option<PathBuf>,
    },

    /// Write a sample puzzle document tree
    Sample {
        /// Directory to create the tree under
        #[arg(value_name = "DIR")]
        dir: Option<PathBuf>,
    },

    /// List puzzles, paginated
    List {
        /// Page number (1-based)
        #[arg(long, default_value_t = 1)]
        page: u64,

        /// Results per page (max 50)
        #[arg(long, value_name = "N")]
        per_page: Option<u64>,
    },

    /// Show one puzzle with its clues
    Show {
        /// Puzzle id
        #[arg(value_name = "ID")]
        id: i64,
    },

    /// Show a randomly selected daily puzzle
    Daily,

    /// Search puzzles
    #[command(
        name = "search",
        long_about = "Search puzzles by author, date, answer word, or clue text.\n\n\
            Substring filters (author, word, clue) are case-insensitive; date is \
            an exact match against the stored M/D/YYYY string. Filters combine \
            with AND.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Puzzles by an author
    gridwit search --author shortz

    # Puzzles whose answers contain a word
    gridwit search --word zephyr --per-page 5

    # Combine filters
    gridwit search --author mahowald --clue \"youngster\""
    )]
    Search {
        /// Match author names containing this text
        #[arg(long)]
        author: Option<String>,

        /// Match this exact publication date (M/D/YYYY)
        #[arg(long)]
        date: Option<String>,

        /// Match answers containing this word
        #[arg(long)]
        word: Option<String>,

        /// Match clue text containing this phrase
        #[arg(long)]
        clue: Option<String>,

        /// Page number (1-based)
        #[arg(long, default_value_t = 1)]
        page: u64,

        /// Results per page (max 50)
        #[arg(long, value_name = "N")]
        per_page: Option<u64>,
    },

    /// Report archive health and record counts
    Status,

    /// Print sample records and aggregate statistics
    Verify,

    /// User management
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Per-user solving progress
    Progress {
        #[command(subcommand)]
        action: ProgressAction,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// User subcommands.
#[derive(Subcommand, Debug)]
pub enum UserAction {
    /// Create a user
    Create {
        #[arg(long)]
        username: String,

        #[arg(long)]
        email: String,
    },

    /// List a user's saved puzzles
    Puzzles {
        /// User id
        #[arg(value_name = "USER_ID")]
        user_id: i64,
    },
}

/// Progress subcommands.
#[derive(Subcommand, Debug)]
pub enum ProgressAction {
    /// Record progress on a puzzle (creates the entry)
    Save {
        #[arg(value_name = "USER_ID")]
        user_id: i64,

        #[arg(value_name = "PUZZLE_ID")]
        puzzle_id: i64,

        /// Progress state as a JSON document
        #[arg(long, value_name = "JSON")]
        progress: String,

        /// Mark the puzzle completed
        #[arg(long)]
        completed: bool,
    },

    /// Update existing progress
    Update {
        #[arg(value_name = "USER_ID")]
        user_id: i64,

        #[arg(value_name = "PUZZLE_ID")]
        puzzle_id: i64,

        /// Progress state as a JSON document
        #[arg(long, value_name = "JSON")]
        progress: String,

        /// Set the completed flag (leaves it unchanged when omitted)
        #[arg(long)]
        completed: Option<bool>,
    },
}

//! store::schema
//!
//! Connection setup, DDL, and schema version tracking.
//!
//! # Pragmas
//!
//! Every connection gets WAL journaling, `foreign_keys=ON` (the cascade
//! from puzzles to clues and saved progress depends on it), and a busy
//! timeout. Pragmas are connection-specific in SQLite, so they are
//! applied on every open, not only at creation.

use std::path::Path;

use rusqlite::{params, Connection};

use super::traits::StoreError;

/// Current schema version.
pub const SCHEMA_VERSION: i32 = 1;

const CREATE_TABLES: &str = "
CREATE TABLE IF NOT EXISTS puzzles (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    date_published TEXT,
    author TEXT,
    grid TEXT,
    created_at TEXT DEFAULT CURRENT_TIMESTAMP,
    updated_at TEXT
);
CREATE INDEX IF NOT EXISTS idx_puzzles_date ON puzzles(date_published);

CREATE TABLE IF NOT EXISTS clues (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    puzzle_id INTEGER REFERENCES puzzles(id) ON DELETE CASCADE,
    number INTEGER,
    direction TEXT,
    text TEXT,
    answer TEXT,
    \"row\" INTEGER,
    \"column\" INTEGER,
    created_at TEXT DEFAULT CURRENT_TIMESTAMP,
    updated_at TEXT
);
CREATE INDEX IF NOT EXISTS idx_puzzle_direction ON clues(puzzle_id, direction);

CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT UNIQUE NOT NULL,
    email TEXT UNIQUE NOT NULL,
    created_at TEXT DEFAULT CURRENT_TIMESTAMP
);

CREATE TABLE IF NOT EXISTS saved_puzzles (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id INTEGER REFERENCES users(id) ON DELETE CASCADE,
    puzzle_id INTEGER REFERENCES puzzles(id) ON DELETE CASCADE,
    progress TEXT,
    completed INTEGER NOT NULL DEFAULT 0,
    last_played TEXT,
    created_at TEXT DEFAULT CURRENT_TIMESTAMP
);

CREATE TABLE IF NOT EXISTS daily_puzzle_history (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    puzzle_id INTEGER REFERENCES puzzles(id) ON DELETE CASCADE,
    served_date TEXT DEFAULT CURRENT_TIMESTAMP,
    cycle_number INTEGER DEFAULT 1
);
";

/// Open a connection with standard pragmas applied.
///
/// # Errors
///
/// Returns `StoreError::Database` if the file cannot be opened or a
/// pragma fails.
pub fn open(path: &Path) -> Result<Connection, StoreError> {
    let conn = Connection::open(path)?;
    configure(&conn)?;
    Ok(conn)
}

/// Open an in-memory connection (tests).
pub fn open_in_memory() -> Result<Connection, StoreError> {
    let conn = Connection::open_in_memory()?;
    configure(&conn)?;
    Ok(conn)
}

fn configure(conn: &Connection) -> Result<(), StoreError> {
    // journal_mode returns the resulting mode, so it needs query_row.
    // In-memory databases report "memory" here; that is fine.
    let _mode: String = conn.query_row("PRAGMA journal_mode=WAL", [], |row| row.get(0))?;
    conn.execute_batch(
        "PRAGMA synchronous=NORMAL;
         PRAGMA foreign_keys=ON;
         PRAGMA busy_timeout=5000;",
    )?;
    Ok(())
}

/// Create all tables and record the schema version.
///
/// Idempotent: safe to call on an already-initialized database.
///
/// # Errors
///
/// Returns `StoreError::Database` on DDL failure.
pub fn ensure_schema(conn: &Connection) -> Result<(), StoreError> {
    ensure_version_tracking(conn)?;
    conn.execute_batch(CREATE_TABLES)?;
    if !is_version_applied(conn, SCHEMA_VERSION)? {
        mark_version_applied(conn, SCHEMA_VERSION, "initial puzzle archive schema")?;
    }
    Ok(())
}

/// Create the schema version tracking table.
fn ensure_version_tracking(conn: &Connection) -> Result<(), StoreError> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS _schema_versions (
            version INTEGER PRIMARY KEY,
            applied_at TEXT DEFAULT CURRENT_TIMESTAMP,
            description TEXT
        )",
        [],
    )?;
    Ok(())
}

/// Check whether a schema version has been applied.
pub fn is_version_applied(conn: &Connection, version: i32) -> Result<bool, StoreError> {
    let count: i32 = conn.query_row(
        "SELECT COUNT(*) FROM _schema_versions WHERE version = ?",
        params![version],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

/// Record a schema version as applied.
fn mark_version_applied(
    conn: &Connection,
    version: i32,
    description: &str,
) -> Result<(), StoreError> {
    conn.execute(
        "INSERT OR IGNORE INTO _schema_versions (version, description) VALUES (?, ?)",
        params![version, description],
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_schema_is_idempotent() {
        let conn = open_in_memory().unwrap();
        ensure_schema(&conn).unwrap();
        ensure_schema(&conn).unwrap();
        assert!(is_version_applied(&conn, SCHEMA_VERSION).unwrap());
    }

    #[test]
    fn unapplied_version_reports_false() {
        let conn = open_in_memory().unwrap();
        ensure_schema(&conn).unwrap();
        assert!(!is_version_applied(&conn, 999).unwrap());
    }

    #[test]
    fn foreign_keys_are_enforced() {
        let conn = open_in_memory().unwrap();
        ensure_schema(&conn).unwrap();
        let result = conn.execute(
            "INSERT INTO clues (puzzle_id, number, direction, text, answer, \"row\", \"column\")
             VALUES (999, 1, 'across', 't', 'a', 0, 0)",
            [],
        );
        assert!(result.is_err());
    }
}

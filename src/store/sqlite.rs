//! store::sqlite
//!
//! SQLite-backed [`PuzzleStore`].
//!
//! # Transactions
//!
//! The importer drives the `begin`/`commit`/`rollback` protocol
//! explicitly, so this store issues `BEGIN IMMEDIATE` / `COMMIT` /
//! `ROLLBACK` statements itself rather than borrowing the connection
//! through a [`rusqlite::Transaction`] guard. A flag tracks the open
//! transaction to catch protocol misuse early.

use std::path::Path;

use rusqlite::{params, Connection};

use crate::core::records::{NewClue, NewPuzzle};

use super::schema;
use super::traits::{PuzzleStore, StoreError};

/// SQLite-backed puzzle archive.
pub struct SqliteStore {
    conn: Connection,
    tx_open: bool,
}

impl SqliteStore {
    /// Open (and initialize if needed) an archive at `path`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Database` if the file cannot be opened or
    /// the schema cannot be created.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let conn = schema::open(path)?;
        schema::ensure_schema(&conn)?;
        Ok(Self {
            conn,
            tx_open: false,
        })
    }

    /// Open an in-memory archive (tests).
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = schema::open_in_memory()?;
        schema::ensure_schema(&conn)?;
        Ok(Self {
            conn,
            tx_open: false,
        })
    }

    /// The underlying connection, for the read-side query methods.
    pub(crate) fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl PuzzleStore for SqliteStore {
    fn refresh(&mut self) -> Result<(), StoreError> {
        if self.tx_open {
            return Err(StoreError::Transaction(
                "refresh must not run inside a document transaction".to_string(),
            ));
        }
        // Clues first: explicit rather than leaning on the cascade, so a
        // database created without foreign_keys still clears fully.
        self.conn.execute_batch(
            "BEGIN IMMEDIATE;
             DELETE FROM clues;
             DELETE FROM puzzles;
             COMMIT;",
        )?;
        Ok(())
    }

    fn begin(&mut self) -> Result<(), StoreError> {
        if self.tx_open {
            return Err(StoreError::Transaction(
                "transaction already in progress".to_string(),
            ));
        }
        self.conn.execute_batch("BEGIN IMMEDIATE")?;
        self.tx_open = true;
        Ok(())
    }

    fn commit(&mut self) -> Result<(), StoreError> {
        if !self.tx_open {
            return Err(StoreError::Transaction(
                "commit with no transaction in progress".to_string(),
            ));
        }
        self.conn.execute_batch("COMMIT")?;
        self.tx_open = false;
        Ok(())
    }

    fn rollback(&mut self) -> Result<(), StoreError> {
        if !self.tx_open {
            return Err(StoreError::Transaction(
                "rollback with no transaction in progress".to_string(),
            ));
        }
        self.conn.execute_batch("ROLLBACK")?;
        self.tx_open = false;
        Ok(())
    }

    fn insert_puzzle(&mut self, puzzle: &NewPuzzle) -> Result<i64, StoreError> {
        self.conn.execute(
            "INSERT INTO puzzles (date_published, author, grid) VALUES (?, ?, ?)",
            params![puzzle.date_published, puzzle.author, puzzle.grid],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn insert_clues(&mut self, puzzle_id: i64, clues: &[NewClue]) -> Result<(), StoreError> {
        let mut stmt = self.conn.prepare_cached(
            "INSERT INTO clues (puzzle_id, number, direction, text, answer, \"row\", \"column\")
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )?;
        for clue in clues {
            stmt.execute(params![
                puzzle_id,
                clue.number,
                clue.direction.as_str(),
                clue.text,
                clue.answer,
                clue.position.row as i64,
                clue.position.col as i64,
            ])?;
        }
        Ok(())
    }
}

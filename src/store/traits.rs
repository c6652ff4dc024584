//! store::traits
//!
//! Storage collaborator trait for the import pipeline.
//!
//! # Design
//!
//! The importer sees storage through this narrow, synchronous interface:
//! a destructive refresh, a per-document transaction protocol, and two
//! insert operations. Storage round-trips are plain blocking calls; one
//! document is fully persisted before the next begins.
//!
//! # Transaction protocol
//!
//! Per document: `begin`, `insert_puzzle` (returns the generated id),
//! `insert_clues` with that id, `commit`. On any failure the importer
//! calls `rollback` and moves on; the document's puzzle and clues are
//! never partially persisted.

use thiserror::Error;

use crate::core::records::{NewClue, NewPuzzle};

/// Errors from storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying SQLite failure.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// The requested record does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// A record failed shape validation on read (corrupt row).
    #[error("invalid record: {0}")]
    InvalidRecord(String),

    /// `commit`/`rollback` called with no transaction open, or `begin`
    /// called while one is open.
    #[error("transaction state error: {0}")]
    Transaction(String),

    /// Backend-specific failure (used by test doubles).
    #[error("storage failure: {0}")]
    Backend(String),
}

/// Storage collaborator consumed by the batch importer.
///
/// Implementations must make `insert_puzzle` + `insert_clues` atomic per
/// document via the `begin`/`commit`/`rollback` protocol: after
/// `rollback`, nothing from the open transaction is visible.
pub trait PuzzleStore {
    /// Delete every puzzle and clue record.
    ///
    /// Destructive: this is a full-refresh reset, not an upsert. Callers
    /// that want to keep existing data must not call it.
    fn refresh(&mut self) -> Result<(), StoreError>;

    /// Open a transaction for one document.
    fn begin(&mut self) -> Result<(), StoreError>;

    /// Commit the open transaction.
    fn commit(&mut self) -> Result<(), StoreError>;

    /// Abandon the open transaction, discarding its inserts.
    fn rollback(&mut self) -> Result<(), StoreError>;

    /// Insert a puzzle record, returning its generated id.
    fn insert_puzzle(&mut self, puzzle: &NewPuzzle) -> Result<i64, StoreError>;

    /// Insert clue records belonging to the puzzle with `puzzle_id`.
    fn insert_clues(&mut self, puzzle_id: i64, clues: &[NewClue]) -> Result<(), StoreError>;
}

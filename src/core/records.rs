//! core::records
//!
//! Persisted and to-be-persisted record types.
//!
//! `New*` types describe records before insertion (no id yet); the plain
//! types mirror database rows. Serialized field names match the archive's
//! external JSON vocabulary (`column`, `date_published`, ...).

use serde::{Deserialize, Serialize};

use super::types::{Direction, Position};

/// A puzzle record ready for insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPuzzle {
    /// Publication date, verbatim from the source (`M/D/YYYY`).
    pub date_published: String,
    pub author: String,
    /// Grid cells serialized as a JSON array string.
    pub grid: String,
}

/// A clue record ready for insertion, with its resolved start position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewClue {
    pub number: u32,
    pub direction: Direction,
    pub text: String,
    pub answer: String,
    pub position: Position,
}

/// A persisted puzzle row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    pub id: i64,
    pub date_published: String,
    pub author: String,
    pub grid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// A persisted clue row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    pub id: i64,
    pub puzzle_id: i64,
    pub number: u32,
    pub direction: Direction,
    pub text: String,
    pub answer: String,
    pub row: usize,
    #[serde(rename = "column")]
    pub col: usize,
}

/// A puzzle together with its clues, ordered by clue number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleWithClues {
    #[serde(flatten)]
    pub puzzle: Puzzle,
    pub clues: Vec<Clue>,
}

/// Minimal puzzle identification embedded in progress listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleSummary {
    pub date_published: String,
    pub author: String,
}

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// One user's progress on one puzzle.
///
/// `progress` is an opaque JSON blob owned by the client (grid fill
/// state); the store round-trips it without interpretation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedProgress {
    pub puzzle_id: i64,
    pub progress: serde_json::Value,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_played: Option<String>,
}

/// A progress entry joined with its puzzle's identification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPuzzle {
    #[serde(flatten)]
    pub progress: SavedProgress,
    pub puzzle: PuzzleSummary,
}

/// One page of puzzle search or listing results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzlePage {
    pub puzzles: Vec<PuzzleWithClues>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

/// Archive health summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusReport {
    pub puzzle_count: u64,
    pub clue_count: u64,
    pub timestamp: String,
}

//! core::document
//!
//! Typed source document parsing.
//!
//! # Overview
//!
//! Source puzzles arrive as JSON documents with a flat cell grid, a
//! parallel per-cell numbering array, and flattened across/down clue and
//! answer lists. This module parses that shape into [`RawPuzzle`] exactly
//! once at the boundary. A document missing a required field, or whose
//! grid arrays do not match the declared size, is rejected with a single
//! [`DocumentError`] before any processing begins.
//!
//! # Document shape
//!
//! ```json
//! {
//!   "date": "11/6/2004",
//!   "author": "Kyle Mahowald",
//!   "grid": ["X", "A", ".", ...],
//!   "gridnums": [1, 2, 0, ...],
//!   "clues": { "across": ["1. Sum of money", ...], "down": [...] },
//!   "answers": { "across": ["XAMOUNT", ...], "down": [...] }
//! }
//! ```

use serde::Deserialize;
use thiserror::Error;

use super::types::{Grid, TypeError};

/// Errors from document parsing and shape validation.
///
/// Every variant fails the whole document. Per-clue resolution problems
/// are not errors (see [`crate::ingest::normalize`]).
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The JSON is unreadable or a required field is missing/mistyped.
    #[error("malformed document: {0}")]
    Malformed(String),

    /// The grid array does not describe a `size x size` grid.
    #[error("malformed document: {0}")]
    BadGrid(#[from] TypeError),

    /// The gridnums array length does not match the grid.
    #[error("malformed document: expected {expected} grid numbers, got {actual}")]
    BadGridnumsLength { expected: usize, actual: usize },

    /// A clue string has no parseable leading number ("N. text").
    #[error("malformed clue: no leading number in {0:?}")]
    BadClueNumber(String),
}

/// Across/down halves of a clue or answer list.
#[derive(Debug, Clone, Deserialize)]
pub struct EntryLists {
    pub across: Vec<String>,
    pub down: Vec<String>,
}

/// A raw puzzle document, parsed but not yet normalized.
///
/// Field presence is enforced by the deserializer; array shapes are
/// checked by [`RawPuzzle::grid`]. The `date` string is stored verbatim
/// in the `M/D/YYYY` form supplied by the source and not validated
/// further.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPuzzle {
    /// Publication date as given by the source.
    pub date: String,

    /// Puzzle author.
    pub author: String,

    /// Row-major cell values; `"."` marks a block.
    pub grid: Vec<String>,

    /// Externally supplied per-cell numbering; `0` means unnumbered.
    pub gridnums: Vec<u32>,

    /// Clue text lists, each entry in `"N. text"` form.
    pub clues: EntryLists,

    /// Answer lists, order-aligned with `clues`.
    pub answers: EntryLists,
}

impl RawPuzzle {
    /// Parse a document from JSON.
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::Malformed` if the JSON cannot be parsed
    /// into the document shape (missing fields included).
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        serde_json::from_str(json).map_err(|e| DocumentError::Malformed(e.to_string()))
    }

    /// Validate the grid arrays against `size` and build the [`Grid`].
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::BadGrid` for a malformed cell array and
    /// `DocumentError::BadGridnumsLength` when the numbering array does
    /// not cover every cell.
    pub fn grid(&self, size: usize) -> Result<Grid, DocumentError> {
        let grid = Grid::new(self.grid.clone(), size)?;
        let expected = size * size;
        if self.gridnums.len() != expected {
            return Err(DocumentError::BadGridnumsLength {
                expected,
                actual: self.gridnums.len(),
            });
        }
        Ok(grid)
    }
}

/// Split a raw clue string on its first `.` into (number, text).
///
/// The remainder is trimmed of leading whitespace. The clue number prefix
/// is required; a string without one fails the whole document, matching
/// the strictness of required-field validation.
///
/// # Example
///
/// ```
/// use gridwit::core::document::split_clue;
///
/// let (number, text) = split_clue("12. Capital of France").unwrap();
/// assert_eq!(number, 12);
/// assert_eq!(text, "Capital of France");
/// ```
pub fn split_clue(raw: &str) -> Result<(u32, &str), DocumentError> {
    let (prefix, rest) = raw
        .split_once('.')
        .ok_or_else(|| DocumentError::BadClueNumber(raw.to_string()))?;
    let number: u32 = prefix
        .trim()
        .parse()
        .map_err(|_| DocumentError::BadClueNumber(raw.to_string()))?;
    Ok((number, rest.trim_start()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_json() -> String {
        serde_json::json!({
            "date": "11/6/2004",
            "author": "Kyle Mahowald",
            "grid": ["A", "B", ".", "C"],
            "gridnums": [1, 2, 0, 0],
            "clues": { "across": ["1. First"], "down": ["2. Second"] },
            "answers": { "across": ["AB"], "down": ["BC"] }
        })
        .to_string()
    }

    #[test]
    fn parses_complete_document() {
        let doc = RawPuzzle::from_json(&doc_json()).unwrap();
        assert_eq!(doc.date, "11/6/2004");
        assert_eq!(doc.author, "Kyle Mahowald");
        assert_eq!(doc.grid.len(), 4);
        assert_eq!(doc.clues.across, vec!["1. First"]);
        assert_eq!(doc.answers.down, vec!["BC"]);
    }

    #[test]
    fn missing_field_is_malformed() {
        let json = serde_json::json!({
            "date": "11/6/2004",
            "grid": [],
            "gridnums": [],
            "clues": { "across": [], "down": [] },
            "answers": { "across": [], "down": [] }
        })
        .to_string();
        let err = RawPuzzle::from_json(&json).unwrap_err();
        assert!(matches!(err, DocumentError::Malformed(_)));
    }

    #[test]
    fn invalid_json_is_malformed() {
        assert!(matches!(
            RawPuzzle::from_json("{not json"),
            Err(DocumentError::Malformed(_))
        ));
    }

    #[test]
    fn grid_validates_cell_count() {
        let doc = RawPuzzle::from_json(&doc_json()).unwrap();
        assert!(doc.grid(2).is_ok());
        assert!(matches!(doc.grid(3), Err(DocumentError::BadGrid(_))));
    }

    #[test]
    fn grid_validates_gridnums_length() {
        let mut doc = RawPuzzle::from_json(&doc_json()).unwrap();
        doc.gridnums.pop();
        let err = doc.grid(2).unwrap_err();
        assert!(matches!(
            err,
            DocumentError::BadGridnumsLength {
                expected: 4,
                actual: 3,
            }
        ));
    }

    mod clue_splitting {
        use super::*;

        #[test]
        fn splits_on_first_dot() {
            let (number, text) = split_clue("5. Smart youngster").unwrap();
            assert_eq!(number, 5);
            assert_eq!(text, "Smart youngster");
        }

        #[test]
        fn later_dots_stay_in_text() {
            let (number, text) = split_clue("3. Abbr. for mister").unwrap();
            assert_eq!(number, 3);
            assert_eq!(text, "Abbr. for mister");
        }

        #[test]
        fn trims_leading_whitespace_only() {
            let (_, text) = split_clue("7.   Trailing space ").unwrap();
            assert_eq!(text, "Trailing space ");
        }

        #[test]
        fn missing_dot_rejected() {
            assert!(matches!(
                split_clue("no number here"),
                Err(DocumentError::BadClueNumber(_))
            ));
        }

        #[test]
        fn non_numeric_prefix_rejected() {
            assert!(matches!(
                split_clue("abc. text"),
                Err(DocumentError::BadClueNumber(_))
            ));
        }
    }
}

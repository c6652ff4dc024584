//! ingest::normalize
//!
//! Turn one raw document into a puzzle record plus resolved clue records.
//!
//! # Pipeline
//!
//! 1. Validate the document's grid arrays and build the [`Grid`].
//! 2. Index start positions by `(direction, number)` from the document's
//!    own `gridnums` ([`StartPositions::from_gridnums`]).
//! 3. Split each clue string on its first `.` into number and text, pair
//!    it with the answer at the same index in the same direction's list,
//!    and look the number up in the index.
//! 4. Clues whose number has no matching start position are dropped, not
//!    errors; the drop count is reported on [`NormalizedPuzzle`] so the
//!    loss is observable.
//!
//! Output clues keep source-list order: across entries first, then down.
//!
//! Clue and answer lists are assumed order-aligned and equal length; a
//! length mismatch silently truncates to the shorter list (caller
//! contract, same as the source pipeline this replaces).

use crate::core::document::{split_clue, DocumentError, RawPuzzle};
use crate::core::records::{NewClue, NewPuzzle};
use crate::core::types::{Direction, DEFAULT_GRID_SIZE};

use super::scan::StartPositions;

/// The result of normalizing one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedPuzzle {
    pub puzzle: NewPuzzle,
    /// Resolved clues, across then down, in source order.
    pub clues: Vec<NewClue>,
    /// Clues whose number had no matching start position.
    pub dropped: usize,
}

/// Normalize a raw document using the standard grid size.
///
/// # Errors
///
/// Returns [`DocumentError`] if the grid arrays are malformed or any clue
/// string lacks a parseable leading number. Unresolvable clue numbers are
/// not errors; they are dropped and counted.
pub fn normalize(doc: &RawPuzzle) -> Result<NormalizedPuzzle, DocumentError> {
    normalize_sized(doc, DEFAULT_GRID_SIZE)
}

/// Normalize a raw document against an explicit grid size.
pub fn normalize_sized(doc: &RawPuzzle, size: usize) -> Result<NormalizedPuzzle, DocumentError> {
    let grid = doc.grid(size)?;
    let index = StartPositions::from_gridnums(&grid, &doc.gridnums);

    let mut clues = Vec::new();
    let mut dropped = 0;

    let lists = [
        (Direction::Across, &doc.clues.across, &doc.answers.across),
        (Direction::Down, &doc.clues.down, &doc.answers.down),
    ];
    for (direction, clue_texts, answers) in lists {
        for (raw, answer) in clue_texts.iter().zip(answers.iter()) {
            let (number, text) = split_clue(raw)?;
            match index.get(direction, number) {
                Some(position) => clues.push(NewClue {
                    number,
                    direction,
                    text: text.to_string(),
                    answer: answer.clone(),
                    position,
                }),
                None => dropped += 1,
            }
        }
    }

    let puzzle = NewPuzzle {
        date_published: doc.date.clone(),
        author: doc.author.clone(),
        grid: grid
            .to_json()
            .map_err(|e| DocumentError::Malformed(e.to_string()))?,
    };

    Ok(NormalizedPuzzle {
        puzzle,
        clues,
        dropped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Position;

    /// Build a document over a 2x2 grid:
    ///
    /// ```text
    /// A B
    /// C D
    /// ```
    ///
    /// Standard numbering: 1-Across (AB), 1-Down (AC), 2-Down (BD),
    /// 3-Across (CD).
    fn doc() -> RawPuzzle {
        let json = serde_json::json!({
            "date": "11/6/2004",
            "author": "Kyle Mahowald",
            "grid": ["A", "B", "C", "D"],
            "gridnums": [1, 2, 3, 0],
            "clues": {
                "across": ["1. Top row", "3. Bottom row"],
                "down": ["1. Left column", "2. Right column"]
            },
            "answers": {
                "across": ["AB", "CD"],
                "down": ["AC", "BD"]
            }
        })
        .to_string();
        RawPuzzle::from_json(&json).unwrap()
    }

    #[test]
    fn resolves_every_clue_when_numbers_match() {
        let normalized = normalize_sized(&doc(), 2).unwrap();

        assert_eq!(normalized.clues.len(), 4);
        assert_eq!(normalized.dropped, 0);
        assert_eq!(normalized.puzzle.date_published, "11/6/2004");
        assert_eq!(normalized.puzzle.author, "Kyle Mahowald");
    }

    #[test]
    fn output_is_across_then_down_in_source_order() {
        let normalized = normalize_sized(&doc(), 2).unwrap();
        let order: Vec<(Direction, u32)> = normalized
            .clues
            .iter()
            .map(|c| (c.direction, c.number))
            .collect();

        assert_eq!(
            order,
            vec![
                (Direction::Across, 1),
                (Direction::Across, 3),
                (Direction::Down, 1),
                (Direction::Down, 2),
            ]
        );
    }

    #[test]
    fn positions_come_from_supplied_numbering() {
        let normalized = normalize_sized(&doc(), 2).unwrap();

        let one_across = &normalized.clues[0];
        assert_eq!(one_across.position, Position::new(0, 0));
        assert_eq!(one_across.text, "Top row");
        assert_eq!(one_across.answer, "AB");

        let three_across = &normalized.clues[1];
        assert_eq!(three_across.position, Position::new(1, 0));
    }

    #[test]
    fn unresolved_clue_is_dropped_not_fatal() {
        let mut d = doc();
        d.clues.across.push("9. Phantom entry".to_string());
        d.answers.across.push("XX".to_string());

        let normalized = normalize_sized(&d, 2).unwrap();
        assert_eq!(normalized.clues.len(), 4);
        assert_eq!(normalized.dropped, 1);
    }

    #[test]
    fn grid_is_serialized_as_json_array() {
        let normalized = normalize_sized(&doc(), 2).unwrap();
        let cells: Vec<String> = serde_json::from_str(&normalized.puzzle.grid).unwrap();
        assert_eq!(cells, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn clue_without_number_fails_the_document() {
        let mut d = doc();
        d.clues.down[0] = "no number".to_string();
        assert!(matches!(
            normalize_sized(&d, 2),
            Err(DocumentError::BadClueNumber(_))
        ));
    }

    #[test]
    fn wrong_grid_shape_fails_the_document() {
        let d = doc();
        assert!(normalize_sized(&d, 3).is_err());
    }

    #[test]
    fn extra_answers_are_truncated() {
        let mut d = doc();
        d.answers.down.push("ORPHAN".to_string());
        let normalized = normalize_sized(&d, 2).unwrap();
        assert_eq!(normalized.clues.len(), 4);
        assert_eq!(normalized.dropped, 0);
    }

    #[test]
    fn blocked_column_scenario() {
        // 15x15, all playable except column 7 entirely blocked.
        let size = 15;
        let mut cells = Vec::with_capacity(size * size);
        for _row in 0..size {
            for col in 0..size {
                cells.push(if col == 7 { ".".to_string() } else { "X".to_string() });
            }
        }
        let mut gridnums = vec![0u32; size * size];
        gridnums[0] = 1;

        let json = serde_json::json!({
            "date": "1/1/2020",
            "author": "Test Author",
            "grid": cells,
            "gridnums": gridnums,
            "clues": { "across": ["1. Start"], "down": [] },
            "answers": { "across": ["ABCDE"], "down": [] }
        })
        .to_string();
        let d = RawPuzzle::from_json(&json).unwrap();

        let normalized = normalize(&d).unwrap();
        assert_eq!(normalized.clues.len(), 1);
        let clue = &normalized.clues[0];
        assert_eq!(clue.number, 1);
        assert_eq!(clue.direction, Direction::Across);
        assert_eq!(clue.position, Position::new(0, 0));
    }
}

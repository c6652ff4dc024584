//! verify command - Print sample records and aggregate statistics
//!
//! A human-readable spot check of imported data: a few puzzles, the
//! first puzzle's clues by direction, per-puzzle clue counts, and
//! archive totals.

use anyhow::Result;

use crate::cli::Context;
use crate::core::types::{Direction, Grid, DEFAULT_GRID_SIZE};
use crate::ingest::scan::scan;
use crate::ui::output;

use super::open_store;

/// Maximum puzzles sampled.
const SAMPLE_PUZZLES: u64 = 5;

/// Maximum clues listed per direction.
const SAMPLE_CLUES: usize = 10;

/// Print a verification report for the archive.
pub fn verify(ctx: &Context) -> Result<()> {
    let store = open_store(ctx)?;
    let v = ctx.verbosity;

    let page = store.list_puzzles(1, SAMPLE_PUZZLES)?;

    output::print("** Sample Puzzles **", v);
    for bundle in &page.puzzles {
        let puzzle = &bundle.puzzle;
        output::print(format!("Puzzle ID: {}", puzzle.id), v);
        output::print(format!("Date Published: {}", puzzle.date_published), v);
        output::print(format!("Author: {}", puzzle.author), v);
        let preview: String = puzzle.grid.chars().take(50).collect();
        output::print(format!("Grid: {preview}..."), v);
        output::print("---", v);
    }

    if let Some(first) = page.puzzles.first() {
        output::print(format!("\n** Clues for Puzzle ID {} **", first.puzzle.id), v);
        for direction in [Direction::Across, Direction::Down] {
            output::print(format!("\n{} CLUES:", direction.as_str().to_uppercase()), v);
            let clues = first
                .clues
                .iter()
                .filter(|c| c.direction == direction)
                .take(SAMPLE_CLUES);
            for clue in clues {
                output::print(format!("{}. {}", clue.number, clue.text), v);
                output::print(format!("   Answer: {}", clue.answer), v);
                output::print(format!("   Position: ({}, {})", clue.row, clue.col), v);
            }
        }
    }

    // Cross-check: recompute standard numbering from the stored grid
    // and compare entry-start counts against the stored clue counts.
    if let Some(first) = page.puzzles.first() {
        let cells: Vec<String> = serde_json::from_str(&first.puzzle.grid)?;
        match Grid::new(cells, DEFAULT_GRID_SIZE) {
            Ok(grid) => {
                let positions = scan(&grid);
                output::print(
                    format!(
                        "\nComputed entry starts: {} across, {} down",
                        positions.across().len(),
                        positions.down().len()
                    ),
                    v,
                );
            }
            Err(e) => output::warn(
                format!("puzzle {} grid not scannable: {e}", first.puzzle.id),
                v,
            ),
        }
    }

    for bundle in page.puzzles.iter().take(3) {
        let counts = store.clue_counts(bundle.puzzle.id)?;
        output::print(format!("\nPuzzle {} clue counts:", bundle.puzzle.id), v);
        output::print(format!("Across clues: {}", counts.across), v);
        output::print(format!("Down clues: {}", counts.down), v);
        output::print(format!("Total clues: {}", counts.total()), v);
    }

    let totals = store.status()?;
    output::print(format!("\nTotal Puzzles: {}", totals.puzzle_count), v);
    output::print(format!("Total Clues: {}", totals.clue_count), v);
    let average = if totals.puzzle_count == 0 {
        0.0
    } else {
        totals.clue_count as f64 / totals.puzzle_count as f64
    };
    output::print(format!("Average Clues per Puzzle: {average:.1}"), v);

    Ok(())
}

//! ingest::scan
//!
//! Grid scanning: where do entries start, and what number labels them?
//!
//! # Numbering
//!
//! Standard crossword numbering walks cells in row-major order and gives
//! the next counter value (starting at 1) to every cell that begins at
//! least one entry. A cell beginning both an across and a down entry
//! consumes a single number that labels both. Playable cells that begin
//! no entry (isolated single cells) are never numbered.
//!
//! An entry start requires a run of length >= 2:
//!
//! - **across-start**: playable, nothing playable to the left (boundary
//!   or block), and a playable cell to the right
//! - **down-start**: playable, nothing playable above, and a playable
//!   cell below
//!
//! # Two numbering sources
//!
//! [`scan`] computes numbering from scratch. Source documents, however,
//! ship their own per-cell numbering (`gridnums`) which is what the clue
//! text actually references, so clue resolution uses
//! [`StartPositions::from_gridnums`]: the same boundary tests, keyed by
//! the supplied numbers. Keeping both paths means a document whose
//! supplied numbering disagrees with the computed one still resolves its
//! clues against the numbers it uses.

use std::collections::BTreeMap;

use crate::core::types::{Direction, Grid, Position};

/// Start positions for across and down entries, keyed by clue number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartPositions {
    across: BTreeMap<u32, Position>,
    down: BTreeMap<u32, Position>,
}

impl StartPositions {
    /// Build a position index from the document's own cell numbering.
    ///
    /// Every cell with a supplied number > 0 is tested with the same
    /// across-start/down-start conditions as [`scan`]; matching cells are
    /// recorded under the supplied number for the matching direction(s).
    pub fn from_gridnums(grid: &Grid, gridnums: &[u32]) -> Self {
        let size = grid.size();
        let mut positions = StartPositions::default();

        for row in 0..size {
            for col in 0..size {
                let number = gridnums[grid.index(row, col)];
                if number == 0 {
                    continue;
                }
                if is_across_start(grid, row, col) {
                    positions.across.insert(number, Position::new(row, col));
                }
                if is_down_start(grid, row, col) {
                    positions.down.insert(number, Position::new(row, col));
                }
            }
        }

        positions
    }

    /// Look up the start position for a (direction, number) pair.
    pub fn get(&self, direction: Direction, number: u32) -> Option<Position> {
        match direction {
            Direction::Across => self.across.get(&number).copied(),
            Direction::Down => self.down.get(&number).copied(),
        }
    }

    /// Across entry starts by number, in number order.
    pub fn across(&self) -> &BTreeMap<u32, Position> {
        &self.across
    }

    /// Down entry starts by number, in number order.
    pub fn down(&self) -> &BTreeMap<u32, Position> {
        &self.down
    }
}

/// Compute standard crossword numbering for a grid.
///
/// Iterates cells in row-major order, assigning an incrementing counter
/// (from 1) to each cell that starts an entry in either direction.
///
/// # Example
///
/// ```
/// use gridwit::core::types::{Direction, Grid, Position};
/// use gridwit::ingest::scan::scan;
///
/// // C A T
/// // . . A
/// // . . B
/// let cells: Vec<String> = "CAT..A..B".chars().map(|c| c.to_string()).collect();
/// let grid = Grid::new(cells, 3).unwrap();
/// let positions = scan(&grid);
///
/// // (0,0) starts the across run "CAT" and takes number 1; (0,2) starts
/// // the down run "TAB" and takes the next number.
/// assert_eq!(positions.get(Direction::Across, 1), Some(Position::new(0, 0)));
/// assert_eq!(positions.get(Direction::Down, 2), Some(Position::new(0, 2)));
/// ```
pub fn scan(grid: &Grid) -> StartPositions {
    let size = grid.size();
    let mut positions = StartPositions::default();
    let mut number: u32 = 1;

    for row in 0..size {
        for col in 0..size {
            if grid.is_block(row, col) {
                continue;
            }

            let across = is_across_start(grid, row, col);
            let down = is_down_start(grid, row, col);
            if !across && !down {
                continue;
            }

            if across {
                positions.across.insert(number, Position::new(row, col));
            }
            if down {
                positions.down.insert(number, Position::new(row, col));
            }
            number += 1;
        }
    }

    positions
}

/// Does (row, col) begin a horizontal run of length >= 2?
fn is_across_start(grid: &Grid, row: usize, col: usize) -> bool {
    grid.is_playable(row, col)
        && (col == 0 || grid.is_block(row, col - 1))
        && (col < grid.size() - 1 && grid.is_playable(row, col + 1))
}

/// Does (row, col) begin a vertical run of length >= 2?
fn is_down_start(grid: &Grid, row: usize, col: usize) -> bool {
    grid.is_playable(row, col)
        && (row == 0 || grid.is_block(row - 1, col))
        && (row < grid.size() - 1 && grid.is_playable(row + 1, col))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(pattern: &str, size: usize) -> Grid {
        let cells = pattern.chars().map(|c| c.to_string()).collect();
        Grid::new(cells, size).unwrap()
    }

    mod computed_numbering {
        use super::*;

        #[test]
        fn single_row_run_gets_one_across_start() {
            // . . .
            // A B C
            // . . .
            let g = grid("...ABC...", 3);
            let positions = scan(&g);

            assert_eq!(positions.across().len(), 1);
            assert_eq!(positions.get(Direction::Across, 1), Some(Position::new(1, 0)));
            assert!(positions.down().is_empty());
        }

        #[test]
        fn isolated_cell_is_not_numbered() {
            // . . .
            // . A .
            // . . .
            let g = grid("....A....", 3);
            let positions = scan(&g);

            assert!(positions.across().is_empty());
            assert!(positions.down().is_empty());
        }

        #[test]
        fn shared_number_for_both_directions() {
            // A B
            // C D
            let g = grid("ABCD", 2);
            let positions = scan(&g);

            // (0,0) starts both 1-Across and 1-Down; (0,1) starts 2-Down;
            // (1,0) starts 3-Across.
            assert_eq!(positions.get(Direction::Across, 1), Some(Position::new(0, 0)));
            assert_eq!(positions.get(Direction::Down, 1), Some(Position::new(0, 0)));
            assert_eq!(positions.get(Direction::Down, 2), Some(Position::new(0, 1)));
            assert_eq!(positions.get(Direction::Across, 3), Some(Position::new(1, 0)));
        }

        #[test]
        fn run_must_have_length_two() {
            // A .
            // B .
            let g = grid("A.B.", 2);
            let positions = scan(&g);

            // Vertical run of 2 starting at (0,0); no across entries.
            assert!(positions.across().is_empty());
            assert_eq!(positions.get(Direction::Down, 1), Some(Position::new(0, 0)));
        }

        #[test]
        fn counter_skips_blocks() {
            // A B .
            // . . .
            // C D .
            let g = grid("AB....CD.", 3);
            let positions = scan(&g);

            assert_eq!(positions.get(Direction::Across, 1), Some(Position::new(0, 0)));
            assert_eq!(positions.get(Direction::Across, 2), Some(Position::new(2, 0)));
        }

        #[test]
        fn full_open_grid_numbers_first_row_and_column() {
            let g = grid(&"A".repeat(9), 3);
            let positions = scan(&g);

            // Row 0: every cell starts a down run; (0,0) also starts across.
            assert_eq!(positions.get(Direction::Across, 1), Some(Position::new(0, 0)));
            assert_eq!(positions.get(Direction::Down, 1), Some(Position::new(0, 0)));
            assert_eq!(positions.get(Direction::Down, 2), Some(Position::new(0, 1)));
            assert_eq!(positions.get(Direction::Down, 3), Some(Position::new(0, 2)));
            assert_eq!(positions.get(Direction::Across, 4), Some(Position::new(1, 0)));
            assert_eq!(positions.get(Direction::Across, 5), Some(Position::new(2, 0)));
        }
    }

    mod gridnums_index {
        use super::*;

        #[test]
        fn uses_supplied_numbers() {
            // A B
            // C D
            let g = grid("ABCD", 2);
            // Deliberately non-standard numbering.
            let gridnums = vec![10, 20, 30, 0];
            let positions = StartPositions::from_gridnums(&g, &gridnums);

            assert_eq!(positions.get(Direction::Across, 10), Some(Position::new(0, 0)));
            assert_eq!(positions.get(Direction::Down, 10), Some(Position::new(0, 0)));
            assert_eq!(positions.get(Direction::Down, 20), Some(Position::new(0, 1)));
            assert_eq!(positions.get(Direction::Across, 30), Some(Position::new(1, 0)));
            // Computed numbering would have labelled these 1, 2, 3.
            assert_eq!(positions.get(Direction::Across, 1), None);
        }

        #[test]
        fn unnumbered_cells_are_skipped() {
            let g = grid("ABCD", 2);
            let positions = StartPositions::from_gridnums(&g, &[0, 0, 0, 0]);

            assert!(positions.across().is_empty());
            assert!(positions.down().is_empty());
        }

        #[test]
        fn numbered_non_start_cell_records_nothing() {
            // . . .
            // A B C
            // . . .
            let g = grid("...ABC...", 3);
            // Number on (1,1), mid-run: passes neither start test.
            let mut gridnums = vec![0; 9];
            gridnums[4] = 7;
            let positions = StartPositions::from_gridnums(&g, &gridnums);

            assert!(positions.across().is_empty());
            assert!(positions.down().is_empty());
        }

        #[test]
        fn matches_computed_numbering_on_standard_grid() {
            // A B .
            // C D .
            // . . .
            let g = grid("AB.CD....", 3);
            let computed = scan(&g);

            // Write the computed numbering into a gridnums array.
            let mut gridnums = vec![0; 9];
            for (number, pos) in computed.across() {
                gridnums[g.index(pos.row, pos.col)] = *number;
            }
            for (number, pos) in computed.down() {
                gridnums[g.index(pos.row, pos.col)] = *number;
            }

            let indexed = StartPositions::from_gridnums(&g, &gridnums);
            assert_eq!(indexed, computed);
        }
    }
}

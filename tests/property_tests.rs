//! Property-based tests for the grid scanner.
//!
//! These tests use proptest to verify the numbering invariants hold
//! across randomly generated grids.

use proptest::prelude::*;

use gridwit::core::types::{Direction, Grid};
use gridwit::ingest::scan::{scan, StartPositions};

/// Strategy for generating square grids of blocks and letters.
///
/// Sizes 2 through 8 keep the search space interesting without slowing
/// the suite down; each cell is a block with probability ~1/3.
fn arb_grid() -> impl Strategy<Value = Grid> {
    (2usize..=8).prop_flat_map(|size| {
        prop::collection::vec(
            prop_oneof![
                2 => prop::char::range('A', 'Z').prop_map(|c| c.to_string()),
                1 => Just(".".to_string()),
            ],
            size * size,
        )
        .prop_map(move |cells| Grid::new(cells, size).expect("generated grid is valid"))
    })
}

/// Re-derive the start conditions independently of the scanner.
fn is_start(grid: &Grid, row: usize, col: usize, direction: Direction) -> bool {
    let size = grid.size();
    if grid.is_block(row, col) {
        return false;
    }
    match direction {
        Direction::Across => {
            (col == 0 || grid.is_block(row, col - 1))
                && (col < size - 1 && grid.is_playable(row, col + 1))
        }
        Direction::Down => {
            (row == 0 || grid.is_block(row - 1, col))
                && (row < size - 1 && grid.is_playable(row + 1, col))
        }
    }
}

proptest! {
    /// Every reported across position satisfies the across-start
    /// condition, and vice versa for down.
    #[test]
    fn reported_positions_are_real_starts(grid in arb_grid()) {
        let positions = scan(&grid);
        for pos in positions.across().values() {
            prop_assert!(is_start(&grid, pos.row, pos.col, Direction::Across));
        }
        for pos in positions.down().values() {
            prop_assert!(is_start(&grid, pos.row, pos.col, Direction::Down));
        }
    }

    /// Every cell satisfying a start condition is reported under some
    /// number.
    #[test]
    fn no_start_cell_is_missed(grid in arb_grid()) {
        let positions = scan(&grid);
        for row in 0..grid.size() {
            for col in 0..grid.size() {
                if is_start(&grid, row, col, Direction::Across) {
                    prop_assert!(positions
                        .across()
                        .values()
                        .any(|p| p.row == row && p.col == col));
                }
                if is_start(&grid, row, col, Direction::Down) {
                    prop_assert!(positions
                        .down()
                        .values()
                        .any(|p| p.row == row && p.col == col));
                }
            }
        }
    }

    /// Assigned numbers are exactly 1..=k for k numbered cells: the
    /// counter never skips and never repeats.
    #[test]
    fn numbers_are_contiguous_from_one(grid in arb_grid()) {
        let positions = scan(&grid);
        let mut numbers: Vec<u32> = positions
            .across()
            .keys()
            .chain(positions.down().keys())
            .copied()
            .collect();
        numbers.sort_unstable();
        numbers.dedup();

        for (i, number) in numbers.iter().enumerate() {
            prop_assert_eq!(*number, (i + 1) as u32);
        }
    }

    /// A number shared between directions labels the same cell.
    #[test]
    fn shared_numbers_share_a_cell(grid in arb_grid()) {
        let positions = scan(&grid);
        for (number, across_pos) in positions.across() {
            if let Some(down_pos) = positions.get(Direction::Down, *number) {
                prop_assert_eq!(*across_pos, down_pos);
            }
        }
    }

    /// Numbers increase in row-major order of their cells.
    #[test]
    fn numbering_follows_row_major_order(grid in arb_grid()) {
        let positions = scan(&grid);
        let mut cells: Vec<(u32, usize)> = positions
            .across()
            .iter()
            .chain(positions.down().iter())
            .map(|(n, p)| (*n, grid.index(p.row, p.col)))
            .collect();
        cells.sort_unstable();
        cells.dedup();

        // Same number means same cell, so after dedup both components
        // are strictly increasing.
        for pair in cells.windows(2) {
            prop_assert!(pair[0].1 < pair[1].1);
        }
    }

    /// Writing the computed numbering into a gridnums array and
    /// re-indexing reproduces the same positions.
    #[test]
    fn gridnums_index_round_trips_computed_numbering(grid in arb_grid()) {
        let computed = scan(&grid);

        let mut gridnums = vec![0u32; grid.size() * grid.size()];
        for (number, pos) in computed.across() {
            gridnums[grid.index(pos.row, pos.col)] = *number;
        }
        for (number, pos) in computed.down() {
            gridnums[grid.index(pos.row, pos.col)] = *number;
        }

        let indexed = StartPositions::from_gridnums(&grid, &gridnums);
        prop_assert_eq!(indexed, computed);
    }
}

//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`Direction`] - Orientation of a crossword entry (across or down)
//! - [`Position`] - Zero-indexed (row, column) cell coordinate
//! - [`Grid`] - Validated square cell grid
//!
//! # Validation
//!
//! [`Grid`] enforces validity at construction time: the cell count must
//! match the declared size and every cell must be a non-empty value.
//! Invalid grids cannot be represented, so downstream scanning code never
//! has to bounds-check cell contents.
//!
//! # Examples
//!
//! ```
//! use gridwit::core::types::{Direction, Grid, Position};
//!
//! let cells: Vec<String> = vec!["A".into(), "B".into(), ".".into(), "C".into()];
//! let grid = Grid::new(cells, 2).unwrap();
//!
//! assert!(grid.is_block(1, 0));
//! assert!(grid.is_playable(0, 0));
//! assert_eq!(Direction::Across.as_str(), "across");
//! assert_eq!(Position::new(0, 1).to_string(), "(0, 1)");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default grid dimension for standard daily puzzles.
pub const DEFAULT_GRID_SIZE: usize = 15;

/// Cell value marking a non-playable (block) cell.
pub const BLOCK: &str = ".";

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid grid: expected {expected} cells for size {size}, got {actual}")]
    InvalidGridLength {
        size: usize,
        expected: usize,
        actual: usize,
    },

    #[error("invalid grid: cell {index} is empty")]
    EmptyCell { index: usize },

    #[error("grid size cannot be zero")]
    ZeroSize,

    #[error("invalid direction: {0}")]
    InvalidDirection(String),
}

/// Orientation of a crossword entry.
///
/// Serialized in lowercase (`"across"` / `"down"`), matching both the
/// source document format and the database representation.
///
/// # Example
///
/// ```
/// use gridwit::core::types::Direction;
///
/// assert_eq!(Direction::Down.as_str(), "down");
/// assert_eq!("across".parse::<Direction>().unwrap(), Direction::Across);
/// assert!("diagonal".parse::<Direction>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Across,
    Down,
}

impl Direction {
    /// Get the direction as the canonical lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Across => "across",
            Direction::Down => "down",
        }
    }
}

impl std::str::FromStr for Direction {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "across" => Ok(Direction::Across),
            "down" => Ok(Direction::Down),
            other => Err(TypeError::InvalidDirection(other.to_string())),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A zero-indexed (row, column) coordinate within a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a position from row and column indices.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A validated square crossword grid.
///
/// Cells are stored in row-major order as single-character strings, the
/// representation used by the source documents. A cell equal to [`BLOCK`]
/// is non-playable; any other value is playable. Immutable once loaded.
///
/// # Example
///
/// ```
/// use gridwit::core::types::Grid;
///
/// let cells: Vec<String> =
///     vec!["C".into(), "A".into(), "T".into(), ".".into(), ".".into(),
///          ".".into(), ".".into(), ".".into(), "X".into()];
/// let grid = Grid::new(cells, 3).unwrap();
///
/// assert_eq!(grid.size(), 3);
/// assert_eq!(grid.cell(0, 2), "T");
/// assert!(grid.is_block(1, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<String>,
    size: usize,
}

impl Grid {
    /// Create a validated grid from row-major cells.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::ZeroSize` for a zero dimension,
    /// `TypeError::InvalidGridLength` if the cell count is not `size * size`,
    /// and `TypeError::EmptyCell` if any cell is an empty string.
    pub fn new(cells: Vec<String>, size: usize) -> Result<Self, TypeError> {
        if size == 0 {
            return Err(TypeError::ZeroSize);
        }
        let expected = size * size;
        if cells.len() != expected {
            return Err(TypeError::InvalidGridLength {
                size,
                expected,
                actual: cells.len(),
            });
        }
        if let Some(index) = cells.iter().position(|c| c.is_empty()) {
            return Err(TypeError::EmptyCell { index });
        }
        Ok(Self { cells, size })
    }

    /// The grid dimension (grids are `size x size`).
    pub fn size(&self) -> usize {
        self.size
    }

    /// The flat row-major index of (row, col).
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// The cell value at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of bounds.
    pub fn cell(&self, row: usize, col: usize) -> &str {
        &self.cells[self.index(row, col)]
    }

    /// Whether the cell at (row, col) is a block.
    pub fn is_block(&self, row: usize, col: usize) -> bool {
        self.cell(row, col) == BLOCK
    }

    /// Whether the cell at (row, col) can hold a letter.
    pub fn is_playable(&self, row: usize, col: usize) -> bool {
        !self.is_block(row, col)
    }

    /// The raw row-major cell values.
    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    /// Serialize the cells to the JSON array form stored in the database.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.cells)
    }
}

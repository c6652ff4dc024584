//! ingest::sample
//!
//! Sample puzzle data for smoke-testing the import pipeline.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::core::types::DEFAULT_GRID_SIZE;

/// Write a minimal year/month document tree under `base`.
///
/// The generated puzzle is internally consistent: its gridnums agree
/// with standard numbering and every clue resolves, so importing it
/// yields one puzzle, two clues, and no drops. Returns the path of the
/// written document.
///
/// # Errors
///
/// Returns an I/O error if the tree or file cannot be written.
pub fn write_sample_tree(base: &Path) -> io::Result<PathBuf> {
    let size = DEFAULT_GRID_SIZE;

    // Row 0 holds two 7-letter entries split by a block; every other
    // cell is a block. Numbering: 1 at (0,0), 2 at (0,8).
    let mut cells = vec![".".to_string(); size * size];
    for (col, letter) in "XAMOUNT".chars().enumerate() {
        cells[col] = letter.to_string();
    }
    for (offset, letter) in "WHIZKID".chars().enumerate() {
        cells[8 + offset] = letter.to_string();
    }
    let mut gridnums = vec![0u32; size * size];
    gridnums[0] = 1;
    gridnums[8] = 2;

    let document = serde_json::json!({
        "date": "11/6/2004",
        "author": "Kyle Mahowald",
        "grid": cells,
        "gridnums": gridnums,
        "clues": {
            "across": ["1. Sum of money", "2. Smart youngster"],
            "down": []
        },
        "answers": {
            "across": ["XAMOUNT", "WHIZKID"],
            "down": []
        }
    });

    let month_dir = base.join("2004").join("11");
    fs::create_dir_all(&month_dir)?;

    let path = month_dir.join("2004-11-06.json");
    let pretty = serde_json::to_vec_pretty(&document).map_err(io::Error::other)?;
    fs::write(&path, pretty)?;
    Ok(path)
}

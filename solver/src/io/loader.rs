//! Maze file loading.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::core::grid::Grid;
use crate::core::marker::Marker;

/// Read a maze from a text file: one line per row, one marker per char.
///
/// A trailing line separator does not produce a trailing empty row.
pub fn load_maze(path: &Path) -> Result<Grid> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read maze {}", path.display()))?;
    let grid = parse_maze(&contents);
    debug!(rows = grid.rows().len(), path = %path.display(), "maze loaded");
    Ok(grid)
}

/// Parse maze text into a grid.
pub fn parse_maze(contents: &str) -> Grid {
    let rows = contents
        .lines()
        .map(|line| line.chars().map(Marker::from_char).collect())
        .collect();
    Grid::new(rows)
}

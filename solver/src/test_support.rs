//! Grid fixtures shared by unit and integration tests.

use crate::core::grid::Grid;
use crate::core::marker::Marker;

/// Build a grid from string rows, one marker per char.
pub fn grid_from_rows(rows: &[&str]) -> Grid {
    Grid::new(
        rows.iter()
            .map(|row| row.chars().map(Marker::from_char).collect())
            .collect(),
    )
}

/// The small maze used across tests: start on the west edge, end on the
/// east edge, one L-shaped corridor between them.
///
/// ```text
/// ###
/// S #
/// # F
/// ###
/// ```
pub fn corridor_grid() -> Grid {
    grid_from_rows(&["###", "S #", "# F", "###"])
}

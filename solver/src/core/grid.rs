//! Maze grid model: cell lookup, tolerant marker tests, marker location.

use crate::core::error::SolveError;
use crate::core::marker::Marker;
use crate::core::position::Position;

/// A maze as rows of markers, addressed by `(x, y)` with `y` indexing rows.
///
/// Rows may be ragged; every lookup is bounds-safe. The grid is never
/// mutated during solving — the path overlay in [`crate::core::render`]
/// works on a copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<Marker>>,
}

impl Grid {
    pub fn new(rows: Vec<Vec<Marker>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<Marker>] {
        &self.rows
    }

    /// Marker at `(x, y)`, or `None` when the coordinates fall outside the
    /// grid (including negative probes off the frame).
    pub fn cell_at(&self, x: i32, y: i32) -> Option<Marker> {
        let row = self.rows.get(usize::try_from(y).ok()?)?;
        row.get(usize::try_from(x).ok()?).copied()
    }

    /// True iff `position` is in bounds and holds `marker`.
    ///
    /// Out-of-range coordinates yield `false` rather than an error:
    /// candidate generation routinely probes one step past the frame of
    /// wall-bordered mazes.
    pub fn has_marker_at(&self, marker: Marker, position: &Position) -> bool {
        self.cell_at(position.x, position.y) == Some(marker)
    }

    /// First cell holding `marker`, scanning rows top-to-bottom and columns
    /// left-to-right. The returned position carries no heading.
    pub fn find_position(&self, marker: Marker) -> Result<Position, SolveError> {
        for (y, row) in self.rows.iter().enumerate() {
            if let Some(x) = row.iter().position(|cell| *cell == marker) {
                return Ok(Position::new(x as i32, y as i32));
            }
        }
        Err(SolveError::MarkerNotFound { marker })
    }
}

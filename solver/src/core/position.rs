//! Agent location and heading.

use serde::{Deserialize, Serialize};

use crate::core::direction::Direction;

/// A grid coordinate plus the heading used to arrive there.
///
/// `heading` is `None` only for the start position, before any move has
/// been made. Coordinates are signed because candidate generation probes
/// one step past the grid frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<Direction>,
}

impl Position {
    /// A position without a heading (start cells, locator results).
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            heading: None,
        }
    }

    /// A position reached by moving in `heading`.
    pub fn with_heading(x: i32, y: i32, heading: Direction) -> Self {
        Self {
            x,
            y,
            heading: Some(heading),
        }
    }

    /// The neighbor one unit step away, tagged with `direction` as its
    /// heading.
    pub fn step(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Self::with_heading(self.x + dx, self.y + dy, direction)
    }

    /// Coordinate equality, ignoring heading.
    pub fn same_cell(&self, other: &Position) -> bool {
        self.x == other.x && self.y == other.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_moves_and_tags_heading() {
        let start = Position::new(2, 3);
        assert_eq!(
            start.step(Direction::North),
            Position::with_heading(2, 2, Direction::North)
        );
        assert_eq!(
            start.step(Direction::East),
            Position::with_heading(3, 3, Direction::East)
        );
    }

    #[test]
    fn same_cell_ignores_heading() {
        let a = Position::with_heading(1, 1, Direction::South);
        let b = Position::new(1, 1);
        assert!(a.same_cell(&b));
        assert!(!a.same_cell(&Position::new(1, 2)));
    }
}

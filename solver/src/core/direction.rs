//! Cardinal directions and the clockwise rotation cycle.

use serde::{Deserialize, Serialize};

/// The fixed clockwise ordering the candidate rotation walks through.
pub const CLOCKWISE: [Direction; 4] = [
    Direction::West,
    Direction::North,
    Direction::East,
    Direction::South,
];

/// A cardinal heading on the grid. `y` grows downward, so north is `-y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    West,
    North,
    East,
    South,
}

impl Direction {
    /// The direction 90° counter-clockwise: the wall-follower's left hand.
    pub fn left(self) -> Self {
        CLOCKWISE[(self.cycle_index() + 3) % CLOCKWISE.len()]
    }

    /// Unit step offset `(dx, dy)` for one move in this direction.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Self::West => (-1, 0),
            Self::North => (0, -1),
            Self::East => (1, 0),
            Self::South => (0, 1),
        }
    }

    /// Index of this direction within [`CLOCKWISE`].
    pub(crate) fn cycle_index(self) -> usize {
        match self {
            Self::West => 0,
            Self::North => 1,
            Self::East => 2,
            Self::South => 3,
        }
    }
}

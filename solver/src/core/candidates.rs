//! Rotation-ordered neighbor candidates for one step.

use crate::core::direction::{CLOCKWISE, Direction};
use crate::core::position::Position;

/// The four neighbors of `current`, ordered by the left-hand rule.
///
/// The first candidate lies 90° left of the current heading; the rest walk
/// the clockwise cycle from there, wrapping. A position without a heading
/// (the first move) is treated as facing west, so its first probe is south.
/// Always exactly 4 entries, built fresh for every step; validity is the
/// caller's concern.
pub fn candidates(current: &Position) -> [(Direction, Position); 4] {
    let start = current.heading.unwrap_or(Direction::West).left();
    let offset = start.cycle_index();
    std::array::from_fn(|i| {
        let direction = CLOCKWISE[(offset + i) % CLOCKWISE.len()];
        (direction, current.step(direction))
    })
}

//! Read-only projection of a walked path onto the grid.

use crate::core::grid::Grid;
use crate::core::position::Position;

/// Each grid row as a string, with every visited cell replaced by `'*'`.
///
/// Start and end cells are overwritten too when visited. The grid itself
/// stays untouched; the overlay works on a copy.
pub fn overlay(grid: &Grid, history: &[Position]) -> Vec<String> {
    let mut rows: Vec<Vec<char>> = grid
        .rows()
        .iter()
        .map(|row| row.iter().map(|cell| cell.as_char()).collect())
        .collect();

    for position in history {
        let Ok(x) = usize::try_from(position.x) else {
            continue;
        };
        let Ok(y) = usize::try_from(position.y) else {
            continue;
        };
        if let Some(cell) = rows.get_mut(y).and_then(|row| row.get_mut(x)) {
            *cell = '*';
        }
    }

    rows.into_iter().map(|row| row.into_iter().collect()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::corridor_grid;

    #[test]
    fn overlays_visited_cells_including_start_and_end() {
        let grid = corridor_grid();
        let history = vec![
            Position::new(0, 1),
            Position::new(1, 1),
            Position::new(1, 2),
            Position::new(2, 2),
        ];

        assert_eq!(overlay(&grid, &history), vec!["###", "**#", "#**", "###"]);
    }

    #[test]
    fn empty_history_leaves_the_grid_unchanged() {
        let grid = corridor_grid();
        assert_eq!(overlay(&grid, &[]), vec!["###", "S #", "# F", "###"]);
    }
}

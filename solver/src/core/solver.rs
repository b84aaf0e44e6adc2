//! Wall-following traversal: step function, bounded solve loop, outcome.

use serde::Serialize;

use crate::core::candidates::candidates;
use crate::core::error::SolveError;
use crate::core::grid::Grid;
use crate::core::marker::Marker;
use crate::core::position::Position;

/// Configuration for one solve attempt.
#[derive(Debug, Clone)]
pub struct SolveConfig {
    /// Upper bound on walker steps. The walker keeps no visited set and can
    /// cycle forever on mazes with loops, so the cap is the only guarantee
    /// of termination.
    pub max_iterations: u32,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
        }
    }
}

/// How a solve attempt ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// The walker reached the end cell. `steps` equals the history length.
    Solved { steps: usize },
    /// The iteration cap ran out before reaching the end. The history is
    /// still returned, truncated at the last position reached.
    GaveUp { max_iterations: u32 },
}

/// The artifact of one solve attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolveOutcome {
    /// Every position visited, in order, starting at the start cell.
    pub history: Vec<Position>,
    pub verdict: Verdict,
}

/// First candidate around `current` that is open space or the end cell.
///
/// Fails with [`SolveError::NoOpenNeighbor`] when all four neighbors are
/// closed — a fully boxed-in cell, including behind the walker.
pub fn find_next_position(grid: &Grid, current: &Position) -> Result<Position, SolveError> {
    for (_, position) in candidates(current) {
        if grid.has_marker_at(Marker::Space, &position)
            || grid.has_marker_at(Marker::End, &position)
        {
            return Ok(position);
        }
    }
    Err(SolveError::NoOpenNeighbor {
        x: current.x,
        y: current.y,
    })
}

/// True when the walker stands on the end cell (heading ignored).
pub fn has_finished(current: &Position, end: &Position) -> bool {
    current.same_cell(end)
}

/// Walk the maze with the left-hand rule until the end cell is reached or
/// the iteration cap runs out.
///
/// Greedy and local: no visited set, no backtracking, cells can be
/// revisited. Deterministic — the same grid and config always produce the
/// same history. The grid is read-only throughout.
pub fn solve(grid: &Grid, config: &SolveConfig) -> Result<SolveOutcome, SolveError> {
    let start = grid.find_position(Marker::Start)?;
    let end = grid.find_position(Marker::End)?;

    let mut history = vec![start];
    for _ in 0..config.max_iterations {
        let current = history[history.len() - 1];
        let next = find_next_position(grid, &current)?;
        history.push(next);

        if has_finished(&next, &end) {
            let steps = history.len();
            return Ok(SolveOutcome {
                history,
                verdict: Verdict::Solved { steps },
            });
        }
    }

    Ok(SolveOutcome {
        history,
        verdict: Verdict::GaveUp {
            max_iterations: config.max_iterations,
        },
    })
}

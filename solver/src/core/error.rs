//! Typed errors that abort a solve attempt.

use thiserror::Error;

use crate::core::marker::Marker;

/// Fatal conditions for one solve invocation.
///
/// Running out of iterations is not an error; see
/// [`Verdict::GaveUp`](crate::core::solver::Verdict).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The grid holds no cell with the required marker. Solving is
    /// meaningless without both endpoints, so there is no recovery.
    #[error("no '{marker}' marker found in the maze")]
    MarkerNotFound { marker: Marker },

    /// Every neighbor of the current cell is closed. The walker has no
    /// backtracking, so a boxed-in cell ends the attempt.
    #[error("could not find next position from ({x}, {y})")]
    NoOpenNeighbor { x: i32, y: i32 },
}

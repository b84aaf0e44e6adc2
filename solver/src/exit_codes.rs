//! Stable exit codes for the solver CLI.

/// Maze solved, or the walker gave up at the iteration cap.
pub const OK: i32 = 0;
/// Missing start/end marker, boxed-in walker, or unreadable maze file.
pub const INVALID: i32 = 1;

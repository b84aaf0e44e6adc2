//! Wall-following maze solver.
//!
//! Simulates a left-hand-rule walker from the start cell to the end cell of
//! a 2D grid maze and reports the full path taken. The architecture
//! enforces a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (grid model, direction
//!   rotation, candidate ordering, the bounded solve loop). No I/O, fully
//!   testable in isolation.
//! - **[`io`]**: Side-effecting operations (maze file loading). Isolated to
//!   enable testing against temp files.
//!
//! [`run`] coordinates core logic with I/O to implement the CLI command.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod run;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

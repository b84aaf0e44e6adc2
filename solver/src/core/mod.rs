//! Pure, deterministic maze logic.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! grids and return deterministic outputs suitable for tests.

pub mod candidates;
pub mod direction;
pub mod error;
pub mod grid;
pub mod marker;
pub mod position;
pub mod render;
pub mod solver;

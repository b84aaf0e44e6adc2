//! I/O helpers for the solver CLI.

pub mod loader;

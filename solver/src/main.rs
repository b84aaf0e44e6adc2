//! Wall-following maze solver CLI.
//!
//! Reads a maze from a text file (`'S'` start, `'F'` end, `'#'` wall,
//! `' '` open), walks it with the left-hand rule, and prints the outcome
//! with the path overlaid. Giving up at the iteration cap is a normal
//! outcome and exits 0; a missing marker or boxed-in walker exits 1.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use solver::core::solver::SolveConfig;
use solver::exit_codes;
use solver::run::{OutputFormat, run_solver};

#[derive(Parser)]
#[command(name = "solver", version, about = "Wall-following maze solver")]
struct Cli {
    /// Path to the maze file, one row per line.
    maze: PathBuf,

    /// Upper bound on walker steps before giving up.
    #[arg(long, default_value_t = 1000)]
    max_iterations: u32,

    /// Emit the outcome as JSON instead of the rendered maze.
    #[arg(long)]
    json: bool,
}

fn main() {
    solver::logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::INVALID);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = SolveConfig {
        max_iterations: cli.max_iterations,
    };
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Render
    };
    run_solver(&cli.maze, &config, format, |line| println!("{line}"))?;
    Ok(())
}

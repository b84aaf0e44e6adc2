//! Orchestration for one solve run: load, solve, report, render.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::core::render::overlay;
use crate::core::solver::{SolveConfig, SolveOutcome, Verdict, solve};
use crate::io::loader::load_maze;

/// Output format for the solve report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Status line plus the maze with the path overlaid.
    Render,
    /// The full outcome (history and verdict) as one JSON document.
    Json,
}

/// Load the maze at `path`, solve it, and report through `emit` (one call
/// per output line).
///
/// Giving up at the iteration cap is a reported outcome, not an error; only
/// an unreadable file, a missing marker, or a boxed-in walker fails the
/// run. Typed [`SolveError`](crate::core::error::SolveError)s stay
/// downcastable through the returned `anyhow::Error`.
pub fn run_solver<F: FnMut(&str)>(
    path: &Path,
    config: &SolveConfig,
    format: OutputFormat,
    mut emit: F,
) -> Result<SolveOutcome> {
    let grid = load_maze(path)?;
    let outcome =
        solve(&grid, config).with_context(|| format!("solve maze {}", path.display()))?;
    debug!(
        steps = outcome.history.len(),
        solved = matches!(outcome.verdict, Verdict::Solved { .. }),
        "solve finished"
    );

    match format {
        OutputFormat::Render => {
            match outcome.verdict {
                Verdict::Solved { steps } => emit(&format!("Maze solved in {steps} steps.")),
                Verdict::GaveUp { max_iterations } => emit(&format!(
                    "Could not solve maze in {max_iterations} steps, giving up."
                )),
            }
            for line in overlay(&grid, &outcome.history) {
                emit(&line);
            }
        }
        OutputFormat::Json => {
            let payload =
                serde_json::to_string_pretty(&outcome).context("serialize outcome json")?;
            emit(&payload);
        }
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::core::error::SolveError;
    use crate::core::marker::Marker;

    const CORRIDOR: &str = "###\nS #\n# F\n###\n";

    fn write_maze(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("maze.txt");
        fs::write(&path, contents).expect("write maze");
        (temp, path)
    }

    #[test]
    fn solved_run_emits_status_then_overlaid_rows() {
        let (_temp, path) = write_maze(CORRIDOR);
        let mut lines = Vec::new();
        let outcome = run_solver(
            &path,
            &SolveConfig::default(),
            OutputFormat::Render,
            |line| lines.push(line.to_string()),
        )
        .expect("run");

        assert_eq!(
            lines,
            vec!["Maze solved in 4 steps.", "###", "**#", "#**", "###"]
        );
        assert_eq!(outcome.verdict, Verdict::Solved { steps: 4 });
    }

    #[test]
    fn gave_up_run_reports_and_still_renders() {
        let (_temp, path) = write_maze("######\n#    #\n#  S #\n#    #\n#    #\n#    F\n######\n");
        let mut lines = Vec::new();
        let outcome = run_solver(
            &path,
            &SolveConfig { max_iterations: 10 },
            OutputFormat::Render,
            |line| lines.push(line.to_string()),
        )
        .expect("run");

        assert_eq!(lines[0], "Could not solve maze in 10 steps, giving up.");
        assert_eq!(lines.len(), 8);
        assert_eq!(outcome.verdict, Verdict::GaveUp { max_iterations: 10 });
    }

    #[test]
    fn json_format_emits_one_parseable_document() {
        let (_temp, path) = write_maze(CORRIDOR);
        let mut lines = Vec::new();
        run_solver(&path, &SolveConfig::default(), OutputFormat::Json, |line| {
            lines.push(line.to_string())
        })
        .expect("run");

        assert_eq!(lines.len(), 1);
        let value: serde_json::Value = serde_json::from_str(&lines[0]).expect("parse json");
        assert_eq!(value["verdict"]["solved"]["steps"], 4);
        assert_eq!(value["history"][0], serde_json::json!({"x": 0, "y": 1}));
        assert_eq!(value["history"][1]["heading"], "EAST");
    }

    #[test]
    fn missing_marker_error_stays_downcastable() {
        let (_temp, path) = write_maze("###\n# #\n###\n");
        let err = run_solver(
            &path,
            &SolveConfig::default(),
            OutputFormat::Render,
            |_| {},
        )
        .expect_err("no markers");

        assert_eq!(
            err.downcast_ref::<SolveError>(),
            Some(&SolveError::MarkerNotFound {
                marker: Marker::Start
            })
        );
    }
}

//! minorsat CLI -- decide whether a graph contains a `K_k` minor.

pub mod error;

pub use error::CliError;

use std::fs;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use minorsat_sat::MinorChecker;

#[derive(Debug, Parser)]
#[command(
    name = "minorsat",
    about = "Decides Kk-minor containment in a graph via a SAT encoding"
)]
pub struct App {
    /// Path to the input graph file
    pub graph_path: PathBuf,
    /// Size of the complete-graph minor to search for
    pub k: usize,
    /// Input graph format
    #[arg(long, value_enum)]
    pub format: Option<GraphFormat>,
    /// Print only the branch assignment, skipping the "Contains minor"
    /// line
    #[arg(long)]
    pub assignment_only: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GraphFormat {
    Dimacs,
    Graph,
}

impl GraphFormat {
    /// Infers a format from `path`'s extension: `.json` selects the
    /// serialized-graph reader, anything else is read as DIMACS.
    #[must_use]
    pub fn infer(path: &std::path::Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::Graph,
            _ => Self::Dimacs,
        }
    }
}

/// Runs the full pipeline -- parse, build, solve, print -- for `app`,
/// returning the collected stdout lines instead of printing them
/// directly, so both `main` and integration tests can drive it.
///
/// # Errors
///
/// Returns [`CliError::InvalidK`], [`CliError::Io`], or
/// [`CliError::Parse`] per §7's input-error taxonomy.
pub fn run(app: &App) -> Result<Vec<String>, CliError> {
    if app.k < 1 {
        return Err(CliError::InvalidK(app.k));
    }

    let format = app
        .format
        .unwrap_or_else(|| GraphFormat::infer(&app.graph_path));

    let contents = fs::read_to_string(&app.graph_path)?;
    let graph = match format {
        GraphFormat::Dimacs => minorsat_parser::read_dimacs(&contents)?,
        GraphFormat::Graph => minorsat_parser::read_serialized(&contents)?,
    };

    let mut checker = MinorChecker::build(graph, app.k);
    checker.run();

    let contains = checker
        .contains_minor()
        .expect("run() was just called, so this always succeeds");

    let mut lines = Vec::new();
    if !app.assignment_only {
        lines.push(format!("Contains minor: {contains}"));
    }

    if contains {
        let solution = checker
            .solution()
            .expect("contains_minor() returned true, so a witness must decode");
        let assignment: Vec<String> = solution.as_slice().iter().map(ToString::to_string).collect();
        lines.push(format!("Assignment: [{}]", assignment.join(", ")));
    }

    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn json_extension_infers_graph_format() {
        assert_eq!(GraphFormat::infer(Path::new("input.json")), GraphFormat::Graph);
    }

    #[test]
    fn unknown_or_missing_extension_infers_dimacs() {
        assert_eq!(GraphFormat::infer(Path::new("input.gr")), GraphFormat::Dimacs);
        assert_eq!(GraphFormat::infer(Path::new("input")), GraphFormat::Dimacs);
    }

    #[test]
    fn cli_parses_positional_args_and_flags() {
        let app = App::parse_from(["minorsat", "graph.gr", "4", "--assignment-only"]);
        assert_eq!(app.k, 4);
        assert!(app.assignment_only);
        assert_eq!(app.format, None);
    }
}

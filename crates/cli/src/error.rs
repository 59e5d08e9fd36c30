//! `CliError`: the top of the error chain, wrapping I/O, parse, and
//! `k < 1` input errors so `main` reports and exits non-zero uniformly.
//! Manual `Display`/`std::error::Error` + `derive_more::From`.

use std::fmt;
use std::io;

use derive_more::From;
use minorsat_parser::ParseError;

#[derive(Debug, From)]
pub enum CliError {
    Io(io::Error),
    Parse(ParseError),
    /// `k` must be at least 1; a minor of size zero is not a concept
    /// this tool decides.
    InvalidK(usize),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::InvalidK(k) => write!(f, "k must be at least 1, got {k}"),
        }
    }
}

impl std::error::Error for CliError {}

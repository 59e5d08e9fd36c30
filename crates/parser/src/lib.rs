//! Graph input readers for minorsat: a DIMACS edge-format reader and a
//! serialized-petgraph reader, selected by the CLI's `--format` flag
//! (§6).

pub mod dimacs;
pub mod error;
pub mod graph_format;

pub use dimacs::read_dimacs;
pub use error::ParseError;
pub use graph_format::read_serialized;

//! Graph model, SAT variable pool, and minor-witness validator for
//! deciding Kₖ-minor containment.
//!
//! `minorsat_core` has no notion of SAT or CNF clauses; it only knows
//! about graphs (`0..n` vertices, an edge set), the symbolic descriptors
//! a clausal encoding of the minor problem would use ([`VarPool`]), and
//! how to independently check whether a vertex → branch-set assignment
//! actually witnesses a Kₖ minor ([`validator::validate`]). The clause
//! emission and SAT solver invocation live in `minorsat_sat`.
//!
//! # Crate features
//!
//! - **`serde`** -- enables `Serialize`/`Deserialize` derives where
//!   applicable.

pub mod graph;
pub mod pool;
pub mod solution;
pub mod validator;

pub use graph::Graph;
pub use pool::{Descriptor, VarPool};
pub use solution::{Solution, UNASSIGNED};
pub use validator::validate;

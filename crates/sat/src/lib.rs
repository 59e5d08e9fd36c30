//! CNF encoding and solver driver for deciding Kₖ-minor containment.
//!
//! Builds on [`minorsat_core`]'s graph model and [`VarPool`](minorsat_core::VarPool):
//! this crate owns the clause emission and the `rustsat`/`rustsat-batsat`
//! solver invocation, and nothing else does.

pub mod cardinality;
pub mod driver;
pub mod encoder;

pub use driver::{DriverError, MinorChecker};
pub use encoder::encode;

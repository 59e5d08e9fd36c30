//! `MinorChecker`: builds the encoding once, invokes the solver, and
//! decodes a witnessing [`Solution`] on demand.
//!
//! A struct owning a solver instance and a `VarPool`, exposing query
//! methods that decode the model after a single `solve()` call, rather
//! than re-encoding per query.

use std::fmt;
use std::time::{Duration, Instant};

use minorsat_core::{validate, Descriptor, Graph, Solution, VarPool};
use rustsat::solvers::{Solve, SolverResult};
use rustsat::types::{Lit, TernaryVal};
use rustsat_batsat::BasicSolver;

use crate::encoder::encode;

/// Errors returned by [`MinorChecker`] when queried out of order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverError {
    /// [`MinorChecker::run`] has not been called yet.
    NotRun,
    /// The instance is unsatisfiable; there is no minor witness to
    /// decode.
    Unsatisfiable,
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotRun => write!(f, "the solver has not been run yet"),
            Self::Unsatisfiable => write!(f, "instance is unsatisfiable; no witness exists"),
        }
    }
}

impl std::error::Error for DriverError {}

/// Decides whether `graph` contains a `K_k` minor, built once and
/// queried after [`run`](Self::run).
pub struct MinorChecker {
    graph: Graph,
    k: usize,
    pool: VarPool,
    solver: BasicSolver,
    has_run: bool,
    satisfiable: bool,
    runtime: Duration,
}

impl MinorChecker {
    /// Builds the CNF encoding for `graph` and `k`. Does not invoke the
    /// solver; call [`run`](Self::run) for that.
    #[must_use]
    pub fn build(graph: Graph, k: usize) -> Self {
        let mut pool = VarPool::new();
        let mut solver = BasicSolver::default();
        encode(&mut solver, &mut pool, &graph, k);
        Self {
            graph,
            k,
            pool,
            solver,
            has_run: false,
            satisfiable: false,
            runtime: Duration::ZERO,
        }
    }

    /// Invokes the SAT solver, recording the outcome and elapsed time.
    pub fn run(&mut self) {
        let start = Instant::now();
        let result = self.solver.solve().expect("solver backend failed");
        self.runtime = start.elapsed();
        self.satisfiable = result == SolverResult::Sat;
        self.has_run = true;
        tracing::debug!(
            satisfiable = self.satisfiable,
            runtime_ms = self.runtime.as_millis(),
            "solver run complete"
        );
    }

    /// Whether `graph` contains a `K_k` minor.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError::NotRun`] if [`run`](Self::run) has not
    /// been called yet.
    pub fn contains_minor(&self) -> Result<bool, DriverError> {
        if !self.has_run {
            return Err(DriverError::NotRun);
        }
        Ok(self.satisfiable)
    }

    /// Wall-clock time spent inside the solver's `solve()` call.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError::NotRun`] if [`run`](Self::run) has not
    /// been called yet.
    pub fn runtime(&self) -> Result<Duration, DriverError> {
        if !self.has_run {
            return Err(DriverError::NotRun);
        }
        Ok(self.runtime)
    }

    /// Decodes the satisfying assignment into a [`Solution`].
    ///
    /// # Errors
    ///
    /// Returns [`DriverError::NotRun`] if [`run`](Self::run) has not
    /// been called, or [`DriverError::Unsatisfiable`] if the instance
    /// has no witness.
    ///
    /// # Panics
    ///
    /// Panics if the decoded assignment fails independent structural
    /// validation -- an encoding/solver inconsistency this driver never
    /// silently recovers from.
    pub fn solution(&self) -> Result<Solution, DriverError> {
        if !self.has_run {
            return Err(DriverError::NotRun);
        }
        if !self.satisfiable {
            return Err(DriverError::Unsatisfiable);
        }

        let n = self.graph.num_vertices();
        let mut branch = vec![minorsat_core::UNASSIGNED; n];

        for v in 0..n {
            for i in 0..self.k {
                let Some(id) = self.pool.get(Descriptor::Assign { v, i }) else {
                    continue;
                };
                if self.solver.lit_val(Lit::positive(id)).expect("literal out of range")
                    == TernaryVal::True
                {
                    branch[v] = i64::try_from(i).expect("branch index fits in i64");
                    break;
                }
            }
        }

        let solution = Solution::new(branch);
        assert!(
            validate(&solution, &self.graph, self.k),
            "decoded solution failed structural validation: encoding/solver inconsistency"
        );
        Ok(solution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queries_before_run_return_not_run() {
        let g = Graph::new(1);
        let checker = MinorChecker::build(g, 1);
        assert_eq!(checker.contains_minor(), Err(DriverError::NotRun));
        assert_eq!(checker.runtime(), Err(DriverError::NotRun));
        assert_eq!(checker.solution().unwrap_err(), DriverError::NotRun);
    }

    #[test]
    fn triangle_contains_k3_minor_with_valid_witness() {
        let mut g = Graph::new(3);
        g.add_edge(0, 1);
        g.add_edge(1, 2);
        g.add_edge(0, 2);
        let mut checker = MinorChecker::build(g, 3);
        checker.run();
        assert_eq!(checker.contains_minor(), Ok(true));
        let solution = checker.solution().expect("satisfiable instance must decode");
        assert_eq!(solution.num_vertices(), 3);
    }

    #[test]
    fn path_does_not_contain_k3_minor() {
        let mut g = Graph::new(4);
        g.add_edge(0, 1);
        g.add_edge(1, 2);
        g.add_edge(2, 3);
        let mut checker = MinorChecker::build(g, 3);
        checker.run();
        assert_eq!(checker.contains_minor(), Ok(false));
        assert_eq!(checker.solution().unwrap_err(), DriverError::Unsatisfiable);
    }
}

//! Sequential-counter cardinality encodings (SPEC_FULL.md §10.2).
//!
//! `AtMostOne`/`ExactlyOne` over a set of plain propositional variables,
//! using O(n) fresh auxiliary variables allocated through the shared
//! [`VarPool`] rather than a solver-library cardinality module -- the
//! fallback the source spec's design notes name when auxiliaries must
//! stay pool-allocated and the clause output deterministic.

use minorsat_core::VarPool;
use rustsat::solvers::Solve;
use rustsat::types::{Clause, Lit};

fn clause(lits: impl IntoIterator<Item = Lit>) -> Clause {
    lits.into_iter().collect()
}

/// At most one of `vars` may be true.
///
/// Introduces `vars.len() - 1` fresh "prefix" auxiliaries `s_1..s_{n-1}`
/// (`s_i` holds iff some `vars[0..=i]` holds) and the standard
/// sequential-counter clauses over them.
pub fn at_most_one<S: Solve>(solver: &mut S, pool: &mut VarPool, vars: &[u32]) {
    let n = vars.len();
    if n < 2 {
        return;
    }

    let aux: Vec<u32> = (0..n - 1).map(|_| pool.fresh()).collect();

    solver
        .add_clause(clause([Lit::negative(vars[0]), Lit::positive(aux[0])]))
        .expect("adding clause to solver failed");

    for i in 1..n - 1 {
        solver
            .add_clause(clause([Lit::negative(vars[i]), Lit::positive(aux[i])]))
            .expect("adding clause to solver failed");
        solver
            .add_clause(clause([Lit::negative(aux[i - 1]), Lit::positive(aux[i])]))
            .expect("adding clause to solver failed");
        solver
            .add_clause(clause([Lit::negative(vars[i]), Lit::negative(aux[i - 1])]))
            .expect("adding clause to solver failed");
    }

    let last = n - 1;
    solver
        .add_clause(clause([
            Lit::negative(vars[last]),
            Lit::negative(aux[last - 1]),
        ]))
        .expect("adding clause to solver failed");
}

/// Exactly one of `vars` must be true.
///
/// An empty `vars` yields the empty clause (the always-false clause),
/// forcing the whole instance UNSAT -- the sound outcome when there is
/// no candidate vertex to serve as a branch-set root (§4.2).
pub fn exactly_one<S: Solve>(solver: &mut S, pool: &mut VarPool, vars: &[u32]) {
    at_most_one(solver, pool, vars);
    let lits: Vec<Lit> = vars.iter().map(|&v| Lit::positive(v)).collect();
    solver
        .add_clause(clause(lits))
        .expect("adding clause to solver failed");
}

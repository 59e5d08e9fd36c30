//! CNF encoding of Kₖ-minor containment (§4, clause families F1-F8).
//!
//! Eight clause families built from three descriptor shapes, jointly
//! stating that a vertex-to-branch assignment exists whose branch sets
//! partition into `k` non-empty, connected, pairwise-adjacent pieces.

use minorsat_core::{Descriptor, Graph, VarPool};
use rustsat::solvers::Solve;
use rustsat::types::Lit;

use crate::cardinality::{at_most_one, exactly_one};

fn clause<const N: usize>(lits: [Lit; N]) -> rustsat::types::Clause {
    lits.into_iter().collect()
}

/// Encodes "`graph` contains a `K_k` minor" as CNF clauses added to
/// `solver`, allocating descriptor variables through `pool`.
///
/// # Panics
///
/// Panics if `k == 0`: a minor with zero branch sets is not a concept
/// this encoding -- or the structural validator -- gives meaning to.
pub fn encode<S: Solve>(solver: &mut S, pool: &mut VarPool, graph: &Graph, k: usize) {
    assert!(k > 0, "encode: k must be positive");
    let n = graph.num_vertices();

    tracing::debug!(
        vertices = n,
        k,
        edges = graph.edges().len(),
        "encoding Kk-minor containment"
    );

    // F1: each branch set i has exactly one root, chosen among all n
    // vertices via P(v, 0, i).
    for i in 0..k {
        let roots: Vec<u32> = (0..n)
            .map(|v| pool.id(Descriptor::Order { v, o: 0, i }))
            .collect();
        exactly_one(solver, pool, &roots);
    }

    // F2 + F3 + F4: order <-> assignment biconditional, at most one
    // order slot per (vertex, branch), and every assigned vertex holds
    // some order.
    for i in 0..k {
        for v in 0..n {
            let a_vi = pool.id(Descriptor::Assign { v, i });

            let orders: Vec<u32> = (0..n).map(|o| pool.id(Descriptor::Order { v, o, i })).collect();

            // F2: P(v, o, i) -> A(v, i), for every o.
            for &p_voi in &orders {
                solver
                    .add_clause(clause([Lit::negative(p_voi), Lit::positive(a_vi)]))
                    .expect("adding clause to solver failed");
            }

            // F3: at most one order slot holds for (v, i).
            at_most_one(solver, pool, &orders);

            // F4: A(v, i) -> some P(v, o, i).
            let mut disjunction: Vec<Lit> = vec![Lit::negative(a_vi)];
            disjunction.extend(orders.iter().map(|&p| Lit::positive(p)));
            solver
                .add_clause(disjunction.into_iter().collect::<rustsat::types::Clause>())
                .expect("adding clause to solver failed");
        }
    }

    // F5: every vertex belongs to at most one branch set.
    for v in 0..n {
        let assigns: Vec<u32> = (0..k).map(|i| pool.id(Descriptor::Assign { v, i })).collect();
        at_most_one(solver, pool, &assigns);
    }

    // F6: for o in 1..n, if v holds order o in branch i, some neighbour
    // of v must hold order o-1 in branch i -- BFS-reachability from the
    // root, one layer at a time.
    for i in 0..k {
        for v in 0..n {
            for o in 1..n {
                let p_voi = pool.id(Descriptor::Order { v, o, i });
                let mut disjunction: Vec<Lit> = vec![Lit::negative(p_voi)];
                for &u in graph.neighbors(v) {
                    disjunction.push(Lit::positive(pool.id(Descriptor::Order {
                        v: u,
                        o: o - 1,
                        i,
                    })));
                }
                solver
                    .add_clause(disjunction.into_iter().collect::<rustsat::types::Clause>())
                    .expect("adding clause to solver failed");
            }
        }
    }

    // F7 + F8: pairwise branch adjacency. For each edge {u, v} and each
    // pair of distinct branches i < j, C(u, v, i, j) witnesses u in
    // branch i adjacent (via this edge) to v in branch j, and
    // symmetrically C(u, v, j, i) for the mirror direction. At least one
    // contact variable must hold for every (i, j) pair.
    for i in 0..k {
        for j in (i + 1)..k {
            let mut contacts: Vec<Lit> = Vec::new();

            for &(u, v) in graph.edges() {
                let a_ui = pool.id(Descriptor::Assign { v: u, i });
                let a_vj = pool.id(Descriptor::Assign { v, i: j });
                let c_uvij = pool.id(Descriptor::Contact { u, v, i, j });

                // F7: C(u, v, i, j) -> A(u, i) and C(u, v, i, j) -> A(v, j).
                solver
                    .add_clause(clause([Lit::negative(c_uvij), Lit::positive(a_ui)]))
                    .expect("adding clause to solver failed");
                solver
                    .add_clause(clause([Lit::negative(c_uvij), Lit::positive(a_vj)]))
                    .expect("adding clause to solver failed");
                contacts.push(Lit::positive(c_uvij));

                // Mirror direction: u in branch j, v in branch i.
                let a_uj = pool.id(Descriptor::Assign { v: u, i: j });
                let a_vi = pool.id(Descriptor::Assign { v, i });
                let c_uvji = pool.id(Descriptor::Contact { u, v, i: j, j: i });

                solver
                    .add_clause(clause([Lit::negative(c_uvji), Lit::positive(a_uj)]))
                    .expect("adding clause to solver failed");
                solver
                    .add_clause(clause([Lit::negative(c_uvji), Lit::positive(a_vi)]))
                    .expect("adding clause to solver failed");
                contacts.push(Lit::positive(c_uvji));
            }

            // F8: at least one contact edge must witness branches i and j
            // touching.
            solver
                .add_clause(contacts.into_iter().collect::<rustsat::types::Clause>())
                .expect("adding clause to solver failed");
        }
    }
}

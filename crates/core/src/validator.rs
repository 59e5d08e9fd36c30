//! Independent structural check that a [`Solution`] is a genuine
//! Kₖ-minor witness (§4.4). Does not trust the SAT encoding: it
//! recomputes connectivity and adjacency directly on the graph.

use crate::graph::Graph;
use crate::solution::{Solution, UNASSIGNED};

/// Returns `true` iff `solution` witnesses a Kₖ minor of `graph`:
///
/// 1. Every branch set `B_0..B_{k-1}` is non-empty.
/// 2. Every branch set induces a connected subgraph.
/// 3. Every pair of branch sets is adjacent: for each `i`, the vertex
///    boundary of `B_i` touches all `k - 1` other branches.
#[must_use]
pub fn validate(solution: &Solution, graph: &Graph, k: usize) -> bool {
    if solution.num_vertices() != graph.num_vertices() {
        tracing::warn!(
            solution_len = solution.num_vertices(),
            graph_len = graph.num_vertices(),
            "validator: solution length does not match graph size"
        );
        return false;
    }

    let branch_sets: Vec<_> = (0..k).map(|i| solution.branch_set(i)).collect();

    for (i, b_i) in branch_sets.iter().enumerate() {
        if b_i.is_empty() {
            tracing::warn!(branch = i, "validator: branch set is empty");
            return false;
        }
        if !graph.induced_connected(b_i) {
            tracing::warn!(branch = i, "validator: branch set is not connected");
            return false;
        }

        let boundary = graph.vertex_boundary(b_i);
        let mut adjacent_branches: hashbrown::HashSet<i64> = boundary
            .iter()
            .map(|&w| solution.branch_of(w))
            .filter(|&b| b != UNASSIGNED)
            .collect();
        adjacent_branches.remove(&i64::try_from(i).expect("branch index fits in i64"));

        if adjacent_branches.len() < k - 1 {
            tracing::warn!(
                branch = i,
                adjacent = adjacent_branches.len(),
                required = k - 1,
                "validator: branch set is not adjacent to all other branches"
            );
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle_k3_is_a_valid_witness() {
        let mut g = Graph::new(3);
        g.add_edge(0, 1);
        g.add_edge(1, 2);
        g.add_edge(0, 2);
        let solution = Solution::new(vec![0, 1, 2]);
        assert!(validate(&solution, &g, 3));
    }

    #[test]
    fn empty_branch_set_is_rejected() {
        let mut g = Graph::new(3);
        g.add_edge(0, 1);
        g.add_edge(1, 2);
        g.add_edge(0, 2);
        let solution = Solution::new(vec![0, 0, 1]);
        assert!(!validate(&solution, &g, 3));
    }

    #[test]
    fn disconnected_branch_set_is_rejected() {
        // 0-1 2-3 isolated pairs, with vertex 4 bridging is absent: branch 0
        // gets {0, 3}, which is disconnected.
        let mut g = Graph::new(4);
        g.add_edge(0, 1);
        g.add_edge(2, 3);
        let solution = Solution::new(vec![0, 1, 1, 0]);
        assert!(!validate(&solution, &g, 2));
    }

    #[test]
    fn non_adjacent_branches_are_rejected() {
        let mut g = Graph::new(4);
        g.add_edge(0, 1);
        g.add_edge(2, 3);
        // No edge between {0,1} and {2,3}: branches cannot be adjacent.
        let solution = Solution::new(vec![0, 0, 1, 1]);
        assert!(!validate(&solution, &g, 2));
    }

    #[test]
    fn unassigned_vertices_do_not_count_as_adjacency_witnesses() {
        // 2 is a hub adjacent to both 0 and 1, but 0 and 1 are not
        // themselves adjacent. Leaving 2 unassigned must not let it stand
        // in as a false witness of contact between branches {0} and {1}.
        let mut g = Graph::new(3);
        g.add_edge(0, 2);
        g.add_edge(1, 2);
        let solution = Solution::new(vec![0, 1, -1]);
        assert!(!validate(&solution, &g, 2));
    }

    #[test]
    fn k1_single_vertex_is_trivially_valid() {
        let g = Graph::new(1);
        let solution = Solution::new(vec![0]);
        assert!(validate(&solution, &g, 1));
    }
}

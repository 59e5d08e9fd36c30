//! Integration tests exercising the concrete graph/k scenarios named in
//! §8, end to end through [`MinorChecker`].

use minorsat_core::Graph;
use minorsat_sat::MinorChecker;

fn complete_graph(n: usize) -> Graph {
    let mut g = Graph::new(n);
    for u in 0..n {
        for v in (u + 1)..n {
            g.add_edge(u, v);
        }
    }
    g
}

fn complete_bipartite(a: usize, b: usize) -> Graph {
    let mut g = Graph::new(a + b);
    for u in 0..a {
        for v in 0..b {
            g.add_edge(u, a + v);
        }
    }
    g
}

fn petersen_graph() -> Graph {
    let mut g = Graph::new(10);
    for i in 0..5 {
        g.add_edge(i, (i + 1) % 5);
        g.add_edge(5 + i, 5 + (i + 2) % 5);
        g.add_edge(i, 5 + i);
    }
    g
}

fn decide(graph: Graph, k: usize) -> bool {
    let mut checker = MinorChecker::build(graph, k);
    checker.run();
    checker.contains_minor().expect("run was called")
}

#[test]
fn triangle_k3_minor_k3() {
    assert!(decide(complete_graph(3), 3));
}

#[test]
fn path_p4_minor_k3() {
    let mut g = Graph::new(4);
    g.add_edge(0, 1);
    g.add_edge(1, 2);
    g.add_edge(2, 3);
    assert!(!decide(g, 3));
}

#[test]
fn k4_minus_edge_minor_k4() {
    let mut g = complete_graph(4);
    // K4 has 6 edges; remove one to drop below the 6 edges a K4 minor needs.
    g.add_edge(0, 1);
    let mut pruned = Graph::new(4);
    for &(u, v) in g.edges() {
        if (u, v) != (0, 1) {
            pruned.add_edge(u, v);
        }
    }
    assert!(!decide(pruned, 4));
}

#[test]
fn k5_minus_edge_minor_k4() {
    let mut pruned = Graph::new(5);
    for &(u, v) in complete_graph(5).edges() {
        if (u, v) != (0, 1) {
            pruned.add_edge(u, v);
        }
    }
    assert!(decide(pruned, 4));
}

#[test]
fn complete_bipartite_3_3_minor_k3() {
    assert!(decide(complete_bipartite(3, 3), 3));
}

#[test]
fn petersen_graph_minor_k5() {
    assert!(decide(petersen_graph(), 5));
}

#[test]
fn empty_graph_minor_k1() {
    assert!(!decide(Graph::new(0), 1));
}

#[test]
fn single_vertex_minor_k1() {
    assert!(decide(Graph::new(1), 1));
}

#[test]
fn two_vertices_no_edge_minor_k2() {
    assert!(!decide(Graph::new(2), 2));
}

#[test]
fn two_vertices_one_edge_minor_k2() {
    let mut g = Graph::new(2);
    g.add_edge(0, 1);
    assert!(decide(g, 2));
}

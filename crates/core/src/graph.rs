//! Undirected simple graph on vertices `0..n`.
//!
//! Mirrors the adjacency-map shape of `dbcop`'s `UGraph`, specialized to
//! densely-numbered `usize` vertices and backed by a `Vec` of adjacency
//! sets instead of a generic keyed map, since every vertex `0..n` is
//! guaranteed to exist.

use hashbrown::HashSet;

/// An undirected simple graph with vertices `0..n`.
///
/// Edges are stored both as per-vertex adjacency sets (for neighbor
/// lookups) and as an insertion-ordered list (for the stable iteration
/// order the encoder requires across a single run).
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adj: Vec<HashSet<usize>>,
    edges: Vec<(usize, usize)>,
}

impl Graph {
    /// Creates an edgeless graph on `n` vertices.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            adj: vec![HashSet::new(); n],
            edges: Vec::new(),
        }
    }

    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.adj.len()
    }

    /// Adds the undirected edge `{u, v}`. Idempotent: adding the same edge
    /// twice (in either orientation) has no additional effect. Self-loops
    /// are ignored since the encoding has no use for them.
    ///
    /// # Panics
    ///
    /// Panics if `u` or `v` is out of range.
    pub fn add_edge(&mut self, u: usize, v: usize) {
        assert!(u < self.adj.len() && v < self.adj.len(), "vertex out of range");
        if u == v {
            return;
        }
        if self.adj[u].insert(v) {
            self.adj[v].insert(u);
            let (a, b) = if u < v { (u, v) } else { (v, u) };
            self.edges.push((a, b));
        }
    }

    #[must_use]
    pub fn neighbors(&self, v: usize) -> &HashSet<usize> {
        &self.adj[v]
    }

    #[must_use]
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.adj[u].contains(&v)
    }

    /// Edges in stable insertion order, each as `(u, v)` with `u < v`.
    #[must_use]
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    /// Whether the subgraph induced on `vertices` is connected.
    ///
    /// An empty vertex set is *not* connected (branch sets must be
    /// non-empty, checked separately by the caller; this treats the empty
    /// case as `false` defensively rather than vacuously `true`).
    #[must_use]
    pub fn induced_connected(&self, vertices: &HashSet<usize>) -> bool {
        let Some(&start) = vertices.iter().next() else {
            return false;
        };
        let mut visited: HashSet<usize> = HashSet::new();
        let mut stack = vec![start];
        while let Some(v) = stack.pop() {
            if !visited.insert(v) {
                continue;
            }
            for &w in &self.adj[v] {
                if vertices.contains(&w) && !visited.contains(&w) {
                    stack.push(w);
                }
            }
        }
        visited.len() == vertices.len()
    }

    /// The vertex boundary of `vertices`: vertices outside the set adjacent
    /// to some vertex inside it.
    #[must_use]
    pub fn vertex_boundary(&self, vertices: &HashSet<usize>) -> HashSet<usize> {
        let mut boundary = HashSet::new();
        for &v in vertices {
            for &w in &self.adj[v] {
                if !vertices.contains(&w) {
                    boundary.insert(w);
                }
            }
        }
        boundary
    }
}

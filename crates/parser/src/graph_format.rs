//! Serialized-graph reader: the "opaque external graph library" input
//! path named by §6, resolved to `petgraph::graph::UnGraph<(), ()>`
//! serialized as JSON (Open Question, recorded in the grounding ledger).

use minorsat_core::Graph;
use petgraph::graph::UnGraph;

use crate::error::ParseError;

/// Reads a graph serialized as a JSON `petgraph::graph::UnGraph<(), ()>`.
///
/// Vertex indices in the resulting [`Graph`] follow `petgraph`'s own
/// node-index order; `petgraph` is treated as the opaque external graph
/// library, so no remapping of its indices is attempted.
///
/// # Errors
///
/// Returns a [`ParseError`] if `input` is not valid JSON or does not
/// describe a `petgraph` `UnGraph`.
pub fn read_serialized(input: &str) -> Result<Graph, ParseError> {
    let pg: UnGraph<(), ()> = serde_json::from_str(input)
        .map_err(|e| ParseError::new(format!("invalid serialized graph: {e}"), 1, 1))?;

    let mut graph = Graph::new(pg.node_count());
    for edge in pg.raw_edges() {
        let u = edge.source().index();
        let v = edge.target().index();
        graph.add_edge(u, v);
    }
    Ok(graph)
}

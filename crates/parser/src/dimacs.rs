//! DIMACS edge-format graph reader (§6).
//!
//! Line-oriented with no nested structure to backtrack over, so this is
//! hand-rolled per-line rather than built on a combinator parser.

use minorsat_core::Graph;

use crate::error::ParseError;

/// Reads a DIMACS edge-format graph from `input`.
///
/// Lines beginning with `c` or `p`, and empty lines, are ignored. Lines
/// beginning with `e` have the form `e u v` with `u`, `v` positive
/// 1-based integers; the edge `{u-1, v-1}` is added. Duplicate edges are
/// idempotent (`Graph::add_edge` already is). The vertex count is
/// inferred from the largest index any `e` line references, mirroring
/// the implicit node creation of the original's adjacency-list model.
///
/// # Errors
///
/// Returns a [`ParseError`] naming the offending line/column if an `e`
/// line is malformed or references a non-positive vertex index.
pub fn read_dimacs(input: &str) -> Result<Graph, ParseError> {
    let mut edges: Vec<(usize, usize)> = Vec::new();
    let mut max_vertex = 0usize;

    for (line_no, raw_line) in input.lines().enumerate() {
        let line = raw_line.trim();
        let line_num = line_no + 1;

        if line.is_empty() || line.starts_with('c') || line.starts_with('p') {
            continue;
        }

        if let Some(rest) = line.strip_prefix('e') {
            let mut fields = rest.split_whitespace();
            let u_tok = fields.next().ok_or_else(|| {
                ParseError::new("expected 'e u v', missing u", line_num, 1)
            })?;
            let v_tok = fields.next().ok_or_else(|| {
                ParseError::new("expected 'e u v', missing v", line_num, 1)
            })?;

            let u: usize = u_tok.parse().map_err(|_| {
                ParseError::new(format!("invalid vertex index {u_tok:?}"), line_num, 1)
            })?;
            let v: usize = v_tok.parse().map_err(|_| {
                ParseError::new(format!("invalid vertex index {v_tok:?}"), line_num, 1)
            })?;

            if u == 0 || v == 0 {
                return Err(ParseError::new(
                    "vertex indices are 1-based and must be positive",
                    line_num,
                    1,
                ));
            }

            max_vertex = max_vertex.max(u).max(v);
            edges.push((u - 1, v - 1));
            continue;
        }

        return Err(ParseError::new(
            format!("unrecognized line {line:?}, expected 'c', 'p', or 'e'"),
            line_num,
            1,
        ));
    }

    let mut graph = Graph::new(max_vertex);
    for (u, v) in edges {
        graph.add_edge(u, v);
    }
    Ok(graph)
}

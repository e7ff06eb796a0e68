//! Graphviz DOT export with optional path highlighting.

use std::collections::HashSet;
use std::fmt::Write as FmtWrite;

use crate::graph::{Graph, NodeId, Path};

// First highlighted path is blue, second red; an edge on both would be
// purple, which cannot happen for a truly vertex-disjoint pair but is
// rendered distinctly rather than picking a side.
const PATH_COLORS: [&str; 2] = ["blue", "red"];
const SHARED_COLOR: &str = "purple";

/// Renders the graph as a `digraph`, highlighting the edges of up to two
/// paths.  Every node id is declared and every edge is labeled with its
/// weight.
pub fn render_dot(graph: &Graph, highlighted: &[&Path]) -> String {
    let edge_sets: Vec<HashSet<(NodeId, NodeId)>> = highlighted
        .iter()
        .map(|path| path.windows(2).map(|pair| (pair[0], pair[1])).collect())
        .collect();

    let mut out = String::new();
    out.push_str("digraph G {\n");
    for node in 1..=graph.node_count() {
        let _ = writeln!(out, "    {};", node);
    }

    for edge in graph.edges() {
        let memberships: Vec<usize> = edge_sets
            .iter()
            .enumerate()
            .filter(|(_, set)| set.contains(&(edge.from, edge.to)))
            .map(|(index, _)| index)
            .collect();

        match memberships.as_slice() {
            [] => {
                let _ = writeln!(
                    out,
                    "    {} -> {} [label=\"{}\"];",
                    edge.from, edge.to, edge.weight
                );
            }
            [index] => {
                let _ = writeln!(
                    out,
                    "    {} -> {} [label=\"{}\", color=\"{}\", penwidth=2.0];",
                    edge.from,
                    edge.to,
                    edge.weight,
                    PATH_COLORS[(*index).min(PATH_COLORS.len() - 1)]
                );
            }
            _ => {
                let _ = writeln!(
                    out,
                    "    {} -> {} [label=\"{}\", color=\"{}\", penwidth=2.0];",
                    edge.from, edge.to, edge.weight, SHARED_COLOR
                );
            }
        }
    }

    out.push_str("}\n");
    out
}

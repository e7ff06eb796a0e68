//! DIMACS shortest-path format (`p sp` problem line, `a` arc lines).
//!
//! This is the interchange format used for stock road-network instances
//! such as Rome99.  Comment lines (`c`) and unknown line kinds are skipped;
//! the edge count on the problem line is informational only, the arcs that
//! actually appear win.

use std::fmt::Write as FmtWrite;
use std::fs;
use std::path::Path;

use crate::graph::{Graph, NodeId, Weight};

use super::error::DimacsError;

/// Parses DIMACS text into a graph with a freshly rebuilt adjacency index.
pub fn parse_dimacs(input: &str) -> Result<Graph, DimacsError> {
    let mut lines = input.lines();

    let node_count = loop {
        let line = match lines.next() {
            Some(line) => line,
            None => return Err(DimacsError::MissingProblemLine),
        };
        if line.is_empty() || line.starts_with('c') {
            continue;
        }
        if line.starts_with('p') {
            break parse_problem_line(line)?;
        }
    };

    let mut graph = Graph::new(node_count);
    for line in lines {
        if line.is_empty() || line.starts_with('c') {
            continue;
        }
        if line.starts_with('a') {
            let (from, to, weight) = parse_arc_line(line)?;
            graph.add_edge(from, to, weight);
        }
    }

    graph.rebuild_adjacency();
    Ok(graph)
}

/// Loads and parses a DIMACS graph file.
pub fn load_dimacs(path: &Path) -> Result<Graph, DimacsError> {
    let content = fs::read_to_string(path)
        .map_err(|e| DimacsError::ReadFile(path.display().to_string(), e))?;
    parse_dimacs(&content)
}

/// Renders a graph as DIMACS text, edges in insertion order.
pub fn save_dimacs(graph: &Graph) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "p sp {} {}", graph.node_count(), graph.edge_count());
    for edge in graph.edges() {
        let _ = writeln!(out, "a {} {} {}", edge.from, edge.to, edge.weight);
    }
    out
}

// Format: p sp <num_nodes> <num_edges>
fn parse_problem_line(line: &str) -> Result<usize, DimacsError> {
    let mut fields = line.split_whitespace();
    let malformed = || DimacsError::MalformedProblemLine(line.to_string());

    if fields.next() != Some("p") || fields.next() != Some("sp") {
        return Err(malformed());
    }
    let node_count = fields
        .next()
        .and_then(|field| field.parse::<usize>().ok())
        .ok_or_else(malformed)?;
    // The declared edge count is parsed for validity but otherwise unused.
    fields
        .next()
        .and_then(|field| field.parse::<usize>().ok())
        .ok_or_else(malformed)?;
    Ok(node_count)
}

// Format: a <from> <to> <weight>
fn parse_arc_line(line: &str) -> Result<(NodeId, NodeId, Weight), DimacsError> {
    let mut fields = line.split_whitespace();
    let malformed = || DimacsError::MalformedArcLine(line.to_string());

    if fields.next() != Some("a") {
        return Err(malformed());
    }
    let from = fields
        .next()
        .and_then(|field| field.parse::<NodeId>().ok())
        .ok_or_else(malformed)?;
    let to = fields
        .next()
        .and_then(|field| field.parse::<NodeId>().ok())
        .ok_or_else(malformed)?;
    let weight = fields
        .next()
        .and_then(|field| field.parse::<Weight>().ok())
        .ok_or_else(malformed)?;
    Ok((from, to, weight))
}

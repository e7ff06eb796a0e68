//! Tests for the DIMACS and DOT serialization collaborators, including the
//! contract that a loaded graph arrives query-ready (adjacency rebuilt).

use rusty_disjoint_paths::io::{parse_dimacs, render_dot, save_dimacs, DimacsError};
use rusty_disjoint_paths::search::find_disjoint_paths;

const DIAMOND_DIMACS: &str = "\
c diamond instance
p sp 4 4
a 1 2 1
a 2 4 1
a 1 3 1
a 3 4 1
";

#[test]
fn parsed_graph_is_immediately_queryable() {
    let g = parse_dimacs(DIAMOND_DIMACS).unwrap();
    let (p1, p2) = find_disjoint_paths(&g, 1, 4);
    assert_eq!(p1, vec![1, 2, 4]);
    assert_eq!(p2, vec![1, 3, 4]);
}

#[test]
fn save_preserves_shape_and_edge_order() {
    let g = parse_dimacs(DIAMOND_DIMACS).unwrap();
    assert_eq!(save_dimacs(&g), "p sp 4 4\na 1 2 1\na 2 4 1\na 1 3 1\na 3 4 1\n");
}

#[test]
fn truncated_input_reports_the_offending_line() {
    let err = parse_dimacs("p sp 4 4\na 1 2\n").unwrap_err();
    match err {
        DimacsError::MalformedArcLine(line) => assert_eq!(line, "a 1 2"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn dot_render_highlights_a_disjoint_pair() {
    let g = parse_dimacs(DIAMOND_DIMACS).unwrap();
    let (p1, p2) = find_disjoint_paths(&g, 1, 4);
    let out = render_dot(&g, &[&p1, &p2]);

    assert!(out.contains("1 -> 2 [label=\"1\", color=\"blue\", penwidth=2.0];"));
    assert!(out.contains("1 -> 3 [label=\"1\", color=\"red\", penwidth=2.0];"));
    assert!(!out.contains("purple"));
}

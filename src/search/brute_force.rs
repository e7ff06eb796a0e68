// brute_force.rs
// ──────────────────────────────────────────────────────────────────────────────
// Exhaustive simple-path enumeration and best vertex-disjoint pair
// selection.  Exponential in the worst case: intended for graphs with a
// handful of nodes, where its answer is the true optimum and serves as the
// ground truth the two-phase heuristic is compared against.  There is no
// depth or time guard; callers bound the input size instead.
// ──────────────────────────────────────────────────────────────────────────────

use std::collections::HashSet;

use crate::graph::{Graph, NodeId, Path, Weight};

use super::disjoint::path_cost;

/// Enumerates every simple path from `source` to `target` by backtracking
/// depth-first search.
///
/// Visited nodes are excluded from further extension, so no cycle can occur
/// and recursion depth is bounded by the node count.  Out-of-range endpoints
/// yield an empty result.  `source == target` yields the single-node path.
pub fn enumerate_all_paths(graph: &Graph, source: NodeId, target: NodeId) -> Vec<Path> {
    let mut all_paths = Vec::new();
    if !graph.contains_node(source) || !graph.contains_node(target) {
        return all_paths;
    }

    let mut visited = vec![false; graph.node_count() + 1];
    visited[source] = true;
    let mut current = vec![source];
    extend_paths(graph, source, target, &mut visited, &mut current, &mut all_paths);
    all_paths
}

fn extend_paths(
    graph: &Graph,
    node: NodeId,
    target: NodeId,
    visited: &mut [bool],
    current: &mut Path,
    all_paths: &mut Vec<Path>,
) {
    if node == target {
        all_paths.push(current.clone());
        return;
    }

    for edge in graph.outgoing(node) {
        let next = edge.to;
        if !graph.contains_node(next) || visited[next] {
            continue;
        }
        visited[next] = true;
        current.push(next);
        extend_paths(graph, next, target, visited, current, all_paths);
        current.pop();
        visited[next] = false;
    }
}

/// Finds the minimum-combined-cost pair of vertex-disjoint paths from
/// `source` to `target` by trying every unordered pair of simple paths.
///
/// Comparison is strict, so ties keep the first pair in enumeration order.
/// Returns two empty paths when the endpoints are invalid, `source ==
/// target`, or no disjoint pair exists.
pub fn brute_force_find_disjoint_paths(
    graph: &Graph,
    source: NodeId,
    target: NodeId,
) -> (Path, Path) {
    if !graph.contains_node(source) || !graph.contains_node(target) || source == target {
        return (Vec::new(), Vec::new());
    }

    let all_paths = enumerate_all_paths(graph, source, target);

    let mut best_cost: Option<Weight> = None;
    let mut best_pair = (Vec::new(), Vec::new());

    for i in 0..all_paths.len() {
        for j in (i + 1)..all_paths.len() {
            let first = &all_paths[i];
            let second = &all_paths[j];
            if !internally_disjoint(first, second) {
                continue;
            }

            let (cost1, cost2) = match (path_cost(graph, first), path_cost(graph, second)) {
                (Some(a), Some(b)) => (a, b),
                _ => continue,
            };
            let total = cost1 + cost2;
            if best_cost.map_or(true, |best| total < best) {
                best_cost = Some(total);
                best_pair = (first.clone(), second.clone());
            }
        }
    }

    best_pair
}

// Both paths have at least two nodes here (source != target), so the
// interior slices are well defined even when empty.
fn internally_disjoint(first: &Path, second: &Path) -> bool {
    let interior: HashSet<NodeId> = first[1..first.len() - 1].iter().copied().collect();
    second[1..second.len() - 1]
        .iter()
        .all(|node| !interior.contains(node))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diamond() -> Graph {
        let mut g = Graph::new(4);
        g.add_edge(1, 2, 1);
        g.add_edge(2, 4, 1);
        g.add_edge(1, 3, 1);
        g.add_edge(3, 4, 1);
        g.rebuild_adjacency();
        g
    }

    #[test]
    fn enumerates_both_diamond_branches_in_order() {
        let g = diamond();
        let paths = enumerate_all_paths(&g, 1, 4);
        assert_eq!(paths, vec![vec![1, 2, 4], vec![1, 3, 4]]);
    }

    #[test]
    fn enumeration_handles_cycles() {
        let mut g = Graph::new(3);
        g.add_edge(1, 2, 1);
        g.add_edge(2, 1, 1);
        g.add_edge(2, 3, 1);
        g.add_edge(3, 1, 1);
        g.rebuild_adjacency();

        let paths = enumerate_all_paths(&g, 1, 3);
        assert_eq!(paths, vec![vec![1, 2, 3]]);
    }

    #[test]
    fn enumeration_of_source_equals_target_is_the_trivial_path() {
        let g = diamond();
        assert_eq!(enumerate_all_paths(&g, 2, 2), vec![vec![2]]);
    }

    #[test]
    fn enumeration_rejects_out_of_range_endpoints() {
        let g = diamond();
        assert!(enumerate_all_paths(&g, 0, 4).is_empty());
        assert!(enumerate_all_paths(&g, 1, 7).is_empty());
    }

    #[test]
    fn oracle_finds_the_diamond_pair() {
        let g = diamond();
        let (p1, p2) = brute_force_find_disjoint_paths(&g, 1, 4);
        assert_eq!(p1, vec![1, 2, 4]);
        assert_eq!(p2, vec![1, 3, 4]);
    }

    #[test]
    fn oracle_prefers_the_cheapest_disjoint_pair() {
        // Three parallel two-hop routes; the pair avoiding the expensive
        // middle route must win.
        let mut g = Graph::new(5);
        g.add_edge(1, 2, 1);
        g.add_edge(2, 5, 1);
        g.add_edge(1, 3, 50);
        g.add_edge(3, 5, 50);
        g.add_edge(1, 4, 2);
        g.add_edge(4, 5, 2);
        g.rebuild_adjacency();

        let (p1, p2) = brute_force_find_disjoint_paths(&g, 1, 5);
        assert_eq!(p1, vec![1, 2, 5]);
        assert_eq!(p2, vec![1, 4, 5]);
    }

    #[test]
    fn oracle_ties_keep_enumeration_order() {
        // Both candidate pairs cost the same; strict comparison keeps the
        // pair found first.
        let mut g = Graph::new(6);
        g.add_edge(1, 2, 1);
        g.add_edge(2, 6, 1);
        g.add_edge(1, 3, 1);
        g.add_edge(3, 6, 1);
        g.add_edge(1, 4, 1);
        g.add_edge(4, 6, 1);
        g.rebuild_adjacency();

        let (p1, p2) = brute_force_find_disjoint_paths(&g, 1, 6);
        assert_eq!(p1, vec![1, 2, 6]);
        assert_eq!(p2, vec![1, 3, 6]);
    }

    #[test]
    fn oracle_rejects_invalid_and_degenerate_endpoints() {
        let g = diamond();
        assert_eq!(brute_force_find_disjoint_paths(&g, 5, 4), (vec![], vec![]));
        assert_eq!(brute_force_find_disjoint_paths(&g, 1, 0), (vec![], vec![]));
        assert_eq!(brute_force_find_disjoint_paths(&g, 3, 3), (vec![], vec![]));
    }

    #[test]
    fn oracle_reports_no_pair_on_a_single_route() {
        let mut g = Graph::new(3);
        g.add_edge(1, 2, 1);
        g.add_edge(2, 3, 1);
        g.rebuild_adjacency();

        assert_eq!(brute_force_find_disjoint_paths(&g, 1, 3), (vec![], vec![]));
    }
}

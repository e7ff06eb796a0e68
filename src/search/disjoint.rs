// disjoint.rs
// ──────────────────────────────────────────────────────────────────────────────
// Two-phase vertex-disjoint path heuristic: take the shortest path, strip
// its interior from a copy of the graph, and reroute.  Greedy by design --
// the pair it returns shares no internal vertex, but it is not guaranteed
// to have minimum combined cost, and it can miss a disjoint pair that only
// exists via edges the strip removed.  The brute-force oracle is the ground
// truth on graphs small enough to enumerate.
// ──────────────────────────────────────────────────────────────────────────────

use std::collections::HashSet;

use crate::graph::{Graph, NodeId, Path, Weight};

use super::dijkstra::{dijkstra, reconstruct_path};

/// Finds two vertex-disjoint paths from `source` to `target`, both empty on
/// any failure.
///
/// Failure modes are deliberately indistinguishable to the caller: endpoints
/// out of range, `source == target` (rejected outright, since a single-node
/// path has no well-defined interior), no first path, no second path after
/// stripping, or the two paths coinciding.
pub fn find_disjoint_paths(graph: &Graph, source: NodeId, target: NodeId) -> (Path, Path) {
    if !graph.contains_node(source) || !graph.contains_node(target) || source == target {
        return (Vec::new(), Vec::new());
    }

    let first_tree = dijkstra(graph, source);
    let path1 = reconstruct_path(&first_tree, source, target);
    if path1.is_empty() {
        return (Vec::new(), Vec::new());
    }

    let stripped = strip_first_path(graph, &path1);
    let second_tree = dijkstra(&stripped, source);
    let path2 = reconstruct_path(&second_tree, source, target);
    if path2.is_empty() || path1 == path2 {
        return (Vec::new(), Vec::new());
    }

    (path1, path2)
}

/// Builds the transformed graph for the second pass: same node count, minus
/// every edge touching an internal vertex of `path1` and every edge that
/// coincides with a `path1` edge (same ordered endpoint pair).
///
/// Always a freshly owned graph with its own adjacency index, never a view
/// of the original, so the original stays query-safe for repeated calls.
fn strip_first_path(graph: &Graph, path1: &Path) -> Graph {
    let internal: HashSet<NodeId> = path1[1..path1.len() - 1].iter().copied().collect();
    let path_edges: HashSet<(NodeId, NodeId)> =
        path1.windows(2).map(|pair| (pair[0], pair[1])).collect();

    let mut stripped = Graph::new(graph.node_count());
    for edge in graph.edges() {
        if internal.contains(&edge.from) || internal.contains(&edge.to) {
            continue;
        }
        if path_edges.contains(&(edge.from, edge.to)) {
            continue;
        }
        stripped.add_edge(edge.from, edge.to, edge.weight);
    }
    stripped.rebuild_adjacency();
    stripped
}

/// Sums the weight of each consecutive edge of `path`, taking the first
/// matching edge in the adjacency list when duplicates exist.
///
/// Returns `None` when the path claims an edge the graph does not have.  A
/// path produced by this crate's own algorithms can never trigger that;
/// callers should treat `None` as an internal invariant violation rather
/// than folding it into an "infinite" cost.
pub fn path_cost(graph: &Graph, path: &Path) -> Option<Weight> {
    let mut cost: Weight = 0;
    for pair in path.windows(2) {
        let weight = graph
            .outgoing(pair[0])
            .iter()
            .find(|edge| edge.to == pair[1])
            .map(|edge| edge.weight)?;
        cost += weight;
    }
    Some(cost)
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
    fn diamond_yields_both_branches() {
        let g = diamond();
        let (p1, p2) = find_disjoint_paths(&g, 1, 4);
        assert_eq!(p1, vec![1, 2, 4]);
        assert_eq!(p2, vec![1, 3, 4]);
        assert_eq!(path_cost(&g, &p1), Some(2));
        assert_eq!(path_cost(&g, &p2), Some(2));
    }

    #[test]
    fn single_route_fails() {
        let mut g = Graph::new(3);
        g.add_edge(1, 2, 1);
        g.add_edge(2, 3, 1);
        g.rebuild_adjacency();

        assert_eq!(find_disjoint_paths(&g, 1, 3), (vec![], vec![]));
    }

    #[test]
    fn out_of_range_and_degenerate_endpoints_fail() {
        let g = diamond();
        assert_eq!(find_disjoint_paths(&g, 0, 4), (vec![], vec![]));
        assert_eq!(find_disjoint_paths(&g, 1, 9), (vec![], vec![]));
        assert_eq!(find_disjoint_paths(&g, 2, 2), (vec![], vec![]));
    }

    #[test]
    fn unreachable_target_fails() {
        let g = Graph::new(3);
        assert_eq!(find_disjoint_paths(&g, 1, 3), (vec![], vec![]));
    }

    #[test]
    fn duplicate_direct_edges_do_not_count_as_two_paths() {
        // Both copies of (1, 2) share the ordered endpoint pair, so the
        // strip removes them together and the second pass finds nothing.
        let mut g = Graph::new(2);
        g.add_edge(1, 2, 5);
        g.add_edge(1, 2, 7);
        g.rebuild_adjacency();

        assert_eq!(find_disjoint_paths(&g, 1, 2), (vec![], vec![]));
    }

    #[test]
    fn strip_removes_interior_and_path_edges_only() {
        let g = diamond();
        let stripped = strip_first_path(&g, &vec![1, 2, 4]);
        let remaining: Vec<(NodeId, NodeId)> =
            stripped.edges().iter().map(|e| (e.from, e.to)).collect();
        assert_eq!(remaining, vec![(1, 3), (3, 4)]);
    }

    #[test]
    fn heuristic_can_miss_a_pair_the_oracle_finds() {
        // The cheap cross route 1-2-5-6 uses one interior node from each of
        // the only two disjoint routes, so stripping it disconnects the
        // second pass.  Accepted failure mode of the two-phase approach.
        let mut g = Graph::new(6);
        g.add_edge(1, 2, 1);
        g.add_edge(2, 5, 1);
        g.add_edge(5, 6, 1);
        g.add_edge(2, 3, 10);
        g.add_edge(3, 6, 10);
        g.add_edge(1, 4, 10);
        g.add_edge(4, 5, 10);
        g.rebuild_adjacency();

        assert_eq!(find_disjoint_paths(&g, 1, 6), (vec![], vec![]));

        let (b1, b2) = crate::search::brute_force_find_disjoint_paths(&g, 1, 6);
        assert!(!b1.is_empty() && !b2.is_empty());
    }

    #[test]
    fn path_cost_flags_missing_edges() {
        let g = diamond();
        assert_eq!(path_cost(&g, &vec![1, 4]), None);
        assert_eq!(path_cost(&g, &vec![2]), Some(0));
        assert_eq!(path_cost(&g, &vec![]), Some(0));
    }

    #[test]
    fn path_cost_takes_first_duplicate_match() {
        let mut g = Graph::new(2);
        g.add_edge(1, 2, 3);
        g.add_edge(1, 2, 8);
        g.rebuild_adjacency();

        assert_eq!(path_cost(&g, &vec![1, 2]), Some(3));
    }
}

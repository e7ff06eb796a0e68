// dijkstra.rs
// ──────────────────────────────────────────────────────────────────────────────
// Single-source shortest paths via classic Dijkstra with a binary min-heap.
// Stale heap entries from repeated relaxation are tolerated and skipped on
// pop by comparing the popped distance against the current best.
//
// Correctness assumes non-negative edge weights; the store accepts negative
// weights but this engine's behavior is then undefined.
// ──────────────────────────────────────────────────────────────────────────────

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::graph::{Graph, NodeId, Path, Weight};

/// Result of a single-source shortest-path run: per-node best-known distance
/// and predecessor on the best-known path, both `None` when unreached.
#[derive(Clone, Debug)]
pub struct ShortestPathTree {
    dist: Vec<Option<Weight>>,
    pred: Vec<Option<NodeId>>,
}

impl ShortestPathTree {
    fn unreached(node_count: usize) -> Self {
        Self {
            dist: vec![None; node_count + 1],
            pred: vec![None; node_count + 1],
        }
    }

    /// Minimum known cost from the source to `node`, `None` if unreached or
    /// out of range.
    pub fn distance(&self, node: NodeId) -> Option<Weight> {
        self.dist.get(node).copied().flatten()
    }

    /// Previous node on the best known path to `node`.
    pub fn predecessor(&self, node: NodeId) -> Option<NodeId> {
        self.pred.get(node).copied().flatten()
    }

    pub fn is_reached(&self, node: NodeId) -> bool {
        self.distance(node).is_some()
    }
}

// Heap entry ordered so that the smallest tentative distance pops first,
// with the node id as a deterministic tie-break.
#[derive(Clone, Copy, PartialEq, Eq)]
struct QueueEntry {
    dist: Weight,
    node: NodeId,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .dist
            .cmp(&self.dist)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Runs Dijkstra from `source` over the graph's adjacency index.
///
/// Precondition: the adjacency index has been rebuilt since the last edge
/// insertion.  A `source` outside `1..=node_count` yields an all-unreached
/// tree instead of a panic.
pub fn dijkstra(graph: &Graph, source: NodeId) -> ShortestPathTree {
    let mut tree = ShortestPathTree::unreached(graph.node_count());
    if !graph.contains_node(source) {
        return tree;
    }

    tree.dist[source] = Some(0);
    let mut queue = BinaryHeap::new();
    queue.push(QueueEntry {
        dist: 0,
        node: source,
    });

    while let Some(QueueEntry { dist, node }) = queue.pop() {
        // Skip stale entries superseded by a later relaxation.
        if let Some(best) = tree.dist[node] {
            if dist > best {
                continue;
            }
        }

        for edge in graph.outgoing(node) {
            if !graph.contains_node(edge.to) {
                continue;
            }
            let candidate = dist + edge.weight;
            let improved = match tree.dist[edge.to] {
                None => true,
                Some(current) => candidate < current,
            };
            if improved {
                tree.dist[edge.to] = Some(candidate);
                tree.pred[edge.to] = Some(node);
                queue.push(QueueEntry {
                    dist: candidate,
                    node: edge.to,
                });
            }
        }
    }

    tree
}

/// Walks predecessor links from `target` back to `source` and reverses.
///
/// Returns an empty path when `target` is unreached; a reached target always
/// yields a non-empty path, so emptiness doubles as the reachability signal.
pub fn reconstruct_path(tree: &ShortestPathTree, source: NodeId, target: NodeId) -> Path {
    if !tree.is_reached(target) {
        return Vec::new();
    }
    if target != source && tree.predecessor(target).is_none() {
        return Vec::new();
    }

    let mut path = Vec::new();
    let mut current = Some(target);
    while let Some(node) = current {
        path.push(node);
        current = tree.predecessor(node);
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> Graph {
        let mut g = Graph::new(4);
        g.add_edge(1, 2, 3);
        g.add_edge(2, 3, 4);
        g.add_edge(3, 4, 5);
        g.rebuild_adjacency();
        g
    }

    #[test]
    fn distances_and_path_on_a_chain() {
        let g = chain();
        let tree = dijkstra(&g, 1);
        assert_eq!(tree.distance(1), Some(0));
        assert_eq!(tree.distance(3), Some(7));
        assert_eq!(tree.distance(4), Some(12));
        assert_eq!(reconstruct_path(&tree, 1, 4), vec![1, 2, 3, 4]);
    }

    #[test]
    fn relaxation_prefers_the_cheaper_route() {
        let mut g = Graph::new(3);
        g.add_edge(1, 3, 10);
        g.add_edge(1, 2, 1);
        g.add_edge(2, 3, 2);
        g.rebuild_adjacency();

        let tree = dijkstra(&g, 1);
        assert_eq!(tree.distance(3), Some(3));
        assert_eq!(reconstruct_path(&tree, 1, 3), vec![1, 2, 3]);
    }

    #[test]
    fn duplicate_edges_relax_to_the_cheapest() {
        let mut g = Graph::new(2);
        g.add_edge(1, 2, 9);
        g.add_edge(1, 2, 2);
        g.rebuild_adjacency();

        let tree = dijkstra(&g, 1);
        assert_eq!(tree.distance(2), Some(2));
    }

    #[test]
    fn unreached_target_yields_empty_path() {
        let mut g = Graph::new(3);
        g.add_edge(1, 2, 1);
        g.rebuild_adjacency();

        let tree = dijkstra(&g, 1);
        assert_eq!(tree.distance(3), None);
        assert!(reconstruct_path(&tree, 1, 3).is_empty());
    }

    #[test]
    fn reachability_matches_path_emptiness() {
        let g = chain();
        let tree = dijkstra(&g, 2);
        for node in 1..=4 {
            let path = reconstruct_path(&tree, 2, node);
            assert_eq!(tree.is_reached(node), !path.is_empty());
        }
    }

    #[test]
    fn out_of_range_source_reaches_nothing() {
        let g = chain();
        let tree = dijkstra(&g, 9);
        for node in 1..=4 {
            assert!(!tree.is_reached(node));
        }
        assert!(reconstruct_path(&tree, 9, 4).is_empty());
    }

    #[test]
    fn source_path_is_the_single_node() {
        let g = chain();
        let tree = dijkstra(&g, 2);
        assert_eq!(reconstruct_path(&tree, 2, 2), vec![2]);
    }
}

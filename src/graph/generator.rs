use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

use super::graph::{Graph, NodeId, Weight};

/// Generates a random directed graph with `node_count` nodes and up to
/// `edge_count` edges, deterministically for a fixed `seed`.
///
/// Self-loops and duplicate ordered `(u, v)` pairs are rejected; weights are
/// drawn uniformly from `min_weight..=max_weight`.  Generation gives up after
/// `edge_count * 10` draws, so small or dense requests may end with fewer
/// edges than asked for.
///
/// The returned graph has a fresh adjacency index; callers that add further
/// edges must rebuild it themselves.
pub fn generate_random_graph(
    node_count: usize,
    edge_count: usize,
    min_weight: Weight,
    max_weight: Weight,
    seed: u64,
) -> Graph {
    let mut graph = Graph::new(node_count);
    if node_count == 0 || min_weight > max_weight {
        return graph;
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut seen: HashSet<(NodeId, NodeId)> = HashSet::new();

    let max_attempts = edge_count.saturating_mul(10);
    let mut attempts = 0;
    while graph.edge_count() < edge_count && attempts < max_attempts {
        let u = rng.gen_range(1..=node_count);
        let v = rng.gen_range(1..=node_count);
        if u != v && !seen.contains(&(u, v)) {
            let w = rng.gen_range(min_weight..=max_weight);
            graph.add_edge(u, v, w);
            seen.insert((u, v));
        }
        attempts += 1;
    }

    graph.rebuild_adjacency();
    graph
}

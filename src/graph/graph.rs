// graph.rs
// ──────────────────────────────────────────────────────────────────────────────
// Directed weighted graph with integer node ids in `1..=node_count`.
// Edges are kept in insertion order; a per-node adjacency index is derived
// from them on demand.  Nodes are not first-class objects, only indices into
// the adjacency buckets.
// ──────────────────────────────────────────────────────────────────────────────

/// Identifier of a node; valid ids run from 1 to the graph's node count.
pub type NodeId = usize;

/// Edge weight. Negative weights are accepted by the store but leave the
/// shortest-path engine's behavior undefined.
pub type Weight = i64;

/// A simple path `[source, ..., target]` with no repeated node.
pub type Path = Vec<NodeId>;

/// A directed edge `(from, to)` with an integer weight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: Weight,
}

/// Directed weighted graph backed by an insertion-ordered edge list.
///
/// The adjacency index is only valid after [`Graph::rebuild_adjacency`] has
/// been called following the last [`Graph::add_edge`]; queries issued against
/// a stale index silently observe the old edge set.  This is a documented
/// precondition, not a guarded error, so that caller bugs stay visible.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    node_count: usize,
    edges: Vec<Edge>,
    // Bucket 0 is unused; node ids are 1-based.
    adjacency: Vec<Vec<Edge>>,
}

impl Graph {
    /// Creates an empty graph with nodes `1..=node_count`.
    pub fn new(node_count: usize) -> Self {
        Self {
            node_count,
            edges: Vec::new(),
            adjacency: vec![Vec::new(); node_count + 1],
        }
    }

    /// Appends an edge to the edge sequence.
    ///
    /// No bounds validation is performed: out-of-range endpoints are stored
    /// but never reachable through the adjacency index.  Duplicate `(from,
    /// to)` pairs are kept as distinct edges.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight: Weight) {
        self.edges.push(Edge { from, to, weight });
    }

    /// Clears and repopulates the adjacency index from the edge sequence.
    ///
    /// Per-node edge order matches insertion order.  Must be called before
    /// any shortest-path or enumeration query.
    pub fn rebuild_adjacency(&mut self) {
        for bucket in &mut self.adjacency {
            bucket.clear();
        }
        for edge in &self.edges {
            if edge.from >= 1 && edge.from <= self.node_count {
                self.adjacency[edge.from].push(*edge);
            }
        }
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Full edge sequence, in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Read-only view of the adjacency index, indexed by node id.
    pub fn adjacency(&self) -> &[Vec<Edge>] {
        &self.adjacency
    }

    /// Outgoing edges of `node` in insertion order; empty for ids outside
    /// `1..=node_count`.
    pub fn outgoing(&self, node: NodeId) -> &[Edge] {
        self.adjacency
            .get(node)
            .map(|bucket| bucket.as_slice())
            .unwrap_or(&[])
    }

    /// Whether `node` is a valid id for this graph.
    pub fn contains_node(&self, node: NodeId) -> bool {
        node >= 1 && node <= self.node_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacency_preserves_insertion_order_per_node() {
        let mut g = Graph::new(3);
        g.add_edge(1, 3, 7);
        g.add_edge(2, 1, 4);
        g.add_edge(1, 2, 5);
        g.rebuild_adjacency();

        let out: Vec<NodeId> = g.outgoing(1).iter().map(|e| e.to).collect();
        assert_eq!(out, vec![3, 2]);
        assert_eq!(g.outgoing(2).len(), 1);
        assert_eq!(g.outgoing(3).len(), 0);
        assert_eq!(g.adjacency().len(), 4);
        assert_eq!(g.adjacency()[1].len(), 2);
    }

    #[test]
    fn duplicate_edges_are_kept() {
        let mut g = Graph::new(2);
        g.add_edge(1, 2, 1);
        g.add_edge(1, 2, 9);
        g.rebuild_adjacency();

        assert_eq!(g.edge_count(), 2);
        let weights: Vec<Weight> = g.outgoing(1).iter().map(|e| e.weight).collect();
        assert_eq!(weights, vec![1, 9]);
    }

    #[test]
    fn out_of_range_endpoints_are_stored_but_not_indexed() {
        let mut g = Graph::new(2);
        g.add_edge(5, 1, 3);
        g.add_edge(0, 2, 3);
        g.rebuild_adjacency();

        assert_eq!(g.edge_count(), 2);
        assert!(g.outgoing(1).is_empty());
        assert!(g.outgoing(2).is_empty());
        assert!(g.outgoing(5).is_empty());
    }

    #[test]
    fn adjacency_is_stale_until_rebuilt() {
        let mut g = Graph::new(2);
        g.add_edge(1, 2, 1);
        g.rebuild_adjacency();
        g.add_edge(2, 1, 1);

        assert!(g.outgoing(2).is_empty());
        g.rebuild_adjacency();
        assert_eq!(g.outgoing(2).len(), 1);
    }

    #[test]
    fn contains_node_bounds() {
        let g = Graph::new(3);
        assert!(!g.contains_node(0));
        assert!(g.contains_node(1));
        assert!(g.contains_node(3));
        assert!(!g.contains_node(4));
    }
}

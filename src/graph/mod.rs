// generator module
mod generator;
// graph module
mod graph;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports from the graph module.
//─────────────────────────────────────────────────────────────────────────────
pub use generator::generate_random_graph;
pub use graph::{Edge, Graph, NodeId, Path, Weight};

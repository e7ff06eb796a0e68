// brute_force module
mod brute_force;
// dijkstra module
mod dijkstra;
// disjoint module
mod disjoint;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports from the search module.
//─────────────────────────────────────────────────────────────────────────────
pub use brute_force::{brute_force_find_disjoint_paths, enumerate_all_paths};
pub use dijkstra::{dijkstra, reconstruct_path, ShortestPathTree};
pub use disjoint::{find_disjoint_paths, path_cost};

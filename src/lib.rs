//! Minimum-cost vertex-disjoint path discovery for directed weighted graphs.
//!
//! The crate pairs a fast two-phase heuristic (shortest path, strip its
//! interior, reroute) with an exhaustive brute-force solver that doubles as
//! a correctness oracle on small graphs.

pub mod app;
pub mod graph;
pub mod io;
pub mod search;

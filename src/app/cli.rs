use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Finds two minimum-cost vertex-disjoint paths in directed weighted graphs.", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Command,

    /// Suppress verbose logging; only results and errors are printed.
    #[clap(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a seeded random graph and run the two-phase heuristic on it.
    Random {
        /// Number of nodes (ids 1..=N).
        #[clap(long)]
        nodes: usize,

        /// Number of edges to attempt to generate.
        #[clap(long)]
        edges: usize,

        #[clap(long, default_value_t = 1)]
        min_weight: i64,

        #[clap(long, default_value_t = 10)]
        max_weight: i64,

        /// RNG seed; identical seeds reproduce identical graphs.
        #[clap(long, default_value_t = 42)]
        seed: u64,

        #[clap(long, default_value_t = 1)]
        source: usize,

        #[clap(long)]
        target: usize,

        /// Write the graph with both paths highlighted as a DOT file.
        #[clap(long)]
        dot: Option<PathBuf>,

        /// Save the generated graph in DIMACS format.
        #[clap(long)]
        save_dimacs: Option<PathBuf>,
    },

    /// Load a DIMACS graph file and run the two-phase heuristic on it.
    Load {
        /// DIMACS shortest-path file (e.g. data/Rome99.gr).
        file: PathBuf,

        #[clap(long, default_value_t = 1)]
        source: usize,

        #[clap(long)]
        target: usize,

        /// Write the graph with both paths highlighted as a DOT file.
        #[clap(long)]
        dot: Option<PathBuf>,
    },

    /// Run the exhaustive brute-force solver on a tiny random graph.
    Brute {
        #[clap(long, default_value_t = 5)]
        nodes: usize,

        #[clap(long, default_value_t = 10)]
        edges: usize,

        #[clap(long, default_value_t = 1)]
        min_weight: i64,

        #[clap(long, default_value_t = 10)]
        max_weight: i64,

        #[clap(long, default_value_t = 42)]
        seed: u64,

        #[clap(long, default_value_t = 1)]
        source: usize,

        /// Defaults to the highest node id.
        #[clap(long)]
        target: Option<usize>,
    },

    /// Compare brute force against the heuristic across graph sizes.
    Compare {
        #[clap(long, default_value_t = 42)]
        seed: u64,
    },
}

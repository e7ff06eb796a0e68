//! Command handlers for the disjoint-path driver.
//!
//! Each handler builds or loads a graph, runs the requested solver, and
//! reports paths, costs, and timings.  Verbose narration goes to the log
//! file via the `verbose_println!` macros; results go to stdout.

use super::error::AppError;
use super::file_handler;
use super::{verbose_eprintln, verbose_println}; // Macros for conditional logging.
use crate::graph::{generate_random_graph, Graph, NodeId, Path as GraphPath};
use crate::io::{load_dimacs, render_dot, save_dimacs};
use crate::search::{brute_force_find_disjoint_paths, find_disjoint_paths, path_cost};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Graph size configurations for the comparison harness: small instances
/// where brute force is feasible, then medium ones where it may crawl.
const COMPARISON_CONFIGS: [(usize, usize); 6] =
    [(5, 10), (6, 15), (10, 30), (50, 150), (100, 300), (200, 600)];

fn measure<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}

fn format_path(path: &GraphPath) -> String {
    path.iter()
        .map(|node| node.to_string())
        .collect::<Vec<String>>()
        .join(" -> ")
}

fn log_graph_info(graph: &Graph, quiet_mode: bool) {
    verbose_println!(quiet_mode, "Graph information:");
    verbose_println!(quiet_mode, "  Nodes: {}", graph.node_count());
    verbose_println!(quiet_mode, "  Edges: {}", graph.edge_count());
    for edge in graph.edges() {
        verbose_println!(
            quiet_mode,
            "  {} -> {} (weight {})",
            edge.from,
            edge.to,
            edge.weight
        );
    }
}

// `path_cost` returning None on a path our own solvers produced means the
// graph and the path disagree, which is an invariant violation worth a hard
// error rather than a silent "infinite" cost.
fn checked_path_cost(graph: &Graph, path: &GraphPath) -> Result<i64, AppError> {
    path_cost(graph, path).ok_or_else(|| {
        AppError::Internal(format!(
            "path [{}] references an edge missing from the graph",
            format_path(path)
        ))
    })
}

/// Generates a seeded random graph and runs the heuristic between `source`
/// and `target`, with optional DOT and DIMACS outputs.
#[allow(clippy::too_many_arguments)]
pub fn run_random(
    nodes: usize,
    edges: usize,
    min_weight: i64,
    max_weight: i64,
    seed: u64,
    source: NodeId,
    target: NodeId,
    dot: Option<PathBuf>,
    save_dimacs_path: Option<PathBuf>,
    quiet_mode: bool,
) -> Result<(), AppError> {
    if min_weight > max_weight {
        return Err(AppError::InvalidInput(format!(
            "min-weight {} exceeds max-weight {}",
            min_weight, max_weight
        )));
    }

    verbose_println!(
        quiet_mode,
        "[STEP 1] Generating random graph ({} nodes, {} edges, seed {})...",
        nodes,
        edges,
        seed
    );
    let (graph, build_time) =
        measure(|| generate_random_graph(nodes, edges, min_weight, max_weight, seed));
    println!(
        "Generated graph with {} nodes and {} edges in {:.6}s.",
        graph.node_count(),
        graph.edge_count(),
        build_time.as_secs_f64()
    );
    log_graph_info(&graph, quiet_mode);

    if let Some(path) = &save_dimacs_path {
        file_handler::write_content_to_file(path, &save_dimacs(&graph))?;
        verbose_println!(quiet_mode, "Saved DIMACS graph to {}", path.display());
    }

    report_heuristic_run(&graph, source, target, dot.as_deref(), quiet_mode)
}

/// Loads a DIMACS graph file and runs the heuristic between `source` and
/// `target`.
pub fn run_load(
    file: &Path,
    source: NodeId,
    target: NodeId,
    dot: Option<PathBuf>,
    quiet_mode: bool,
) -> Result<(), AppError> {
    file_handler::validate_graph_file(file, quiet_mode)?;

    verbose_println!(quiet_mode, "[STEP 1] Loading DIMACS graph from {}...", file.display());
    let (loaded, load_time) = measure(|| load_dimacs(file));
    let graph = loaded?;
    println!(
        "Loaded graph with {} nodes and {} edges from {} in {:.6}s.",
        graph.node_count(),
        graph.edge_count(),
        file.display(),
        load_time.as_secs_f64()
    );

    report_heuristic_run(&graph, source, target, dot.as_deref(), quiet_mode)
}

/// Runs the brute-force solver on a tiny seeded random graph.
#[allow(clippy::too_many_arguments)]
pub fn run_brute(
    nodes: usize,
    edges: usize,
    min_weight: i64,
    max_weight: i64,
    seed: u64,
    source: NodeId,
    target: Option<NodeId>,
    quiet_mode: bool,
) -> Result<(), AppError> {
    if min_weight > max_weight {
        return Err(AppError::InvalidInput(format!(
            "min-weight {} exceeds max-weight {}",
            min_weight, max_weight
        )));
    }
    let target = target.unwrap_or(nodes);

    verbose_println!(
        quiet_mode,
        "[STEP 1] Generating tiny random graph ({} nodes, {} edges, seed {})...",
        nodes,
        edges,
        seed
    );
    let graph = generate_random_graph(nodes, edges, min_weight, max_weight, seed);
    log_graph_info(&graph, quiet_mode);

    verbose_println!(
        quiet_mode,
        "[STEP 2] Running brute force from {} to {}...",
        source,
        target
    );
    let ((path1, path2), search_time) =
        measure(|| brute_force_find_disjoint_paths(&graph, source, target));
    println!(
        "Brute force search took {:.6}s.",
        search_time.as_secs_f64()
    );

    if path1.is_empty() || path2.is_empty() {
        println!(
            "No two vertex-disjoint paths found from {} to {}.",
            source, target
        );
        return Ok(());
    }

    print_path_pair(&graph, &path1, &path2)?;
    Ok(())
}

/// Runs both solvers over the fixed size configurations and tabulates
/// timing plus whether each found a pair.
pub fn run_compare(seed: u64, quiet_mode: bool) -> Result<(), AppError> {
    println!("Comparing brute force against the two-phase heuristic.");
    println!("Note: brute force on the larger configurations may be extremely slow!\n");
    println!("Nodes | Edges | BF Time(s) | Heuristic Time(s) | Found 2 paths?");
    println!("-------------------------------------------------------------");

    let source: NodeId = 1;

    for (config_index, (nodes, edges)) in COMPARISON_CONFIGS.iter().copied().enumerate() {
        let target = 5.min(nodes);
        // Vary the seed per configuration so graphs are independent while
        // the whole run stays reproducible.
        let graph = generate_random_graph(nodes, edges, 1, 10, seed + config_index as u64);

        verbose_println!(
            quiet_mode,
            "Config {}: {} nodes, {} edges, source {}, target {}",
            config_index,
            nodes,
            edges,
            source,
            target
        );

        let ((bf_path1, bf_path2), bf_time) =
            measure(|| brute_force_find_disjoint_paths(&graph, source, target));
        let bf_found = !bf_path1.is_empty() && !bf_path2.is_empty();

        let ((h_path1, h_path2), h_time) =
            measure(|| find_disjoint_paths(&graph, source, target));
        let h_found = !h_path1.is_empty() && !h_path2.is_empty();

        if bf_found && h_found {
            let bf_total = checked_path_cost(&graph, &bf_path1)?
                + checked_path_cost(&graph, &bf_path2)?;
            let h_total = checked_path_cost(&graph, &h_path1)?
                + checked_path_cost(&graph, &h_path2)?;
            verbose_println!(
                quiet_mode,
                "  BF total cost {}, heuristic total cost {}",
                bf_total,
                h_total
            );
        } else if bf_found && !h_found {
            verbose_println!(
                quiet_mode,
                "  Heuristic missed a pair the brute force found (known limitation)."
            );
        }

        let status = match (bf_found, h_found) {
            (true, true) => "Yes",
            (true, false) => "BF only",
            (false, true) => "Heuristic only",
            (false, false) => "No",
        };
        println!(
            "{:>5} | {:>5} | {:>10.6} | {:>17.6} | {}",
            nodes,
            edges,
            bf_time.as_secs_f64(),
            h_time.as_secs_f64(),
            status
        );
    }

    println!("-------------------------------------------------------------");
    Ok(())
}

fn report_heuristic_run(
    graph: &Graph,
    source: NodeId,
    target: NodeId,
    dot: Option<&Path>,
    quiet_mode: bool,
) -> Result<(), AppError> {
    verbose_println!(
        quiet_mode,
        "[STEP 2] Finding vertex-disjoint paths from {} to {}...",
        source,
        target
    );
    let ((path1, path2), search_time) = measure(|| find_disjoint_paths(graph, source, target));
    println!(
        "Finding vertex-disjoint paths took {:.6}s.",
        search_time.as_secs_f64()
    );

    if path1.is_empty() || path2.is_empty() {
        println!(
            "No vertex-disjoint paths found from {} to {}.",
            source, target
        );
        return Ok(());
    }

    print_path_pair(graph, &path1, &path2)?;

    if let Some(dot_path) = dot {
        let rendered = render_dot(graph, &[&path1, &path2]);
        if let Err(e) = file_handler::write_content_to_file(dot_path, &rendered) {
            verbose_eprintln!(
                quiet_mode,
                "Failed to write DOT file {}: {}",
                dot_path.display(),
                e
            );
            return Err(AppError::Io(e));
        }
        println!("DOT file generated: {}", dot_path.display());
        println!("To visualize: dot -Tpng {} -o graph.png", dot_path.display());
    }

    Ok(())
}

fn print_path_pair(graph: &Graph, path1: &GraphPath, path2: &GraphPath) -> Result<(), AppError> {
    let cost1 = checked_path_cost(graph, path1)?;
    let cost2 = checked_path_cost(graph, path2)?;

    println!("\nFound two vertex-disjoint paths:");
    println!("Path 1 (blue): {}", format_path(path1));
    println!("Cost of path 1: {}", cost1);
    println!("Path 2 (red): {}", format_path(path2));
    println!("Cost of path 2: {}", cost2);
    println!("Total cost: {}", cost1 + cost2);
    Ok(())
}

//! Main application orchestrator.
//!
//! Initializes the verbose logger, dispatches the parsed subcommand to its
//! handler in `processing`, and flushes the log before returning.  Honors
//! `--quiet` by skipping logger setup entirely.

use super::cli::{Cli, Command};
use super::error::AppError;
use super::logger;
use super::processing;
use super::verbose_println; // Macro for conditional logging.

const LOG_FILE: &str = "pathfinder.log";

/// Runs the application for the parsed command line.
///
/// # Errors
/// Returns `AppError` on I/O failures, malformed DIMACS input, or invalid
/// parameter combinations.  Algorithmic "no result" outcomes are reported
/// on stdout, not as errors.
pub fn run_app(cli: Cli) -> Result<(), AppError> {
    let quiet_mode = cli.quiet;

    if !quiet_mode {
        if let Err(e) = logger::init_global_logger(LOG_FILE) {
            // Verbose file logging becomes unavailable but the run proceeds.
            eprintln!(
                "Warning: Failed to initialize verbose logger ({}): {}.",
                LOG_FILE, e
            );
        } else {
            verbose_println!(quiet_mode, "Verbose logging initialized to {}", LOG_FILE);
        }
    }

    let result = match cli.command {
        Command::Random {
            nodes,
            edges,
            min_weight,
            max_weight,
            seed,
            source,
            target,
            dot,
            save_dimacs,
        } => processing::run_random(
            nodes,
            edges,
            min_weight,
            max_weight,
            seed,
            source,
            target,
            dot,
            save_dimacs,
            quiet_mode,
        ),
        Command::Load {
            file,
            source,
            target,
            dot,
        } => processing::run_load(&file, source, target, dot, quiet_mode),
        Command::Brute {
            nodes,
            edges,
            min_weight,
            max_weight,
            seed,
            source,
            target,
        } => processing::run_brute(
            nodes, edges, min_weight, max_weight, seed, source, target, quiet_mode,
        ),
        Command::Compare { seed } => processing::run_compare(seed, quiet_mode),
    };

    if !quiet_mode {
        if let Err(e) = logger::flush_global_logger() {
            eprintln!("[WARNING] Failed to flush {}: {}", LOG_FILE, e);
        }
    }

    result
}

use thiserror::Error;

//─────────────────────────────────────────────────────────────────────────────

/// Error type for DIMACS graph loading and parsing.
#[derive(Error, Debug)]
pub enum DimacsError {
    /// Error when reading a graph file.
    #[error("Failed to read file '{0}': {1}")]
    ReadFile(String, std::io::Error),

    /// Error when the input ends before a problem line is seen.
    #[error("No DIMACS problem line ('p sp <nodes> <edges>') found")]
    MissingProblemLine,

    /// Error when the problem line cannot be parsed.
    #[error("Malformed DIMACS problem line: '{0}'")]
    MalformedProblemLine(String),

    /// Error when an arc descriptor line cannot be parsed.
    #[error("Malformed DIMACS arc line: '{0}'")]
    MalformedArcLine(String),
}

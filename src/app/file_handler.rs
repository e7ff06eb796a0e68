//! File system helpers for the command-line driver: input validation and
//! buffered output of rendered DOT/DIMACS text.

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;
// Use super:: for macros defined in app/mod.rs
use super::error::AppError;
use super::verbose_eprintln;

/// Checks that a graph file path exists and points to a regular file.
///
/// # Errors
/// Returns `AppError::InvalidInput` when the path is missing or not a file.
pub fn validate_graph_file(path: &Path, quiet_mode: bool) -> Result<(), AppError> {
    if !path.exists() {
        let error_msg = format!("File not found: {}", path.display());
        verbose_eprintln!(quiet_mode, "Input Error: {}", error_msg);
        return Err(AppError::InvalidInput(error_msg));
    }
    if !path.is_file() {
        let error_msg = format!("Path is not a file: {}", path.display());
        verbose_eprintln!(quiet_mode, "Input Error: {}", error_msg);
        return Err(AppError::InvalidInput(error_msg));
    }
    Ok(())
}

/// Writes string content to a file, creating or truncating it, and flushes
/// before returning so the caller sees the complete file immediately.
pub fn write_content_to_file(file_path: &Path, content: &str) -> Result<(), std::io::Error> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(file_path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(content.as_bytes())?;
    writer.flush()?;
    Ok(())
}

// dimacs module
mod dimacs;
// dot module
mod dot;
// error module
mod error;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports from the io module.
//─────────────────────────────────────────────────────────────────────────────
pub use dimacs::{load_dimacs, parse_dimacs, save_dimacs};
pub use dot::render_dot;
pub use error::DimacsError;

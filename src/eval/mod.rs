//! Position evaluation: maximal-run extraction and the cutoff heuristic.

pub mod heuristic;
pub mod runs;

pub use heuristic::{Heuristic, RunHeuristic};
pub use runs::Run;

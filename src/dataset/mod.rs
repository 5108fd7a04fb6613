//! Monte-Carlo dataset generation over the battle engine
//!
//! Rolls random matchups, fights each one many times, and summarizes the
//! outcome distribution per matchup. Everything here is driver-side: the
//! battle engine itself stays single-threaded and seed-deterministic.

pub mod generator;
pub mod stats;
pub mod writer;

pub use generator::{generate, generate_with_progress, MatchupRecord};
pub use stats::KindVector;
pub use writer::{write_csv, write_json, CSV_COLUMNS};

//! Command implementations

pub mod play;
pub mod stats;

pub use play::{describe, run_play};
pub use stats::{load_stats, run_stats};

//! Command implementations

pub mod analyze;
pub mod play;
pub mod replay;

pub use analyze::{AnalysisResult, analyze_guess};
pub use play::{PlayOutcome, run_play};
pub use replay::{ReplayResult, ReplayStep, run_replay};

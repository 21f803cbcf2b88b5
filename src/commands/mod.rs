//! Command implementations

pub mod analyze;
pub mod score;
pub mod simple;
pub mod simulate;

pub use analyze::{AnalysisResult, analyze_guess};
pub use score::{ScoreResult, score_codes};
pub use simple::run_simple;
pub use simulate::{GameRecord, SimulationResult, run_simulation};

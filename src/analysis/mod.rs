//! Feedback analysis
//!
//! How a guess splits the space of possible solutions.

mod calculator;
mod codes;

pub use calculator::{GuessMetrics, calculate_metrics, score_distribution, shannon_entropy};
pub use codes::{all_codes, is_consistent};

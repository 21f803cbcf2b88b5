//! Guess analysis command
//!
//! Shows how a guess splits every possible solution of a level by feedback.

use crate::analysis::{GuessMetrics, all_codes, calculate_metrics, score_distribution};
use crate::config::Level;
use crate::core::{Code, Score};

/// Result of analyzing a guess
pub struct AnalysisResult {
    pub guess: Code,
    pub slot_count: usize,
    pub metrics: GuessMetrics,
    /// Scores and how many solutions produce them, best feedback first
    pub distribution: Vec<(Score, usize)>,
    pub total_candidates: usize,
}

/// Analyze a guess against every solution of `level`
///
/// # Errors
///
/// Returns an error if:
/// - The guess does not parse
/// - The guess length does not match the level
/// - The guess uses a color outside the level's palette
pub fn analyze_guess(guess: &str, level: &Level) -> Result<AnalysisResult, String> {
    let guess = Code::parse(guess).map_err(|e| format!("Invalid guess: {e}"))?;
    let palette = level.palette();

    if guess.len() != level.slot_count {
        return Err(format!(
            "Guess must have {} colors for this level, got {}",
            level.slot_count,
            guess.len()
        ));
    }
    if let Some(color) = guess.colors().iter().find(|&&c| !palette.contains(c)) {
        return Err(format!("{color} is not in the {} palette", level.palette.name()));
    }

    let codes = all_codes(level.slot_count, &palette);
    let candidates: Vec<&Code> = codes.iter().collect();

    let metrics = calculate_metrics(&guess, &candidates);
    let mut distribution: Vec<(Score, usize)> =
        score_distribution(&guess, &candidates).into_iter().collect();
    distribution.sort_by(|(a, _), (b, _)| b.hits.cmp(&a.hits).then(b.blows.cmp(&a.blows)));

    Ok(AnalysisResult {
        guess,
        slot_count: level.slot_count,
        metrics,
        distribution,
        total_candidates: candidates.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Preset;

    #[test]
    fn analyze_classic_guess() {
        let result = analyze_guess("RRBG", &Level::default()).unwrap();

        assert_eq!(result.total_candidates, 1296);
        assert_eq!(
            result.distribution.iter().map(|(_, n)| n).sum::<usize>(),
            1296
        );
        assert_eq!(result.distribution[0], (Score::new(4, 0), 1));
        assert!(result.metrics.entropy > 0.0);
    }

    #[test]
    fn analyze_rejects_wrong_length() {
        let err = analyze_guess("RGB", &Level::default()).err().unwrap();
        assert!(err.contains("4 colors"));
    }

    #[test]
    fn analyze_rejects_foreign_color() {
        assert!(analyze_guess("RGBC", &Level::default()).is_err());
    }

    #[test]
    fn analyze_larger_level() {
        let result = analyze_guess("RGBYP", &Preset::Normal.level()).unwrap();
        assert_eq!(result.total_candidates, 7776);
        assert!(result.metrics.max_partition < 7776);
    }
}

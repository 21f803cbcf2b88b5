//! Score command
//!
//! Scores a guess against a given solution.

use crate::config::MAX_SLOTS;
use crate::core::{Code, Score};

/// Result of scoring two codes
pub struct ScoreResult {
    pub guess: Code,
    pub solution: Code,
    pub score: Score,
}

/// Score `guess` against `solution`
///
/// # Errors
///
/// Returns an error if either code fails to parse, is longer than
/// `MAX_SLOTS`, or the lengths differ.
pub fn score_codes(guess: &str, solution: &str) -> Result<ScoreResult, String> {
    let guess = Code::parse(guess).map_err(|e| format!("Invalid guess: {e}"))?;
    let solution = Code::parse(solution).map_err(|e| format!("Invalid solution: {e}"))?;

    if guess.len() > MAX_SLOTS {
        return Err(format!(
            "Codes hold at most {MAX_SLOTS} colors, got {}",
            guess.len()
        ));
    }

    if guess.len() != solution.len() {
        return Err(format!(
            "Guess has {} colors but solution has {}",
            guess.len(),
            solution.len()
        ));
    }

    let score = Score::calculate(&guess, &solution);
    Ok(ScoreResult {
        guess,
        solution,
        score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_multiset_example() {
        let result = score_codes("red red blue blue", "red green green blue").unwrap();
        assert_eq!(result.score, Score::new(2, 0));
        assert_eq!(result.guess.letters(), "RRBB");
    }

    #[test]
    fn score_length_mismatch() {
        let err = score_codes("RGB", "RGBY").err().unwrap();
        assert!(err.contains("3 colors"));
    }

    #[test]
    fn score_rejects_oversized_codes() {
        let long = "R".repeat(256);
        let err = score_codes(&long, &long).err().unwrap();
        assert!(err.contains("at most 6"));
        assert!(score_codes("RGBYOPR", "RGBYOPR").is_err());
        assert_eq!(score_codes("RGBYOP", "RGBYOP").unwrap().score, Score::new(6, 0));
    }

    #[test]
    fn score_invalid_input() {
        assert!(score_codes("RGXY", "RGBY").is_err());
        assert!(score_codes("RGBY", "").is_err());
    }
}

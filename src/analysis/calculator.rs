//! Shannon entropy of Hit/Blow feedback
//!
//! Given a guess and the set of still-possible solutions, computes how the
//! solutions split by the score they would return, and the expected
//! information gain of playing that guess.

use crate::core::{Code, Score};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Candidate counts above which partitioning runs in parallel
const PARALLEL_THRESHOLD: usize = 4096;

/// Metrics for evaluating a guess
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Maximum partition size (worst-case remaining candidates)
    pub max_partition: usize,
    /// Number of distinct scores the guess can return
    pub partitions: usize,
}

/// Group candidates by the score they produce with the guess
#[must_use]
pub fn score_distribution(guess: &Code, candidates: &[&Code]) -> FxHashMap<Score, usize> {
    if candidates.len() < PARALLEL_THRESHOLD {
        let mut counts = FxHashMap::default();
        for &candidate in candidates {
            *counts.entry(Score::calculate(guess, candidate)).or_insert(0) += 1;
        }
        return counts;
    }

    candidates
        .par_iter()
        .fold(FxHashMap::default, |mut counts, &candidate| {
            *counts.entry(Score::calculate(guess, candidate)).or_insert(0) += 1;
            counts
        })
        .reduce(FxHashMap::default, |mut left, right| {
            for (score, count) in right {
                *left.entry(score).or_insert(0) += count;
            }
            left
        })
}

/// Calculate Shannon entropy from a score distribution
///
/// H = -Σ p * log₂(p)
///
/// # Examples
/// ```
/// use hit_blow::analysis::shannon_entropy;
/// use hit_blow::core::Score;
/// use rustc_hash::FxHashMap;
///
/// let mut uniform = FxHashMap::default();
/// uniform.insert(Score::new(0, 0), 25);
/// uniform.insert(Score::new(1, 0), 25);
/// uniform.insert(Score::new(0, 1), 25);
/// uniform.insert(Score::new(1, 1), 25);
///
/// assert!((shannon_entropy(&uniform) - 2.0).abs() < 0.001);
/// ```
#[must_use]
pub fn shannon_entropy<S>(score_counts: &std::collections::HashMap<Score, usize, S>) -> f64
where
    S: std::hash::BuildHasher,
{
    let total = score_counts.values().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    score_counts
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Calculate entropy, expected remaining and worst case for a guess
#[must_use]
pub fn calculate_metrics(guess: &Code, candidates: &[&Code]) -> GuessMetrics {
    if candidates.is_empty() {
        return GuessMetrics {
            entropy: 0.0,
            expected_remaining: 0.0,
            max_partition: 0,
            partitions: 0,
        };
    }

    let distribution = score_distribution(guess, candidates);
    let total = candidates.len() as f64;

    let expected_remaining: f64 = distribution
        .values()
        .map(|&count| {
            let p = count as f64 / total;
            p * count as f64
        })
        .sum();

    GuessMetrics {
        entropy: shannon_entropy(&distribution),
        expected_remaining,
        max_partition: distribution.values().copied().max().unwrap_or(0),
        partitions: distribution.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::all_codes;
    use crate::core::{Palette, PaletteId};

    fn classic_codes() -> Vec<Code> {
        all_codes(4, &Palette::from_id(PaletteId::Classic))
    }

    #[test]
    fn shannon_entropy_certain_outcome() {
        let mut counts = FxHashMap::default();
        counts.insert(Score::new(0, 0), 10);
        assert!(shannon_entropy(&counts).abs() < 0.001);
    }

    #[test]
    fn shannon_entropy_empty() {
        let counts: FxHashMap<Score, usize> = FxHashMap::default();
        assert!(shannon_entropy(&counts).abs() < f64::EPSILON);
    }

    #[test]
    fn distribution_sums_to_candidates() {
        let codes = classic_codes();
        let refs: Vec<&Code> = codes.iter().collect();
        let guess = Code::parse("RRBB").unwrap();

        let distribution = score_distribution(&guess, &refs);
        assert_eq!(distribution.values().sum::<usize>(), 1296);
        assert_eq!(distribution.get(&Score::new(4, 0)), Some(&1));
    }

    #[test]
    fn parallel_and_serial_agree() {
        let codes = all_codes(5, &Palette::from_id(PaletteId::Classic));
        let refs: Vec<&Code> = codes.iter().collect();
        assert!(refs.len() >= PARALLEL_THRESHOLD);
        let guess = Code::parse("RGBYP").unwrap();

        let parallel = score_distribution(&guess, &refs);
        let mut serial: FxHashMap<Score, usize> = FxHashMap::default();
        for &c in &refs {
            *serial.entry(Score::calculate(&guess, c)).or_insert(0) += 1;
        }
        assert_eq!(parallel, serial);
    }

    #[test]
    fn metrics_bounds() {
        let codes = classic_codes();
        let refs: Vec<&Code> = codes.iter().collect();
        let metrics = calculate_metrics(&Code::parse("RRBG").unwrap(), &refs);

        assert!(metrics.entropy > 0.0);
        assert!(metrics.entropy <= (metrics.partitions as f64).log2() + 1e-9);
        assert!(metrics.expected_remaining <= 1296.0);
        assert!(metrics.max_partition <= 1296);
        // At most 14 distinct scores exist for 4 slots
        assert!(metrics.partitions <= 14);
    }

    #[test]
    fn mixed_guess_beats_monochrome() {
        let codes = classic_codes();
        let refs: Vec<&Code> = codes.iter().collect();
        let mono = calculate_metrics(&Code::parse("RRRR").unwrap(), &refs);
        let mixed = calculate_metrics(&Code::parse("RRBG").unwrap(), &refs);
        assert!(mixed.entropy > mono.entropy);
        assert!(mixed.max_partition < mono.max_partition);
    }

    #[test]
    fn metrics_empty_candidates() {
        let metrics = calculate_metrics(&Code::parse("RGBY").unwrap(), &[]);
        assert_eq!(metrics.partitions, 0);
        assert_eq!(metrics.max_partition, 0);
    }
}

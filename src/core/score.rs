//! Hit/Blow feedback calculation
//!
//! A score counts:
//! - hits: guessed color at the correct position
//! - blows: guessed color present elsewhere in the solution
//!
//! Each solution slot contributes to at most one hit or blow, so repeated
//! colors are never over-counted.

use super::{Code, Color};
use std::fmt;

/// Feedback for one evaluated guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Score {
    pub hits: u8,
    pub blows: u8,
}

impl Score {
    #[inline]
    #[must_use]
    pub const fn new(hits: u8, blows: u8) -> Self {
        Self { hits, blows }
    }

    /// Calculate the score when `guess` is played against `solution`
    ///
    /// # Algorithm
    /// 1. First pass: count hits, and tally the solution colors that were not hit
    /// 2. Second pass: for each non-hit guess color, spend one tallied solution
    ///    color if any remain and count a blow
    ///
    /// This is equivalent to consuming matched solution slots one by one, in
    /// O(N).
    ///
    /// # Panics
    /// Panics if the guess and solution differ in length.
    ///
    /// # Examples
    /// ```
    /// use hit_blow::core::{Code, Score};
    ///
    /// let guess = Code::parse("RRBB").unwrap();
    /// let solution = Code::parse("RGGB").unwrap();
    ///
    /// // R hits at 0, B hits at 3; the second R and B have nothing left to match
    /// assert_eq!(Score::calculate(&guess, &solution), Score::new(2, 0));
    /// ```
    #[must_use]
    pub fn calculate(guess: &Code, solution: &Code) -> Self {
        assert_eq!(
            guess.len(),
            solution.len(),
            "guess and solution must have the same length"
        );

        let mut hits = 0u8;
        let mut remaining = [0u8; Color::COUNT];

        // First pass: hits, plus the pool of unmatched solution colors
        for (g, s) in guess.colors().iter().zip(solution.colors()) {
            if g == s {
                hits += 1;
            } else {
                remaining[s.index()] += 1;
            }
        }

        // Second pass: blows drawn from the unmatched pool
        let mut blows = 0u8;
        for (g, s) in guess.colors().iter().zip(solution.colors()) {
            if g != s && remaining[g.index()] > 0 {
                remaining[g.index()] -= 1;
                blows += 1;
            }
        }

        Self { hits, blows }
    }

    /// Check if every one of `slot_count` slots is a hit
    #[inline]
    #[must_use]
    pub const fn is_perfect(self, slot_count: usize) -> bool {
        self.hits as usize == slot_count
    }

    /// Slots that scored neither a hit nor a blow
    #[inline]
    #[must_use]
    pub const fn misses(self, slot_count: usize) -> usize {
        slot_count.saturating_sub(self.hits as usize + self.blows as usize)
    }

    /// Peg string: `●` per hit, `○` per blow, `·` per miss
    ///
    /// # Examples
    /// ```
    /// use hit_blow::core::Score;
    ///
    /// assert_eq!(Score::new(1, 2).pegs(4), "●○○·");
    /// ```
    #[must_use]
    pub fn pegs(self, slot_count: usize) -> String {
        let mut result = String::with_capacity(slot_count * 3);
        result.extend(std::iter::repeat_n('●', self.hits as usize));
        result.extend(std::iter::repeat_n('○', self.blows as usize));
        result.extend(std::iter::repeat_n('·', self.misses(slot_count)));
        result
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} hit, {} blow", self.hits, self.blows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(text: &str) -> Code {
        Code::parse(text).unwrap()
    }

    #[test]
    fn score_duplicates_not_over_counted() {
        // Classic pitfall: the second R and second B have no unconsumed match
        let score = Score::calculate(&code("RRBB"), &code("RGGB"));
        assert_eq!(score, Score::new(2, 0));
    }

    #[test]
    fn score_exact_match() {
        for text in ["RGBY", "RRRR", "PORGBY", "C", "KKCCP"] {
            let c = code(text);
            assert_eq!(Score::calculate(&c, &c), Score::new(c.len() as u8, 0));
        }
    }

    #[test]
    fn score_permutation_all_blows() {
        let score = Score::calculate(&code("RBGY"), &code("YGBR"));
        assert_eq!(score, Score::new(0, 4));
    }

    #[test]
    fn score_no_common_colors() {
        let score = Score::calculate(&code("RRBB"), &code("GGYY"));
        assert_eq!(score, Score::new(0, 0));
        assert_eq!(score.misses(4), 4);
    }

    #[test]
    fn score_guess_repeats_solution_single() {
        // Only one G in the solution, so only one blow despite three in the guess
        let score = Score::calculate(&code("GGGR"), &code("RBYG"));
        assert_eq!(score, Score::new(0, 2));
    }

    #[test]
    fn score_hit_takes_priority_over_blow() {
        // The G at position 1 is a hit; the G at position 0 has nothing left
        let score = Score::calculate(&code("GGRR"), &code("BGYY"));
        assert_eq!(score, Score::new(1, 0));
    }

    #[test]
    fn score_mixed() {
        let score = Score::calculate(&code("RGBY"), &code("RBOG"));
        assert_eq!(score, Score::new(1, 2));
    }

    #[test]
    fn score_total_bounded_by_length() {
        let codes = ["RRBB", "RGGB", "YYYY", "RBGY", "OPRG", "GGGG", "BRYR"];
        for a in codes {
            for b in codes {
                let s = Score::calculate(&code(a), &code(b));
                assert!(s.hits as usize + s.blows as usize <= 4, "{a} vs {b}: {s:?}");
            }
        }
    }

    #[test]
    fn score_is_deterministic() {
        let guess = code("ROYG");
        let solution = code("GYOR");
        let first = Score::calculate(&guess, &solution);
        for _ in 0..10 {
            assert_eq!(Score::calculate(&guess, &solution), first);
        }
    }

    #[test]
    fn score_hit_count_symmetric() {
        let a = code("RRGB");
        let b = code("RGRY");
        let ab = Score::calculate(&a, &b);
        let ba = Score::calculate(&b, &a);
        assert_eq!(ab, ba);
    }

    #[test]
    #[should_panic(expected = "same length")]
    fn score_length_mismatch_panics() {
        let _ = Score::calculate(&code("RGB"), &code("RGBY"));
    }

    #[test]
    fn perfect_and_pegs() {
        let score = Score::new(4, 0);
        assert!(score.is_perfect(4));
        assert!(!score.is_perfect(5));
        assert_eq!(score.pegs(4), "●●●●");
        assert_eq!(Score::new(0, 0).pegs(3), "···");
        assert_eq!(Score::new(2, 1).pegs(5), "●●○··");
    }

    #[test]
    fn display() {
        assert_eq!(Score::new(2, 1).to_string(), "2 hit, 1 blow");
    }
}

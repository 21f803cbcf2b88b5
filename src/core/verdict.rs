//! Game completion check
//!
//! Decides, after a guess has been scored, whether the game is over and
//! whether it ended in success.

use super::Score;

/// Completion verdict for an evaluated attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionVerdict {
    pub is_complete: bool,
    pub is_success: bool,
}

impl CompletionVerdict {
    /// Check completion of the attempt at 0-based `attempt_index`
    ///
    /// The index is the one of the attempt just evaluated (before any
    /// increment), so the final allowed attempt completes the game.
    /// A win on the final attempt still reports success.
    ///
    /// # Examples
    /// ```
    /// use hit_blow::core::{CompletionVerdict, Score};
    ///
    /// let v = CompletionVerdict::check(Score::new(0, 0), 7, 4, 8);
    /// assert!(v.is_complete && !v.is_success);
    ///
    /// let v = CompletionVerdict::check(Score::new(2, 1), 3, 4, 8);
    /// assert!(!v.is_complete);
    /// ```
    #[must_use]
    pub const fn check(
        score: Score,
        attempt_index: usize,
        slot_count: usize,
        max_attempts: usize,
    ) -> Self {
        let is_success = score.is_perfect(slot_count);
        let is_last_attempt = attempt_index + 1 >= max_attempts;
        Self {
            is_complete: is_success || is_last_attempt,
            is_success,
        }
    }
}

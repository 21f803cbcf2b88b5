//! Game session state machine
//!
//! A `GameSession` owns one game: the hidden solution, the guess buffer being
//! edited, the slot cursor, and every evaluated attempt. Renderers read it
//! through accessors and drive it through `place`, `select_slot`, `submit`
//! and `restart`.

use super::{InputError, SubmitError};
use crate::config::Level;
use crate::core::{Code, Color, CompletionVerdict, Palette, Score, generate};
use rand::Rng;

/// Overall game outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Externally visible session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingInput {
        attempt_index: usize,
        slot_index: usize,
    },
    Won,
    Lost,
}

/// An evaluated attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptRecord {
    pub guess: Code,
    pub score: Score,
}

/// Result of a successful submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    /// 0-based index of the attempt that was just scored
    pub attempt_index: usize,
    pub score: Score,
    pub verdict: CompletionVerdict,
}

/// A single game of Hit & Blow
#[derive(Debug, Clone)]
pub struct GameSession {
    level: Level,
    palette: Palette,
    solution: Code,
    attempt_index: usize,
    slot_index: usize,
    buffer: Vec<Option<Color>>,
    history: Vec<AttemptRecord>,
    outcome: Outcome,
}

impl GameSession {
    /// Start a new game with a freshly generated solution
    ///
    /// # Examples
    /// ```
    /// use hit_blow::config::Level;
    /// use hit_blow::session::{GameSession, SessionState};
    ///
    /// let session = GameSession::start(Level::default(), &mut rand::rng());
    /// assert_eq!(
    ///     session.state(),
    ///     SessionState::AwaitingInput { attempt_index: 0, slot_index: 0 }
    /// );
    /// assert!(session.solution().is_none()); // hidden until the game ends
    /// ```
    pub fn start(level: Level, rng: &mut impl Rng) -> Self {
        let palette = level.palette();
        let solution = generate(level.slot_count, &palette, rng);
        Self::with_solution(level, solution)
    }

    /// Start a game with a known solution
    ///
    /// # Panics
    /// Panics if the solution length differs from the level's slot count, or
    /// if it uses a color outside the level's palette.
    #[must_use]
    pub fn with_solution(level: Level, solution: Code) -> Self {
        let palette = level.palette();
        assert_eq!(
            solution.len(),
            level.slot_count,
            "solution length must match the level's slot count"
        );
        assert!(
            solution.colors().iter().all(|&c| palette.contains(c)),
            "solution colors must come from the level's palette"
        );

        Self {
            level,
            palette,
            solution,
            attempt_index: 0,
            slot_index: 0,
            buffer: vec![None; level.slot_count],
            history: Vec::new(),
            outcome: Outcome::InProgress,
        }
    }

    /// Abandon this game and start a new one in place
    ///
    /// Nothing from the previous game carries over.
    pub fn restart(&mut self, level: Level, rng: &mut impl Rng) {
        *self = Self::start(level, rng);
    }

    #[inline]
    #[must_use]
    pub const fn level(&self) -> &Level {
        &self.level
    }

    #[inline]
    #[must_use]
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    #[inline]
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[inline]
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.outcome.is_terminal()
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        match self.outcome {
            Outcome::InProgress => SessionState::AwaitingInput {
                attempt_index: self.attempt_index,
                slot_index: self.slot_index,
            },
            Outcome::Won => SessionState::Won,
            Outcome::Lost => SessionState::Lost,
        }
    }

    /// 0-based index of the current (or, once finished, the last) attempt
    #[inline]
    #[must_use]
    pub const fn attempt_index(&self) -> usize {
        self.attempt_index
    }

    /// Attempts not yet used, counting the current one
    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        self.level.max_attempts - self.history.len()
    }

    /// Slot under the cursor
    #[inline]
    #[must_use]
    pub const fn slot_index(&self) -> usize {
        self.slot_index
    }

    /// The guess being edited
    #[inline]
    #[must_use]
    pub fn buffer(&self) -> &[Option<Color>] {
        &self.buffer
    }

    /// True when every slot of the current guess holds a color
    #[must_use]
    pub fn is_buffer_complete(&self) -> bool {
        self.buffer.iter().all(Option::is_some)
    }

    /// Every evaluated attempt, oldest first
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[AttemptRecord] {
        &self.history
    }

    /// The solution, revealed only once the game is won or lost
    #[must_use]
    pub const fn solution(&self) -> Option<&Code> {
        if self.outcome.is_terminal() {
            Some(&self.solution)
        } else {
            None
        }
    }

    /// Paint the slot under the cursor, then move the cursor to the next slot
    ///
    /// The cursor wraps from the last slot back to the first. Returns whether
    /// the guess is now complete.
    ///
    /// # Errors
    /// Returns `InputError` if the color is not in the palette or the game is
    /// over.
    pub fn place(&mut self, color: Color) -> Result<bool, InputError> {
        self.ensure_in_progress()?;
        if !self.palette.contains(color) {
            return Err(InputError::NotInPalette(color));
        }

        self.buffer[self.slot_index] = Some(color);
        self.slot_index = (self.slot_index + 1) % self.level.slot_count;
        Ok(self.is_buffer_complete())
    }

    /// Move the cursor to `index` in the current attempt
    ///
    /// # Errors
    /// Returns `InputError` if the slot does not exist or the game is over.
    pub fn select_slot(&mut self, index: usize) -> Result<(), InputError> {
        self.ensure_in_progress()?;
        if index >= self.level.slot_count {
            return Err(InputError::SlotOutOfRange {
                index,
                slot_count: self.level.slot_count,
            });
        }
        self.slot_index = index;
        Ok(())
    }

    /// Empty the slot under the cursor
    ///
    /// # Errors
    /// Returns `InputError::Finished` if the game is over.
    pub fn clear_slot(&mut self) -> Result<(), InputError> {
        self.ensure_in_progress()?;
        self.buffer[self.slot_index] = None;
        Ok(())
    }

    /// Replace the whole guess buffer with `code`
    ///
    /// # Errors
    /// Returns `InputError` if the code has the wrong length, uses a color
    /// outside the palette, or the game is over.
    pub fn fill(&mut self, code: &Code) -> Result<(), InputError> {
        self.ensure_in_progress()?;
        if code.len() != self.level.slot_count {
            return Err(InputError::WrongLength {
                expected: self.level.slot_count,
                got: code.len(),
            });
        }
        if let Some(&color) = code.colors().iter().find(|&&c| !self.palette.contains(c)) {
            return Err(InputError::NotInPalette(color));
        }

        for (slot, &color) in self.buffer.iter_mut().zip(code.colors()) {
            *slot = Some(color);
        }
        self.slot_index = 0;
        Ok(())
    }

    /// Submit the guess buffer for evaluation
    ///
    /// # Errors
    /// See [`GameSession::submit_guess`]. On rejection the buffer is kept.
    pub fn submit(&mut self) -> Result<Evaluation, SubmitError> {
        let guess = self.buffer.clone();
        self.submit_guess(&guess)
    }

    /// Score `guess` against the solution and advance the game
    ///
    /// On a non-final attempt the attempt index increases by one, the cursor
    /// returns to the first slot and the buffer is cleared. On the final
    /// attempt (or a win) the game ends and the solution becomes visible.
    ///
    /// # Errors
    /// - `SubmitError::Incomplete` if any slot is empty; nothing changes
    /// - `SubmitError::Finished` if the game is already over
    ///
    /// # Panics
    /// Panics if `guess` does not have exactly one entry per slot, or holds a
    /// color outside the palette.
    ///
    /// # Examples
    /// ```
    /// use hit_blow::config::Level;
    /// use hit_blow::core::{Code, Score};
    /// use hit_blow::session::{GameSession, Outcome, SubmitError};
    ///
    /// let solution = Code::parse("RGGB").unwrap();
    /// let mut session = GameSession::with_solution(Level::default(), solution);
    ///
    /// let partial = [Some(hit_blow::core::Color::Red), None, None, None];
    /// assert_eq!(
    ///     session.submit_guess(&partial),
    ///     Err(SubmitError::Incomplete { missing: 3 })
    /// );
    ///
    /// let guess: Vec<_> = Code::parse("RRBB").unwrap().colors().iter().copied().map(Some).collect();
    /// let evaluation = session.submit_guess(&guess).unwrap();
    /// assert_eq!(evaluation.score, Score::new(2, 0));
    /// assert_eq!(session.outcome(), Outcome::InProgress);
    /// assert_eq!(session.attempt_index(), 1);
    /// ```
    pub fn submit_guess(&mut self, guess: &[Option<Color>]) -> Result<Evaluation, SubmitError> {
        if self.is_finished() {
            return Err(SubmitError::Finished);
        }
        assert_eq!(
            guess.len(),
            self.level.slot_count,
            "guess must have one entry per slot"
        );

        let missing = guess.iter().filter(|slot| slot.is_none()).count();
        if missing > 0 {
            return Err(SubmitError::Incomplete { missing });
        }

        let colors: Vec<Color> = guess.iter().flatten().copied().collect();
        assert!(
            colors.iter().all(|&c| self.palette.contains(c)),
            "guess colors must come from the level's palette"
        );
        let code = Code::new(colors).unwrap_or_else(|_| unreachable!("slot count is at least 1"));

        let score = Score::calculate(&code, &self.solution);
        let attempt_index = self.attempt_index;
        let verdict = CompletionVerdict::check(
            score,
            attempt_index,
            self.level.slot_count,
            self.level.max_attempts,
        );

        self.history.push(AttemptRecord { guess: code, score });
        self.buffer.fill(None);
        self.slot_index = 0;

        if verdict.is_complete {
            self.outcome = if verdict.is_success {
                Outcome::Won
            } else {
                Outcome::Lost
            };
        } else {
            self.attempt_index += 1;
        }

        Ok(Evaluation {
            attempt_index,
            score,
            verdict,
        })
    }

    const fn ensure_in_progress(&self) -> Result<(), InputError> {
        if self.outcome.is_terminal() {
            Err(InputError::Finished)
        } else {
            Ok(())
        }
    }
}

//! Game sessions
//!
//! One `GameSession` value per game; renderers hold a reference to it instead
//! of sharing global state.

mod error;
mod game;

pub use error::{InputError, SubmitError};
pub use game::{AttemptRecord, Evaluation, GameSession, Outcome, SessionState};

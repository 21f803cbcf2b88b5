//! Session error types

use crate::core::Color;
use std::fmt;

/// Rejection of a guess submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    /// Some slots are still empty; the attempt is not evaluated
    Incomplete { missing: usize },
    /// The game is already won or lost
    Finished,
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Incomplete { missing: 1 } => {
                write!(f, "Fill every slot before submitting (1 slot empty)")
            }
            Self::Incomplete { missing } => {
                write!(f, "Fill every slot before submitting ({missing} slots empty)")
            }
            Self::Finished => write!(f, "The game is over; start a new one"),
        }
    }
}

impl std::error::Error for SubmitError {}

/// Rejection of a slot edit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    NotInPalette(Color),
    SlotOutOfRange { index: usize, slot_count: usize },
    WrongLength { expected: usize, got: usize },
    Finished,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotInPalette(color) => write!(f, "{color} is not in this level's palette"),
            Self::SlotOutOfRange { index, slot_count } => {
                write!(f, "Slot {} does not exist (board has {slot_count})", index + 1)
            }
            Self::WrongLength { expected, got } => {
                write!(f, "Guess must have {expected} colors, got {got}")
            }
            Self::Finished => write!(f, "The game is over; start a new one"),
        }
    }
}

impl std::error::Error for InputError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incomplete_message_pluralizes() {
        assert!(
            SubmitError::Incomplete { missing: 1 }
                .to_string()
                .contains("1 slot empty")
        );
        assert!(
            SubmitError::Incomplete { missing: 3 }
                .to_string()
                .contains("3 slots empty")
        );
    }

    #[test]
    fn slot_out_of_range_is_one_based() {
        let err = InputError::SlotOutOfRange {
            index: 4,
            slot_count: 4,
        };
        assert_eq!(err.to_string(), "Slot 5 does not exist (board has 4)");
    }
}

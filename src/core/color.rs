//! Peg colors
//!
//! A `Color` is one of a fixed set of symbolic values. Only equality matters
//! for scoring; names and letters exist for input and display.

use std::fmt;
use std::str::FromStr;

/// A peg color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
    Orange,
    Pink,
    Cyan,
}

/// Error type for unrecognized color input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    Empty,
    Unknown(String),
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Color must not be empty"),
            Self::Unknown(text) => write!(f, "Unknown color '{text}'"),
        }
    }
}

impl std::error::Error for ColorError {}

impl Color {
    /// Number of distinct colors
    pub const COUNT: usize = 8;

    /// Every color, in palette order
    pub const ALL: [Self; Self::COUNT] = [
        Self::Red,
        Self::Blue,
        Self::Green,
        Self::Yellow,
        Self::Purple,
        Self::Orange,
        Self::Pink,
        Self::Cyan,
    ];

    /// Dense index (0-7), used for frequency tables
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase color name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Purple => "purple",
            Self::Orange => "orange",
            Self::Pink => "pink",
            Self::Cyan => "cyan",
        }
    }

    /// Single-letter code used for compact text input
    ///
    /// Pink uses `K` so it does not collide with Purple.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Red => 'R',
            Self::Blue => 'B',
            Self::Green => 'G',
            Self::Yellow => 'Y',
            Self::Purple => 'P',
            Self::Orange => 'O',
            Self::Pink => 'K',
            Self::Cyan => 'C',
        }
    }

    /// Look up a color by its letter (case-insensitive)
    #[must_use]
    pub fn from_letter(letter: char) -> Option<Self> {
        let upper = letter.to_ascii_uppercase();
        Self::ALL.into_iter().find(|c| c.letter() == upper)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    /// Parse a full name (`"red"`) or a single letter (`"r"`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ColorError::Empty);
        }

        let mut chars = trimmed.chars();
        if let (Some(ch), None) = (chars.next(), chars.next()) {
            return Self::from_letter(ch).ok_or_else(|| ColorError::Unknown(trimmed.to_string()));
        }

        let lower = trimmed.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.name() == lower)
            .ok_or(ColorError::Unknown(lower))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_are_dense() {
        for (i, color) in Color::ALL.iter().enumerate() {
            assert_eq!(color.index(), i);
        }
    }

    #[test]
    fn letters_are_unique() {
        for a in Color::ALL {
            for b in Color::ALL {
                if a != b {
                    assert_ne!(a.letter(), b.letter(), "{a} and {b} share a letter");
                }
            }
        }
    }

    #[test]
    fn parse_names_and_letters() {
        assert_eq!("red".parse::<Color>(), Ok(Color::Red));
        assert_eq!("ORANGE".parse::<Color>(), Ok(Color::Orange));
        assert_eq!("y".parse::<Color>(), Ok(Color::Yellow));
        assert_eq!("K".parse::<Color>(), Ok(Color::Pink));
        assert_eq!(" cyan ".parse::<Color>(), Ok(Color::Cyan));
    }

    #[test]
    fn parse_rejects_unknown() {
        assert_eq!("".parse::<Color>(), Err(ColorError::Empty));
        assert!(matches!("x".parse::<Color>(), Err(ColorError::Unknown(_))));
        assert!(matches!("magenta".parse::<Color>(), Err(ColorError::Unknown(_))));
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(Color::Purple.to_string(), "purple");
    }
}

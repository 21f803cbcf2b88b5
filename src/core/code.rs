//! Color sequences
//!
//! A `Code` is an ordered, fully populated sequence of colors. Solutions and
//! submitted guesses are both codes.

use super::{Color, ColorError};
use std::fmt;
use std::str::FromStr;

/// An ordered sequence of at least one color
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Code {
    colors: Vec<Color>,
}

/// Error type for invalid codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    Empty,
    InvalidColor(ColorError),
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Code must contain at least one color"),
            Self::InvalidColor(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for CodeError {}

impl From<ColorError> for CodeError {
    fn from(err: ColorError) -> Self {
        Self::InvalidColor(err)
    }
}

impl Code {
    /// Create a code from a list of colors
    ///
    /// # Errors
    /// Returns `CodeError::Empty` if `colors` is empty.
    pub fn new(colors: Vec<Color>) -> Result<Self, CodeError> {
        if colors.is_empty() {
            return Err(CodeError::Empty);
        }
        Ok(Self { colors })
    }

    /// Parse a code from text
    ///
    /// Accepts either compact letters (`"RGBY"`) or color names separated by
    /// whitespace or commas (`"red, green blue yellow"`).
    ///
    /// # Errors
    /// Returns `CodeError` if the text is empty or names an unknown color.
    ///
    /// # Examples
    /// ```
    /// use hit_blow::core::{Code, Color};
    ///
    /// let compact = Code::parse("rgby").unwrap();
    /// let named = Code::parse("red, green blue yellow").unwrap();
    /// assert_eq!(compact, named);
    /// assert_eq!(compact.colors()[3], Color::Yellow);
    /// ```
    pub fn parse(text: &str) -> Result<Self, CodeError> {
        let tokens: Vec<&str> = text
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
            .collect();

        let colors = match tokens.as_slice() {
            [] => return Err(CodeError::Empty),
            // A single run of letters like "RGBY" is the compact form,
            // unless it is itself a color name ("red").
            [single] if single.parse::<Color>().is_err() => single
                .chars()
                .map(|ch| Color::from_letter(ch).ok_or_else(|| ColorError::Unknown(ch.to_string())))
                .collect::<Result<Vec<_>, _>>()?,
            many => many
                .iter()
                .map(|t| t.parse::<Color>())
                .collect::<Result<Vec<_>, _>>()?,
        };

        Self::new(colors)
    }

    #[inline]
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; a code holds at least one color
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Occurrences of each color, indexed by `Color::index`
    #[must_use]
    pub fn color_counts(&self) -> [u8; Color::COUNT] {
        let mut counts = [0u8; Color::COUNT];
        for color in &self.colors {
            counts[color.index()] += 1;
        }
        counts
    }

    /// Compact letter form, e.g. `RGBY`
    #[must_use]
    pub fn letters(&self) -> String {
        self.colors.iter().map(|c| c.letter()).collect()
    }
}

impl FromStr for Code {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letters())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Color::{Blue, Green, Red, Yellow};

    #[test]
    fn new_rejects_empty() {
        assert_eq!(Code::new(vec![]), Err(CodeError::Empty));
    }

    #[test]
    fn parse_compact_letters() {
        let code = Code::parse("RRBB").unwrap();
        assert_eq!(code.colors(), &[Red, Red, Blue, Blue]);
    }

    #[test]
    fn parse_names() {
        let code = Code::parse("red green  green,blue").unwrap();
        assert_eq!(code.colors(), &[Red, Green, Green, Blue]);
    }

    #[test]
    fn parse_single_name_is_one_color() {
        let code = Code::parse("red").unwrap();
        assert_eq!(code.colors(), &[Red]);
    }

    #[test]
    fn parse_rejects_unknown_letters() {
        assert!(matches!(
            Code::parse("RGXY"),
            Err(CodeError::InvalidColor(ColorError::Unknown(_)))
        ));
        assert_eq!(Code::parse("  "), Err(CodeError::Empty));
    }

    #[test]
    fn color_counts_with_duplicates() {
        let code = Code::new(vec![Red, Green, Green, Yellow]).unwrap();
        let counts = code.color_counts();
        assert_eq!(counts[Red.index()], 1);
        assert_eq!(counts[Green.index()], 2);
        assert_eq!(counts[Yellow.index()], 1);
        assert_eq!(counts[Blue.index()], 0);
    }

    #[test]
    fn display_is_letters() {
        let code = Code::new(vec![Yellow, Green, Blue, Red]).unwrap();
        assert_eq!(code.to_string(), "YGBR");
    }
}

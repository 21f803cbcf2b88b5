//! Color palettes
//!
//! A palette is the non-empty set of colors a level draws its solution from
//! and accepts in guesses.

use super::Color;
use std::fmt;
use std::str::FromStr;

/// Named palette presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PaletteId {
    /// The six colors of the classic board
    #[default]
    Classic,
    /// All eight colors
    Extended,
}

impl PaletteId {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Extended => "extended",
        }
    }
}

impl FromStr for PaletteId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "classic" => Ok(Self::Classic),
            "extended" => Ok(Self::Extended),
            other => Err(format!("Unknown palette '{other}' (expected classic or extended)")),
        }
    }
}

/// Error type for invalid palettes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteError {
    Empty,
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Palette must contain at least one color"),
        }
    }
}

impl std::error::Error for PaletteError {}

/// A non-empty, duplicate-free, ordered set of colors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Build a palette from a list of colors
    ///
    /// Duplicates are dropped, keeping first-occurrence order.
    ///
    /// # Errors
    /// Returns `PaletteError::Empty` if no colors are given.
    ///
    /// # Examples
    /// ```
    /// use hit_blow::core::{Color, Palette};
    ///
    /// let palette = Palette::new([Color::Red, Color::Blue, Color::Red]).unwrap();
    /// assert_eq!(palette.colors(), &[Color::Red, Color::Blue]);
    /// assert!(Palette::new([]).is_err());
    /// ```
    pub fn new(colors: impl IntoIterator<Item = Color>) -> Result<Self, PaletteError> {
        let mut unique: Vec<Color> = Vec::with_capacity(Color::COUNT);
        for color in colors {
            if !unique.contains(&color) {
                unique.push(color);
            }
        }

        if unique.is_empty() {
            return Err(PaletteError::Empty);
        }

        Ok(Self { colors: unique })
    }

    /// Resolve a named preset
    #[must_use]
    pub fn from_id(id: PaletteId) -> Self {
        let colors = match id {
            PaletteId::Classic => Color::ALL[..6].to_vec(),
            PaletteId::Extended => Color::ALL.to_vec(),
        };
        Self { colors }
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

    /// Always false; kept for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, color: Color) -> bool {
        self.colors.contains(&color)
    }
}

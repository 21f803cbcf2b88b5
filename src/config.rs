//! Difficulty levels
//!
//! A level fixes the slot count, the attempt budget and the palette. Presets
//! cover the usual boards; `Level::custom` validates anything else.

use crate::core::{Palette, PaletteId};
use std::fmt;
use std::str::FromStr;

/// Smallest supported slot count
pub const MIN_SLOTS: usize = 4;
/// Largest supported slot count
pub const MAX_SLOTS: usize = 6;
/// Largest supported attempt budget
pub const MAX_ATTEMPTS: usize = 12;

/// Named difficulty presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preset {
    /// 4 slots, 6 attempts
    #[default]
    Classic,
    /// 4 slots, 8 attempts
    Easy,
    /// 5 slots, 8 attempts
    Normal,
    /// 6 slots, 8 attempts
    Hard,
}

impl Preset {
    pub const ALL: [Self; 4] = [Self::Classic, Self::Easy, Self::Normal, Self::Hard];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Easy => "easy",
            Self::Normal => "normal",
            Self::Hard => "hard",
        }
    }

    #[must_use]
    pub const fn level(self) -> Level {
        let (slot_count, max_attempts) = match self {
            Self::Classic => (4, 6),
            Self::Easy => (4, 8),
            Self::Normal => (5, 8),
            Self::Hard => (6, 8),
        };
        Level {
            slot_count,
            max_attempts,
            palette: PaletteId::Classic,
        }
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.name() == lower)
            .ok_or_else(|| format!("Unknown level '{lower}' (expected classic, easy, normal or hard)"))
    }
}

/// Error type for invalid level parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelError {
    SlotCount(usize),
    MaxAttempts(usize),
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SlotCount(n) => {
                write!(f, "Slot count must be between {MIN_SLOTS} and {MAX_SLOTS}, got {n}")
            }
            Self::MaxAttempts(n) => {
                write!(f, "Attempt budget must be between 1 and {MAX_ATTEMPTS}, got {n}")
            }
        }
    }
}

impl std::error::Error for LevelError {}

/// A difficulty configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Level {
    pub slot_count: usize,
    pub max_attempts: usize,
    pub palette: PaletteId,
}

impl Default for Level {
    fn default() -> Self {
        Preset::Classic.level()
    }
}

impl Level {
    /// Build a level from explicit parameters
    ///
    /// # Errors
    /// Returns `LevelError` if the slot count is outside 4-6 or the attempt
    /// budget is outside 1-12.
    ///
    /// # Examples
    /// ```
    /// use hit_blow::config::Level;
    /// use hit_blow::core::PaletteId;
    ///
    /// let level = Level::custom(5, 10, PaletteId::Extended).unwrap();
    /// assert_eq!(level.slot_count, 5);
    /// assert!(Level::custom(3, 6, PaletteId::Classic).is_err());
    /// ```
    pub const fn custom(
        slot_count: usize,
        max_attempts: usize,
        palette: PaletteId,
    ) -> Result<Self, LevelError> {
        if slot_count < MIN_SLOTS || slot_count > MAX_SLOTS {
            return Err(LevelError::SlotCount(slot_count));
        }
        if max_attempts == 0 || max_attempts > MAX_ATTEMPTS {
            return Err(LevelError::MaxAttempts(max_attempts));
        }
        Ok(Self {
            slot_count,
            max_attempts,
            palette,
        })
    }

    /// Start from a preset and apply optional overrides
    ///
    /// # Errors
    /// Returns `LevelError` if an override is out of range.
    pub fn resolve(
        preset: Preset,
        slots: Option<usize>,
        attempts: Option<usize>,
        palette: Option<PaletteId>,
    ) -> Result<Self, LevelError> {
        let base = preset.level();
        Self::custom(
            slots.unwrap_or(base.slot_count),
            attempts.unwrap_or(base.max_attempts),
            palette.unwrap_or(base.palette),
        )
    }

    /// The concrete palette for this level
    #[must_use]
    pub fn palette(&self) -> Palette {
        Palette::from_id(self.palette)
    }

    /// Number of distinct codes a solution can be (`colors ^ slots`)
    #[must_use]
    pub fn code_space(&self) -> usize {
        self.palette().len().pow(self.slot_count as u32)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} slots, {} attempts, {} palette",
            self.slot_count,
            self.max_attempts,
            self.palette.name()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_is_default_board() {
        let level = Level::default();
        assert_eq!(level.slot_count, 4);
        assert_eq!(level.max_attempts, 6);
        assert_eq!(level.palette, PaletteId::Classic);
    }

    #[test]
    fn presets_cover_slot_range() {
        let slots: Vec<usize> = Preset::ALL.iter().map(|p| p.level().slot_count).collect();
        assert!(slots.contains(&4));
        assert!(slots.contains(&5));
        assert!(slots.contains(&6));
        for preset in Preset::ALL {
            let attempts = preset.level().max_attempts;
            assert!(attempts == 6 || attempts == 8);
        }
    }

    #[test]
    fn custom_validates() {
        assert_eq!(
            Level::custom(7, 8, PaletteId::Classic),
            Err(LevelError::SlotCount(7))
        );
        assert_eq!(
            Level::custom(4, 0, PaletteId::Classic),
            Err(LevelError::MaxAttempts(0))
        );
        assert!(Level::custom(6, 1, PaletteId::Extended).is_ok());
    }

    #[test]
    fn custom_bounds_attempt_budget() {
        assert!(Level::custom(4, MAX_ATTEMPTS, PaletteId::Classic).is_ok());
        assert_eq!(
            Level::custom(4, MAX_ATTEMPTS + 1, PaletteId::Classic),
            Err(LevelError::MaxAttempts(MAX_ATTEMPTS + 1))
        );
        assert_eq!(
            Level::custom(4, usize::MAX, PaletteId::Classic),
            Err(LevelError::MaxAttempts(usize::MAX))
        );
        assert!(Level::resolve(Preset::Classic, None, Some(usize::MAX), None).is_err());
    }

    #[test]
    fn resolve_applies_overrides() {
        let level = Level::resolve(Preset::Hard, None, Some(10), Some(PaletteId::Extended)).unwrap();
        assert_eq!(level.slot_count, 6);
        assert_eq!(level.max_attempts, 10);
        assert_eq!(level.palette, PaletteId::Extended);

        assert!(Level::resolve(Preset::Easy, Some(9), None, None).is_err());
    }

    #[test]
    fn preset_parse() {
        assert_eq!("Normal".parse::<Preset>(), Ok(Preset::Normal));
        assert!("insane".parse::<Preset>().is_err());
    }

    #[test]
    fn code_space_size() {
        assert_eq!(Level::default().code_space(), 1296);
        let wide = Level::custom(4, 8, PaletteId::Extended).unwrap();
        assert_eq!(wide.code_space(), 4096);
    }
}

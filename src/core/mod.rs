//! Core domain types for Hit & Blow
//!
//! Colors, palettes, codes, scoring and the completion check. Everything here
//! is pure; randomness is injected by the caller.

mod code;
mod color;
mod generator;
mod palette;
mod score;
mod verdict;

pub use code::{Code, CodeError};
pub use color::{Color, ColorError};
pub use generator::generate;
pub use palette::{Palette, PaletteError, PaletteId};
pub use score::Score;
pub use verdict::CompletionVerdict;

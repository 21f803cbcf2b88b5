//! Random solution generation

use super::{Code, Palette};
use rand::Rng;

/// Draw a solution of `length` colors uniformly from `palette`, with
/// replacement
///
/// # Panics
/// Panics if `length` is zero or the palette is empty.
///
/// # Examples
/// ```
/// use hit_blow::core::{Palette, PaletteId, generate};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let palette = Palette::from_id(PaletteId::Classic);
/// let mut rng = StdRng::seed_from_u64(7);
/// let solution = generate(4, &palette, &mut rng);
///
/// assert_eq!(solution.len(), 4);
/// assert!(solution.colors().iter().all(|&c| palette.contains(c)));
/// ```
pub fn generate(length: usize, palette: &Palette, rng: &mut impl Rng) -> Code {
    assert!(length >= 1, "solution length must be at least 1");
    assert!(!palette.is_empty(), "palette must not be empty");

    let colors = (0..length)
        .map(|_| palette.colors()[rng.random_range(0..palette.len())])
        .collect();

    // Non-empty by the assertions above
    Code::new(colors).unwrap_or_else(|_| unreachable!("length >= 1 and palette non-empty"))
}

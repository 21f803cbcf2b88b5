//! Code space enumeration
//!
//! Lists every code a level can produce and narrows it down to the codes
//! consistent with a game's feedback so far.

use crate::core::{Code, Palette, Score};
use crate::session::AttemptRecord;

/// Every code of `slot_count` colors over `palette`, in odometer order
///
/// The first slot varies slowest. Size is `palette.len() ^ slot_count`.
///
/// # Panics
/// Panics if `slot_count` is zero.
///
/// # Examples
/// ```
/// use hit_blow::analysis::all_codes;
/// use hit_blow::core::{Palette, PaletteId};
///
/// let codes = all_codes(4, &Palette::from_id(PaletteId::Classic));
/// assert_eq!(codes.len(), 1296);
/// assert_eq!(codes[0].letters(), "RRRR");
/// assert_eq!(codes[1].letters(), "RRRB");
/// ```
#[must_use]
pub fn all_codes(slot_count: usize, palette: &Palette) -> Vec<Code> {
    assert!(slot_count >= 1, "slot count must be at least 1");

    let colors = palette.colors();
    let total = colors.len().pow(slot_count as u32);
    let mut codes = Vec::with_capacity(total);
    let mut digits = vec![0usize; slot_count];

    for _ in 0..total {
        let code = digits.iter().map(|&d| colors[d]).collect();
        codes.push(Code::new(code).unwrap_or_else(|_| unreachable!("slot count is at least 1")));

        // Increment from the last slot, carrying leftwards
        for digit in digits.iter_mut().rev() {
            *digit += 1;
            if *digit < colors.len() {
                break;
            }
            *digit = 0;
        }
    }

    codes
}

/// Check whether `candidate` as the solution explains every attempt
#[must_use]
pub fn is_consistent(candidate: &Code, history: &[AttemptRecord]) -> bool {
    history
        .iter()
        .all(|record| Score::calculate(&record.guess, candidate) == record.score)
}

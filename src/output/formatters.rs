//! Formatting utilities for terminal output

use crate::core::{Code, Color, Score};
use colored::{ColoredString, Colorize};

/// Render a color name in its own color
#[must_use]
pub fn paint(text: &str, color: Color) -> ColoredString {
    match color {
        Color::Red => text.red(),
        Color::Blue => text.blue(),
        Color::Green => text.green(),
        Color::Yellow => text.yellow(),
        Color::Purple => text.magenta(),
        Color::Orange => text.truecolor(255, 165, 0),
        Color::Pink => text.truecolor(255, 105, 180),
        Color::Cyan => text.cyan(),
    }
}

/// Format a code as colored balls followed by its letters
#[must_use]
pub fn colored_code(code: &Code) -> String {
    let balls: String = code
        .colors()
        .iter()
        .map(|&c| paint("●", c).to_string())
        .collect();
    format!("{balls} {}", code.letters().bold())
}

/// Format a score as pegs: red for hits, white for blows, dim for misses
#[must_use]
pub fn colored_pegs(score: Score, slot_count: usize) -> String {
    format!(
        "{}{}{}",
        "●".repeat(score.hits as usize).red(),
        "○".repeat(score.blows as usize).white(),
        "·".repeat(score.misses(slot_count)).bright_black()
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar relative to the best possible split
#[must_use]
pub fn entropy_bar(entropy: f64, slot_count: usize, width: usize) -> String {
    create_progress_bar(entropy, max_entropy(slot_count), width)
}

/// Upper bound on entropy: every reachable score equally likely
#[must_use]
pub fn max_entropy(slot_count: usize) -> f64 {
    // (n+1)(n+2)/2 pairs with hits + blows <= n, minus the impossible (n-1, 1)
    let scores = (slot_count + 1) * (slot_count + 2) / 2 - 1;
    (scores as f64).log2()
}

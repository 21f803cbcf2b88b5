//! Simulation command
//!
//! Plays many automated games through `GameSession` and collects statistics.
//! The automated player always guesses a random code that is consistent with
//! all feedback received so far.

use crate::analysis::{all_codes, is_consistent};
use crate::config::Level;
use crate::core::Code;
use crate::session::{GameSession, Outcome};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Outcome of one simulated game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRecord {
    pub won: bool,
    pub attempts: usize,
}

/// Result of a simulation run
pub struct SimulationResult {
    pub level: Level,
    pub total_games: usize,
    pub wins: usize,
    /// Average attempts over won games
    pub average_attempts: f64,
    pub min_attempts: usize,
    pub max_attempts: usize,
    /// Attempts used by won games
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
}

impl SimulationResult {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.wins as f64 / self.total_games as f64
        }
    }
}

/// Play `count` automated games of `level`
///
/// Game `i` uses its own generator seeded from `seed` and `i`, so results
/// are reproducible for a given seed regardless of thread scheduling.
#[must_use]
pub fn run_simulation(level: Level, count: usize, seed: u64, show_progress: bool) -> SimulationResult {
    let start = Instant::now();
    let codes = all_codes(level.slot_count, &level.palette());

    let pb = if show_progress {
        let pb = ProgressBar::new(count as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb.set_message(level.to_string());
        pb
    } else {
        ProgressBar::hidden()
    };

    let records: Vec<GameRecord> = (0..count)
        .into_par_iter()
        .map(|i| {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(i as u64));
            let record = play_game(level, &codes, &mut rng);
            pb.inc(1);
            record
        })
        .collect();

    pb.finish_and_clear();

    let duration = start.elapsed();
    summarize(level, &records, duration)
}

/// Play one game with the consistent-random strategy
pub fn play_game(level: Level, codes: &[Code], rng: &mut impl Rng) -> GameRecord {
    let mut session = GameSession::start(level, rng);
    let mut candidates: Vec<&Code> = codes.iter().collect();

    while !session.is_finished() {
        let Some(&guess) = candidates.choose(rng) else {
            break;
        };

        if session.fill(guess).is_err() || session.submit().is_err() {
            break;
        }

        let history = session.history();
        candidates.retain(|candidate| is_consistent(candidate, history));
    }

    GameRecord {
        won: session.outcome() == Outcome::Won,
        attempts: session.history().len(),
    }
}

fn summarize(level: Level, records: &[GameRecord], duration: Duration) -> SimulationResult {
    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut wins = 0;
    let mut total_attempts = 0;
    let mut min_attempts = usize::MAX;
    let mut max_attempts = 0;

    for record in records.iter().filter(|r| r.won) {
        wins += 1;
        total_attempts += record.attempts;
        min_attempts = min_attempts.min(record.attempts);
        max_attempts = max_attempts.max(record.attempts);
        *distribution.entry(record.attempts).or_insert(0) += 1;
    }

    let total_games = records.len();
    SimulationResult {
        level,
        total_games,
        wins,
        average_attempts: if wins > 0 {
            total_attempts as f64 / wins as f64
        } else {
            0.0
        },
        min_attempts: if wins > 0 { min_attempts } else { 0 },
        max_attempts,
        distribution,
        duration,
        games_per_second: total_games as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Preset;

    #[test]
    fn simulation_runs() {
        let result = run_simulation(Level::default(), 20, 1, false);

        assert_eq!(result.total_games, 20);
        assert!(result.wins <= 20);
        assert!(result.max_attempts <= 6);
        if result.wins > 0 {
            assert!(result.min_attempts >= 1);
            assert!(result.average_attempts >= result.min_attempts as f64);
            assert!(result.average_attempts <= result.max_attempts as f64);
        }
    }

    #[test]
    fn distribution_sums_to_wins() {
        let result = run_simulation(Preset::Easy.level(), 30, 7, false);
        let sum: usize = result.distribution.values().sum();
        assert_eq!(sum, result.wins);
        assert!(result.distribution.keys().all(|&n| (1..=8).contains(&n)));
    }

    #[test]
    fn same_seed_same_results() {
        let a = run_simulation(Level::default(), 10, 99, false);
        let b = run_simulation(Level::default(), 10, 99, false);
        assert_eq!(a.wins, b.wins);
        assert_eq!(a.distribution, b.distribution);
    }

    #[test]
    fn consistent_player_usually_wins_easy() {
        // Consistent guessing solves 4x6 within 8 attempts almost always
        let result = run_simulation(Preset::Easy.level(), 40, 3, false);
        assert!(result.win_rate() > 0.9, "win rate {}", result.win_rate());
    }

    #[test]
    fn play_game_respects_budget() {
        let level = Level::custom(4, 1, crate::core::PaletteId::Classic).unwrap();
        let codes = all_codes(4, &level.palette());
        let mut rng = StdRng::seed_from_u64(4);
        let record = play_game(level, &codes, &mut rng);
        assert_eq!(record.attempts, 1);
    }

    #[test]
    fn empty_simulation() {
        let result = run_simulation(Level::default(), 0, 0, false);
        assert_eq!(result.total_games, 0);
        assert_eq!(result.wins, 0);
        assert!(result.win_rate().abs() < f64::EPSILON);
    }
}

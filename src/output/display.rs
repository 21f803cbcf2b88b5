//! Display functions for command results

use super::formatters::{colored_code, colored_pegs, entropy_bar};
use crate::commands::{AnalysisResult, ScoreResult, SimulationResult};
use colored::Colorize;

/// Print the result of scoring two codes
pub fn print_score_result(result: &ScoreResult) {
    let slots = result.solution.len();

    println!("\n{}", "─".repeat(60).cyan());
    println!("   Guess:     {}", colored_code(&result.guess));
    println!("   Solution:  {}", colored_code(&result.solution));
    println!("{}", "─".repeat(60).cyan());
    println!(
        "   Feedback:  {}  {} hit, {} blow",
        colored_pegs(result.score, slots),
        result.score.hits.to_string().bright_red().bold(),
        result.score.blows.to_string().bright_white().bold()
    );

    if result.score.is_perfect(slots) {
        println!("\n{}", "✅ Exact match!".green().bold());
    }
}

/// Print the result of guess analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "FEEDBACK ANALYSIS:".bright_cyan().bold(),
        colored_code(&result.guess)
    );
    println!("{}", "═".repeat(60).cyan());

    let metrics = &result.metrics;
    let bar = entropy_bar(metrics.entropy, result.slot_count, 30);

    println!("\n📊 Against {} possible solutions:", result.total_candidates);
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", metrics.entropy).bright_yellow()
    );
    println!(
        "   Info gain:   {:.1}x reduction",
        metrics.entropy.exp2()
    );
    println!(
        "   Expected:    {:.1} solutions remain",
        metrics.expected_remaining
    );
    println!("   Worst case:  {} solutions remain", metrics.max_partition);

    println!("\n📈 {}", "Feedback distribution:".bright_cyan().bold());
    for &(score, count) in &result.distribution {
        let pct = (count as f64 / result.total_candidates as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!(
            "   {}  {bar} {count:6} ({pct:5.1}%)",
            colored_pegs(score, result.slot_count)
        );
    }
}

/// Print the result of a simulation
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n🎯 Level: {}", result.level);
    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate() * 100.0)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Average attempts: {}",
        format!("{:.2}", result.average_attempts)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_attempts).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_attempts).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    if result.total_games == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for attempts in 1..=result.level.max_attempts {
        if let Some(&count) = result.distribution.get(&attempts) {
            let pct = (count as f64 / result.total_games as f64) * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░"
                    .repeat(40_usize.saturating_sub(bar_width))
                    .bright_black()
            );
            println!("   {attempts:2}: {bar} {count:4} ({pct:5.1}%)");
        }
    }

    let losses = result.total_games - result.wins;
    if losses > 0 {
        println!("   {}: {losses} games", "lost".red());
    }
}

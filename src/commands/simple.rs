//! Simple interactive CLI mode
//!
//! Text-based game without the TUI: type a full guess per line.

use crate::config::Level;
use crate::core::Code;
use crate::output::formatters::{colored_code, colored_pegs};
use crate::session::{GameSession, Outcome};
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(level: Level, rng: &mut impl Rng) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Hit & Blow - Text Mode                      ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    print_rules(&level);

    let mut session = GameSession::start(level, rng);

    loop {
        let attempt = session.attempt_index() + 1;
        let prompt = format!("Guess {attempt}/{}", level.max_attempts);
        let input = get_user_input(&prompt)?;

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                session.restart(level, rng);
                println!("\n🔄 New game started!\n");
                continue;
            }
            "" => continue,
            _ => {}
        }

        let code = match Code::parse(&input) {
            Ok(code) => code,
            Err(err) => {
                println!("❌ {err}\n");
                continue;
            }
        };

        if let Err(err) = session.fill(&code) {
            println!("❌ {err}\n");
            continue;
        }

        let evaluation = match session.submit() {
            Ok(evaluation) => evaluation,
            Err(err) => {
                println!("❌ {err}\n");
                continue;
            }
        };

        println!(
            "   {}  {}  {}\n",
            colored_code(&code),
            colored_pegs(evaluation.score, level.slot_count),
            evaluation.score.to_string().bright_black()
        );

        if !evaluation.verdict.is_complete {
            continue;
        }

        print_game_over(&session);

        match get_user_input("Play again? (yes/no)")?
            .to_lowercase()
            .as_str()
        {
            "yes" | "y" => {
                session.restart(level, rng);
                println!("\n🔄 New game started!\n");
            }
            _ => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }
    }
}

fn print_rules(level: &Level) {
    let palette = level.palette();
    let colors: Vec<String> = palette
        .colors()
        .iter()
        .map(|c| format!("{}={}", c.letter(), c.name()))
        .collect();

    println!(
        "Find the hidden code of {} colors in {} attempts.",
        level.slot_count, level.max_attempts
    );
    println!("Colors may repeat. Colors: {}\n", colors.join(" "));
    println!("  - Type a guess as letters (RGBY) or names (red green blue yellow)");
    println!("  - ● hit: right color, right slot");
    println!("  - ○ blow: right color, wrong slot\n");
    println!("Commands: 'quit' to exit, 'new' for new game\n");
}

fn print_game_over(session: &GameSession) {
    let Some(solution) = session.solution() else {
        return;
    };
    let attempts = session.history().len();

    println!("{}", "═".repeat(70).bright_cyan());
    match session.outcome() {
        Outcome::Won => {
            println!(
                "{}",
                "    🎉 🎊 ✨  C O D E   B R O K E N !  ✨ 🎊 🎉    "
                    .bright_green()
                    .bold()
            );
            println!(
                "\n  Solved in {} {}",
                attempts.to_string().bright_cyan().bold(),
                if attempts == 1 { "attempt" } else { "attempts" }
            );
        }
        Outcome::Lost | Outcome::InProgress => {
            println!("{}", "    ❌ Out of attempts".red().bold());
        }
    }
    println!("\n  Solution: {}", colored_code(solution));
    println!("{}\n", "═".repeat(70).bright_cyan());
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    // End of input behaves like quitting
    if read == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}

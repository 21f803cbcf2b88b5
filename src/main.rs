//! Hit & Blow - CLI
//!
//! Code-breaking game with TUI and text modes, plus scoring, analysis and
//! simulation tools.

use anyhow::Result;
use clap::{Parser, Subcommand};
use hit_blow::{
    commands::{analyze_guess, run_simple, run_simulation, score_codes},
    config::{Level, Preset},
    core::PaletteId,
    output::{print_analysis_result, print_score_result, print_simulation_result},
};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser)]
#[command(
    name = "hit_blow",
    about = "Hit & Blow: break the hidden color code from hit/blow feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Level: classic (default, 4 slots/6 attempts), easy (4/8), normal (5/8), hard (6/8)
    #[arg(short, long, global = true, default_value = "classic")]
    level: Preset,

    /// Override the number of slots (4-6)
    #[arg(long, global = true)]
    slots: Option<usize>,

    /// Override the attempt budget
    #[arg(long, global = true)]
    attempts: Option<usize>,

    /// Palette: classic (6 colors) or extended (8 colors)
    #[arg(short, long, global = true)]
    palette: Option<PaletteId>,

    /// Seed for reproducible games
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple text mode (type whole guesses)
    Simple,

    /// Score a guess against a solution
    Score {
        /// Guess, e.g. RRBB or "red red blue blue"
        guess: String,

        /// Solution, same format as the guess
        solution: String,
    },

    /// Show how a guess splits every possible solution by feedback
    Analyze {
        /// Guess to analyze
        guess: String,
    },

    /// Play automated games and report statistics
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = Level::resolve(cli.level, cli.slots, cli.attempts, cli.palette)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(level, cli.seed),
        Commands::Simple => run_simple_command(level, cli.seed),
        Commands::Score { guess, solution } => run_score_command(&guess, &solution),
        Commands::Analyze { guess } => run_analyze_command(&guess, &level),
        Commands::Simulate { count } => {
            run_simulate_command(level, count, cli.seed);
            Ok(())
        }
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn run_play_command(level: Level, seed: Option<u64>) -> Result<()> {
    use hit_blow::interactive::{App, run_tui};

    let app = App::new(level, make_rng(seed));
    run_tui(app)
}

fn run_simple_command(level: Level, seed: Option<u64>) -> Result<()> {
    let mut rng = make_rng(seed);
    run_simple(level, &mut rng).map_err(|e| anyhow::anyhow!(e))
}

fn run_score_command(guess: &str, solution: &str) -> Result<()> {
    let result = score_codes(guess, solution).map_err(|e| anyhow::anyhow!(e))?;
    print_score_result(&result);
    Ok(())
}

fn run_analyze_command(guess: &str, level: &Level) -> Result<()> {
    let result = analyze_guess(guess, level).map_err(|e| anyhow::anyhow!(e))?;
    print_analysis_result(&result);
    Ok(())
}

fn run_simulate_command(level: Level, count: usize, seed: Option<u64>) {
    let seed = seed.unwrap_or_else(rand::random);

    println!("\n{}", "═".repeat(70));
    println!(" Hit & Blow Simulation ");
    println!("{}", "═".repeat(70));
    println!("\nPlaying {count} games on {level}");
    println!("Seed: {seed}\n");

    let result = run_simulation(level, count, seed, true);
    print_simulation_result(&result);
}

//! TUI application state and logic

use crate::config::Level;
use crate::core::Color;
use crate::session::{Evaluation, GameSession, Outcome, SubmitError};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub session: GameSession,
    pub level: Level,
    pub rng: StdRng,
    pub input_mode: InputMode,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Playing,
    ConfirmRestart,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Won games by attempts used (index = attempts)
    pub attempt_distribution: Vec<usize>,
}

impl Statistics {
    fn record(&mut self, outcome: Outcome, attempts: usize) {
        self.total_games += 1;
        if outcome == Outcome::Won {
            self.games_won += 1;
            if self.attempt_distribution.len() <= attempts {
                self.attempt_distribution.resize(attempts + 1, 0);
            }
            self.attempt_distribution[attempts] += 1;
        }
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games > 0 {
            self.games_won as f64 / self.total_games as f64 * 100.0
        } else {
            0.0
        }
    }
}

impl App {
    #[must_use]
    pub fn new(level: Level, mut rng: StdRng) -> Self {
        let session = GameSession::start(level, &mut rng);

        Self {
            session,
            level,
            rng,
            input_mode: InputMode::Playing,
            messages: vec![
                Message {
                    text: format!("Welcome! Break the code: {level}."),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Pick colors with their letter or number, Enter to submit".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    pub fn new_game(&mut self) {
        self.session.restart(self.level, &mut self.rng);
        self.messages.clear();
        self.input_mode = InputMode::Playing;
        self.add_message("New game started! A fresh code is hidden.", MessageStyle::Info);
    }

    /// Ask before throwing away a game that has progress
    pub fn request_new_game(&mut self) {
        let has_progress = !self.session.history().is_empty()
            || self.session.buffer().iter().any(Option::is_some);

        if self.input_mode == InputMode::Playing && has_progress {
            self.input_mode = InputMode::ConfirmRestart;
            self.add_message("Abandon this game? (y/n)", MessageStyle::Info);
        } else {
            self.new_game();
        }
    }

    pub fn place_color(&mut self, color: Color) {
        match self.session.place(color) {
            Ok(true) => self.add_message("All slots filled. Press Enter to submit.", MessageStyle::Info),
            Ok(false) => {}
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    /// Place the n-th palette color (1-based, as shown in the palette panel)
    pub fn place_palette_index(&mut self, number: usize) {
        let color = number
            .checked_sub(1)
            .and_then(|i| self.session.palette().colors().get(i).copied());
        if let Some(color) = color {
            self.place_color(color);
        }
    }

    pub fn move_cursor(&mut self, forward: bool) {
        let slots = self.level.slot_count;
        let current = self.session.slot_index();
        let next = if forward {
            (current + 1) % slots
        } else {
            (current + slots - 1) % slots
        };
        if let Err(err) = self.session.select_slot(next) {
            self.add_message(&err.to_string(), MessageStyle::Error);
        }
    }

    pub fn clear_slot(&mut self) {
        if let Err(err) = self.session.clear_slot() {
            self.add_message(&err.to_string(), MessageStyle::Error);
        }
    }

    pub fn submit(&mut self) {
        match self.session.submit() {
            Ok(evaluation) => self.handle_evaluation(evaluation),
            Err(err @ SubmitError::Incomplete { .. }) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
            Err(SubmitError::Finished) => {
                self.input_mode = InputMode::GameOver;
            }
        }
    }

    fn handle_evaluation(&mut self, evaluation: Evaluation) {
        let attempt = evaluation.attempt_index + 1;

        if !evaluation.verdict.is_complete {
            self.add_message(
                &format!(
                    "Attempt {attempt}: {} ({} left)",
                    evaluation.score,
                    self.session.attempts_remaining()
                ),
                MessageStyle::Info,
            );
            return;
        }

        self.stats.record(self.session.outcome(), attempt);
        self.input_mode = InputMode::GameOver;

        if evaluation.verdict.is_success {
            let celebration = match attempt {
                1 => "🎯 FIRST TRY! Extraordinary! 🌟",
                2 => "🔥 MAGNIFICENT! Two attempts! 🔥",
                3 => "✨ SPLENDID! Three attempts! ✨",
                4 => "👏 GREAT JOB! Four attempts! 👏",
                _ => "🎉 CODE BROKEN! 🎉",
            };
            self.add_message(celebration, MessageStyle::Success);
        } else {
            self.add_message("Out of attempts. The code is revealed above.", MessageStyle::Error);
        }
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if let KeyCode::Char('c') = key.code
            && key.modifiers.contains(KeyModifiers::CONTROL)
        {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') | KeyCode::Enter => self.new_game(),
                _ => {}
            },
            InputMode::ConfirmRestart => match key.code {
                KeyCode::Char('y' | 'Y') => self.new_game(),
                KeyCode::Char('n' | 'N') | KeyCode::Esc => {
                    self.input_mode = InputMode::Playing;
                    self.add_message("Carry on!", MessageStyle::Info);
                }
                _ => {}
            },
            InputMode::Playing => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.request_new_game(),
                KeyCode::Char(ch) if ch.is_ascii_digit() => {
                    self.place_palette_index(ch.to_digit(10).unwrap_or(0) as usize);
                }
                KeyCode::Char(ch) => {
                    if let Some(color) = Color::from_letter(ch) {
                        self.place_color(color);
                    }
                }
                KeyCode::Left => self.move_cursor(false),
                KeyCode::Right | KeyCode::Tab => self.move_cursor(true),
                KeyCode::Backspace | KeyCode::Delete => self.clear_slot(),
                KeyCode::Enter => self.submit(),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

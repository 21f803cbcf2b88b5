//! TUI rendering with ratatui
//!
//! Draws the board, palette and messages for the Hit & Blow game.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Color as PegColor, Score};
use crate::session::Outcome;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Terminal color for a peg
#[must_use]
pub const fn peg_color(color: PegColor) -> Color {
    match color {
        PegColor::Red => Color::Red,
        PegColor::Blue => Color::Blue,
        PegColor::Green => Color::Green,
        PegColor::Yellow => Color::Yellow,
        PegColor::Purple => Color::Magenta,
        PegColor::Orange => Color::Rgb(255, 165, 0),
        PegColor::Pink => Color::Rgb(255, 105, 180),
        PegColor::Cyan => Color::Cyan,
    }
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input hint
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board
            Constraint::Percentage(45), // Palette and messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 HIT & BLOW - Break the Code")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let level = session.level();
    let mut lines = vec![solution_line(app), Line::from("")];

    // Newest attempt at the top, like a physical board filled bottom-up
    for attempt in (0..level.max_attempts).rev() {
        let line = if let Some(record) = session.history().get(attempt) {
            let slots = record
                .guess
                .colors()
                .iter()
                .map(|&c| Some(c))
                .collect::<Vec<_>>();
            attempt_line(attempt, &slots, None, Some(record.score), level.slot_count)
        } else if attempt == session.history().len() && !session.is_finished() {
            attempt_line(
                attempt,
                session.buffer(),
                Some(session.slot_index()),
                None,
                level.slot_count,
            )
        } else {
            let empty = vec![None; level.slot_count];
            attempt_line(attempt, &empty, None, None, level.slot_count)
        };
        lines.push(line);
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn solution_line(app: &App) -> Line<'static> {
    let mut spans = vec![Span::raw("  ?? │ ")];
    if let Some(solution) = app.session.solution() {
        for &color in solution.colors() {
            spans.push(Span::styled("● ", Style::default().fg(peg_color(color))));
        }
        let (label, color) = match app.session.outcome() {
            Outcome::Won => ("solved", Color::Green),
            _ => ("solution", Color::Red),
        };
        spans.push(Span::styled(
            format!("│ {label}"),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
    } else {
        for _ in 0..app.session.level().slot_count {
            spans.push(Span::styled("? ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled("│ hidden", Style::default().fg(Color::DarkGray)));
    }
    Line::from(spans)
}

fn attempt_line(
    attempt: usize,
    slots: &[Option<PegColor>],
    cursor: Option<usize>,
    score: Option<Score>,
    slot_count: usize,
) -> Line<'static> {
    let active = cursor.is_some();
    let number_style = if active {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut spans = vec![
        Span::styled(format!("  {:>2}", attempt + 1), number_style),
        Span::raw(" │ "),
    ];

    for (i, slot) in slots.iter().enumerate() {
        let (symbol, mut style) = match slot {
            Some(color) => ("●", Style::default().fg(peg_color(*color))),
            None if active => ("◌", Style::default().fg(Color::White)),
            None => ("·", Style::default().fg(Color::DarkGray)),
        };
        if cursor == Some(i) {
            style = style.add_modifier(Modifier::REVERSED);
        }
        spans.push(Span::styled(symbol, style));
        spans.push(Span::raw(" "));
    }

    spans.push(Span::raw("│ "));
    if let Some(score) = score {
        spans.push(Span::styled(
            "●".repeat(score.hits as usize),
            Style::default().fg(Color::Red),
        ));
        spans.push(Span::styled(
            "○".repeat(score.blows as usize),
            Style::default().fg(Color::White),
        ));
        spans.push(Span::styled(
            "·".repeat(score.misses(slot_count)),
            Style::default().fg(Color::DarkGray),
        ));
    }

    Line::from(spans)
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let palette_height = app.session.palette().len() as u16 + 2;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(palette_height), // Palette
            Constraint::Min(5),                 // Messages
        ])
        .split(area);

    render_palette(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_palette(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = app
        .session
        .palette()
        .colors()
        .iter()
        .enumerate()
        .map(|(i, &color)| {
            Line::from(vec![
                Span::styled(format!(" {} ", i + 1), Style::default().fg(Color::DarkGray)),
                Span::styled("● ", Style::default().fg(peg_color(color))),
                Span::styled(
                    format!("{} ", color.letter()),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(color.name()),
            ])
        })
        .collect();

    let palette = Paragraph::new(lines).block(
        Block::default()
            .title(" Palette ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(palette, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => match app.session.outcome() {
            Outcome::Won => (
                " 🎉 CONGRATULATIONS! 🎉 ",
                "Press 'n' for new game or 'q' to quit",
                Color::Green,
            ),
            _ => (
                " GAME OVER ",
                "Press 'n' for new game or 'q' to quit",
                Color::Red,
            ),
        },
        InputMode::ConfirmRestart => (
            " New Game? ",
            "Abandon the current game? y: yes | n: keep playing",
            Color::Magenta,
        ),
        InputMode::Playing => (
            " Your Move ",
            "Letter/number: place color | ←/→: move | ⌫: clear | Enter: submit",
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let level = app.session.level();
    let level_text = format!("{} slots | {}", level.slot_count, level.palette.name());
    f.render_widget(
        Paragraph::new(level_text).alignment(Alignment::Center),
        chunks[0],
    );

    let attempt_text = format!(
        "Attempt: {}/{}",
        (app.session.history().len() + 1).min(level.max_attempts),
        level.max_attempts
    );
    f.render_widget(
        Paragraph::new(attempt_text).alignment(Alignment::Center),
        chunks[1],
    );

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[2],
    );

    let help = Paragraph::new("q: Quit | n: New Game")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Level;
    use crate::core::Code;
    use crate::session::GameSession;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    fn app() -> App {
        let mut app = App::new(Level::default(), StdRng::seed_from_u64(2));
        app.session = GameSession::with_solution(Level::default(), Code::parse("RGBY").unwrap());
        app
    }

    #[test]
    fn renders_hidden_solution_and_palette() {
        let app = app();
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("hidden"));
        assert!(text.contains("Palette"));
        assert!(text.contains("orange"));
        assert!(!text.contains("cyan"));
    }

    #[test]
    fn renders_revealed_solution_after_win() {
        let mut app = app();
        app.session.fill(&Code::parse("RGBY").unwrap()).unwrap();
        app.submit();

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("solved"));
        assert!(text.contains("CONGRATULATIONS"));
    }

    #[test]
    fn peg_colors_are_distinct() {
        for a in PegColor::ALL {
            for b in PegColor::ALL {
                if a != b {
                    assert_ne!(peg_color(a), peg_color(b));
                }
            }
        }
    }
}

//! Hit & Blow
//!
//! A Mastermind-style code-breaking game: find the hidden sequence of colors
//! from Hit/Blow feedback before the attempts run out.
//!
//! # Quick Start
//!
//! ```rust
//! use hit_blow::config::Level;
//! use hit_blow::core::{Code, Score};
//! use hit_blow::session::{GameSession, Outcome};
//!
//! let solution = Code::parse("RGGB").unwrap();
//! let mut session = GameSession::with_solution(Level::default(), solution);
//!
//! session.fill(&Code::parse("RRBB").unwrap()).unwrap();
//! let evaluation = session.submit().unwrap();
//! assert_eq!(evaluation.score, Score::new(2, 0));
//!
//! session.fill(&Code::parse("RGGB").unwrap()).unwrap();
//! session.submit().unwrap();
//! assert_eq!(session.outcome(), Outcome::Won);
//! ```

// Core domain types
pub mod core;

// Difficulty levels
pub mod config;

// Game sessions
pub mod session;

// Feedback analysis
pub mod analysis;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

//! Wordle Terminal
//!
//! Classic five-letter, six-guess Wordle for the terminal, with daily puzzles,
//! hard mode, emoji or colored tiles, and persisted statistics.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_terminal::core::Word;
//! use wordle_terminal::game::{GameSession, GameStatus};
//! use wordle_terminal::wordlists::WordList;
//!
//! let words = WordList::builtin().unwrap();
//! let mut game = GameSession::new(&words, Word::new("slate").unwrap(), true);
//!
//! let result = game.submit_text("crane").unwrap();
//! println!("{}", result.to_emoji());
//!
//! // Hard mode: the green A must stay in place
//! assert!(game.submit_text("about").is_err());
//! assert_eq!(game.status(), GameStatus::InProgress);
//! ```

// Core domain types
pub mod core;

// Target selection and game sessions
pub mod game;

// Word lists
pub mod wordlists;

// Persisted statistics
pub mod stats;

// Run configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

//! TUI application state and logic

use crate::commands::describe;
use crate::config::GameConfig;
use crate::core::WORD_LENGTH;
use crate::game::{GameSession, Outcome};
use crate::output::game_title;
use crate::stats::{StatsRecord, StatsStore};
use crate::wordlists::WordList;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub config: GameConfig,
    pub words: &'a WordList,
    pub store: &'a StatsStore,
    pub session: GameSession<'a>,
    pub title: String,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: StatsRecord,
    pub should_quit: bool,
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

impl<'a> App<'a> {
    /// Start the first game
    ///
    /// # Errors
    ///
    /// Returns an error if no target can be picked.
    pub fn new(
        config: GameConfig,
        words: &'a WordList,
        store: &'a StatsStore,
        stats: StatsRecord,
    ) -> Result<Self> {
        let session = start_session(&config, words)?;
        let mut app = Self {
            config,
            words,
            store,
            session,
            title: game_title(&config.selection),
            input_buffer: String::new(),
            messages: Vec::new(),
            stats,
            should_quit: false,
        };
        app.greet();
        Ok(app)
    }

    fn greet(&mut self) {
        self.add_message("Type a 5-letter word and press Enter.", MessageStyle::Info);
        if self.config.hard_mode {
            self.add_message("Hard mode ON: revealed hints must be used.", MessageStyle::Info);
        }
    }

    /// Add a typed letter, ignoring anything past five
    pub fn push_letter(&mut self, c: char) {
        if self.input_buffer.len() < WORD_LENGTH && c.is_ascii_alphabetic() {
            self.input_buffer.push(c.to_ascii_uppercase());
        }
    }

    /// Submit the current input; records stats when the game ends
    ///
    /// # Errors
    ///
    /// Returns an error only if stats cannot be saved.
    pub fn submit(&mut self) -> Result<()> {
        let input = std::mem::take(&mut self.input_buffer);

        match self.session.submit_text(&input) {
            Ok(_) => {
                if self.session.is_over() {
                    self.finish_game()?;
                }
            }
            Err(e) => {
                self.input_buffer = input;
                self.add_message(&describe(&e), MessageStyle::Error);
            }
        }
        Ok(())
    }

    fn finish_game(&mut self) -> Result<()> {
        self.stats = self.stats.record_completed_game(&self.session)?;
        self.store
            .save(&self.stats)
            .with_context(|| format!("saving stats to {}", self.store.path().display()))?;

        match self.session.outcome() {
            Some(Outcome::Won { guesses }) => {
                let celebration = match guesses {
                    1 => "🎯 HOLE IN ONE!",
                    2 => "🔥 MAGNIFICENT! Two guesses!",
                    3 => "✨ SPLENDID! Three guesses!",
                    4 => "👏 GREAT JOB! Four guesses!",
                    5 => "🎉 NICE WORK! Five guesses!",
                    _ => "😅 PHEW! Got it in six!",
                };
                self.add_message(celebration, MessageStyle::Success);
            }
            _ => {
                let text = format!("The word was {}.", self.session.target());
                self.add_message(&text, MessageStyle::Error);
            }
        }
        self.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
        Ok(())
    }

    /// Start another game with the same settings
    ///
    /// # Errors
    ///
    /// Returns an error if no target can be picked.
    pub fn new_game(&mut self) -> Result<()> {
        self.session = start_session(&self.config, self.words)?;
        self.input_buffer.clear();
        self.messages.clear();
        self.greet();
        Ok(())
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
}

fn start_session<'a>(config: &GameConfig, words: &'a WordList) -> Result<GameSession<'a>> {
    let target = config
        .selection
        .pick(words.solutions())
        .context("picking the target word")?
        .clone();
    Ok(GameSession::new(words, target, config.hard_mode))
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails, or if the game loop
/// fails (the terminal is restored first).
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Esc => app.should_quit = true,
                _ if app.session.is_over() => match key.code {
                    KeyCode::Char('q') => app.should_quit = true,
                    KeyCode::Char('n') => app.new_game()?,
                    _ => {}
                },
                KeyCode::Char(c) => app.push_letter(c),
                KeyCode::Backspace => {
                    app.input_buffer.pop();
                }
                KeyCode::Enter => app.submit()?,
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

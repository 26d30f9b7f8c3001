//! One game of Wordle
//!
//! `InProgress` moves to `Won` or `Lost` and never leaves a terminal state.
//! Rejected guesses leave the session untouched.

use crate::core::{Constraint, GuessResult, HardModeViolation, Word, WordError};
use crate::wordlists::WordList;
use thiserror::Error;

/// Guesses allowed per game
pub const MAX_GUESSES: usize = 6;

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Result of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won { guesses: usize },
    Lost,
}

/// Reasons a guess is refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("the game is already over")]
    AlreadyTerminal,
    #[error("not a valid word: {0}")]
    InvalidWord(#[from] WordError),
    #[error("{0} is not in the word list")]
    NotInWordList(Word),
    #[error("hard mode: {0}")]
    HardModeViolation(#[from] HardModeViolation),
}

/// A single game: target, history, and mode
#[derive(Debug, Clone)]
pub struct GameSession<'a> {
    words: &'a WordList,
    target: Word,
    guesses: Vec<(Word, GuessResult)>,
    hard_mode: bool,
    constraint: Constraint,
    status: GameStatus,
}

impl<'a> GameSession<'a> {
    #[must_use]
    pub fn new(words: &'a WordList, target: Word, hard_mode: bool) -> Self {
        Self {
            words,
            target,
            guesses: Vec::with_capacity(MAX_GUESSES),
            hard_mode,
            constraint: Constraint::new(),
            status: GameStatus::InProgress,
        }
    }

    /// Submit a guess
    ///
    /// Checks, in order: the game is still running, the word is allowed, and
    /// (in hard mode) it honors every revealed hint. Only accepted guesses
    /// count toward the limit.
    ///
    /// # Errors
    ///
    /// Returns a `GameError` describing why the guess was refused.
    ///
    /// # Examples
    /// ```
    /// use wordle_terminal::core::Word;
    /// use wordle_terminal::game::{GameSession, GameStatus};
    /// use wordle_terminal::wordlists::WordList;
    ///
    /// let words = WordList::builtin().unwrap();
    /// let mut game = GameSession::new(&words, Word::new("crane").unwrap(), false);
    ///
    /// let result = game.submit_guess(&Word::new("crane").unwrap()).unwrap();
    /// assert!(result.is_perfect());
    /// assert_eq!(game.status(), GameStatus::Won);
    /// ```
    pub fn submit_guess(&mut self, word: &Word) -> Result<GuessResult, GameError> {
        if self.status != GameStatus::InProgress {
            return Err(GameError::AlreadyTerminal);
        }

        if !self.words.contains(word) {
            return Err(GameError::NotInWordList(word.clone()));
        }

        if self.hard_mode && !self.guesses.is_empty() {
            self.constraint.validate(word)?;
        }

        let result = GuessResult::calculate(word, &self.target);
        self.constraint.absorb(&result);
        self.guesses.push((word.clone(), result));

        if *word == self.target {
            self.status = GameStatus::Won;
        } else if self.guesses.len() == MAX_GUESSES {
            self.status = GameStatus::Lost;
        }

        log::debug!(
            "guess {}/{MAX_GUESSES}: {word} -> {} ({:?})",
            self.guesses.len(),
            result.to_emoji(),
            self.status
        );

        Ok(result)
    }

    /// Parse raw user input, then submit it
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidWord` for malformed input, otherwise the
    /// errors of [`GameSession::submit_guess`].
    pub fn submit_text(&mut self, input: &str) -> Result<GuessResult, GameError> {
        if self.status != GameStatus::InProgress {
            return Err(GameError::AlreadyTerminal);
        }
        let word: Word = input.parse()?;
        self.submit_guess(&word)
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// `None` while the game is still running
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        match self.status {
            GameStatus::InProgress => None,
            GameStatus::Won => Some(Outcome::Won {
                guesses: self.guesses.len(),
            }),
            GameStatus::Lost => Some(Outcome::Lost),
        }
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub fn guesses(&self) -> &[(Word, GuessResult)] {
        &self.guesses
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        MAX_GUESSES - self.guesses.len()
    }

    #[must_use]
    pub const fn hard_mode(&self) -> bool {
        self.hard_mode
    }

    /// Hints accumulated so far
    #[must_use]
    pub const fn constraint(&self) -> &Constraint {
        &self.constraint
    }
}

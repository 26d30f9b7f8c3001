//! Guess scoring
//!
//! A guess is scored against the target letter by letter:
//! - Correct: letter in the right position
//! - Present: letter in the word, wrong position
//! - Absent: letter not in the word (or already used up by other tiles)

use super::word::{WORD_LENGTH, Word};

/// Tile outcome for one guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterStatus {
    Absent,
    Present,
    Correct,
}

impl LetterStatus {
    /// Share-grid glyph for this status
    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Correct => "🟩",
            Self::Present => "🟨",
            Self::Absent => "⬛",
        }
    }
}

/// Scored guess: one `(letter, status)` pair per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GuessResult([(u8, LetterStatus); WORD_LENGTH]);

impl GuessResult {
    /// Score `guess` against `target`
    ///
    /// Implements Wordle's exact feedback rules, including duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches Correct and remove them from the pool
    /// 2. Second pass: mark remaining letters Present while the pool still holds them
    ///
    /// # Examples
    /// ```
    /// use wordle_terminal::core::{GuessResult, LetterStatus, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let target = Word::new("slate").unwrap();
    /// let result = GuessResult::calculate(&guess, &target);
    ///
    /// assert_eq!(result.status_at(2), LetterStatus::Correct);
    /// assert_eq!(result.status_at(1), LetterStatus::Absent);
    /// assert_eq!(result.to_emoji(), "⬛⬛🟩⬛🟩");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        let mut tiles = [(0u8, LetterStatus::Absent); WORD_LENGTH];
        let mut target_available = target.char_counts();

        // First pass: greens
        for (i, tile) in tiles.iter_mut().enumerate() {
            let letter = guess.char_at(i);
            tile.0 = letter;
            if letter == target.char_at(i) {
                tile.1 = LetterStatus::Correct;
                if let Some(count) = target_available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: yellows from whatever is left
        for tile in &mut tiles {
            if tile.1 == LetterStatus::Correct {
                continue;
            }
            if let Some(count) = target_available.get_mut(&tile.0)
                && *count > 0
            {
                tile.1 = LetterStatus::Present;
                *count -= 1;
            }
        }

        Self(tiles)
    }

    /// Tiles in guess order
    #[inline]
    #[must_use]
    pub const fn tiles(&self) -> &[(u8, LetterStatus); WORD_LENGTH] {
        &self.0
    }

    /// Status at a position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn status_at(&self, position: usize) -> LetterStatus {
        self.0[position].1
    }

    /// Check if every tile is Correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.0.iter().all(|&(_, s)| s == LetterStatus::Correct)
    }

    /// Number of tiles for `letter` marked Correct or Present
    #[must_use]
    pub fn revealed_count(&self, letter: u8) -> usize {
        self.0
            .iter()
            .filter(|&&(l, s)| l == letter && s != LetterStatus::Absent)
            .count()
    }

    /// Render as an emoji row like "🟩🟨⬛⬛🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|&(_, s)| s.emoji()).collect()
    }
}

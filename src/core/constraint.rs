//! Hard mode constraints
//!
//! Tracks what has been revealed so far in a game and checks whether a new
//! guess honors it. Constraints only ever tighten: absorbing a result can add
//! information but never remove it.

use super::feedback::{GuessResult, LetterStatus};
use super::word::{WORD_LENGTH, Word};
use rustc_hash::{FxHashMap, FxHashSet};
use thiserror::Error;

/// Why a guess breaks hard mode rules
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HardModeViolation {
    /// Position is 0-based; the message shows it 1-based
    #[error("position {} must be '{}'", .position + 1, letter_char(.letter))]
    MissingRequiredPosition { position: usize, letter: u8 },
    #[error("guess must contain {count}x '{}'", letter_char(.letter))]
    MissingRequiredLetter { letter: u8, count: usize },
}

fn letter_char(letter: &u8) -> char {
    char::from(*letter)
}

/// Accumulated hints from every accepted guess
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraint {
    fixed: [Option<u8>; WORD_LENGTH],
    required: FxHashMap<u8, usize>,
    absent: FxHashSet<u8>,
}

impl Constraint {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Widen the constraint with a freshly scored guess
    pub fn absorb(&mut self, result: &GuessResult) {
        for (i, &(letter, status)) in result.tiles().iter().enumerate() {
            match status {
                LetterStatus::Correct => self.fixed[i] = Some(letter),
                LetterStatus::Present => {}
                LetterStatus::Absent => {
                    if result.revealed_count(letter) == 0 {
                        self.absent.insert(letter);
                    }
                }
            }

            let revealed = result.revealed_count(letter);
            if revealed > 0 {
                let count = self.required.entry(letter).or_insert(0);
                *count = (*count).max(revealed);
            }
        }
    }

    /// Check a guess against every hint revealed so far
    ///
    /// Required positions are checked before required letters. Letters known
    /// to be absent may be reused.
    ///
    /// # Errors
    /// Returns the first `HardModeViolation` found.
    ///
    /// # Examples
    /// ```
    /// use wordle_terminal::core::{Constraint, GuessResult, HardModeViolation, Word};
    ///
    /// let target = Word::new("slate").unwrap();
    /// let mut constraint = Constraint::new();
    /// constraint.absorb(&GuessResult::calculate(&Word::new("crane").unwrap(), &target));
    ///
    /// assert!(constraint.validate(&Word::new("plate").unwrap()).is_ok());
    /// assert_eq!(
    ///     constraint.validate(&Word::new("crone").unwrap()),
    ///     Err(HardModeViolation::MissingRequiredPosition { position: 2, letter: b'A' })
    /// );
    /// ```
    pub fn validate(&self, guess: &Word) -> Result<(), HardModeViolation> {
        for (position, fixed) in self.fixed.iter().enumerate() {
            if let Some(letter) = *fixed
                && guess.char_at(position) != letter
            {
                return Err(HardModeViolation::MissingRequiredPosition { position, letter });
            }
        }

        // Sorted so the reported letter does not depend on hash order
        let mut required: Vec<(u8, usize)> =
            self.required.iter().map(|(&l, &c)| (l, c)).collect();
        required.sort_unstable();

        for (letter, count) in required {
            if guess.count_of(letter) < count {
                return Err(HardModeViolation::MissingRequiredLetter { letter, count });
            }
        }

        Ok(())
    }

    /// Letter fixed at a position, if known
    #[must_use]
    pub const fn fixed_at(&self, position: usize) -> Option<u8> {
        self.fixed[position]
    }

    /// Minimum number of times `letter` must appear
    #[must_use]
    pub fn required_count(&self, letter: u8) -> usize {
        self.required.get(&letter).copied().unwrap_or(0)
    }

    /// Check if `letter` is known not to be in the target at all
    #[must_use]
    pub fn is_absent(&self, letter: u8) -> bool {
        self.absent.contains(&letter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn after(guesses: &[&str], target: &str) -> Constraint {
        let target = word(target);
        let mut constraint = Constraint::new();
        for g in guesses {
            constraint.absorb(&GuessResult::calculate(&word(g), &target));
        }
        constraint
    }

    #[test]
    fn constraint_empty_accepts_anything() {
        let constraint = Constraint::new();
        assert!(constraint.validate(&word("zzzzz")).is_ok());
    }

    #[test]
    fn constraint_rejects_moved_green() {
        // CRANE vs SLATE: A is green at position 2
        let constraint = after(&["crane"], "slate");
        assert_eq!(constraint.fixed_at(2), Some(b'A'));
        assert_eq!(
            constraint.validate(&word("alert")),
            Err(HardModeViolation::MissingRequiredPosition {
                position: 2,
                letter: b'A'
            })
        );
    }

    #[test]
    fn constraint_rejects_missing_yellow() {
        // AROSE vs PLAZA: A yellow, everything else absent
        let constraint = after(&["arose"], "plaza");
        assert_eq!(constraint.required_count(b'A'), 1);
        assert_eq!(
            constraint.validate(&word("think")),
            Err(HardModeViolation::MissingRequiredLetter {
                letter: b'A',
                count: 1
            })
        );
        assert!(constraint.validate(&word("final")).is_ok());
    }

    #[test]
    fn constraint_position_checked_before_letters() {
        // CRANE vs SLATE: A and E green; THINK misses both positions and letters
        let constraint = after(&["crane"], "slate");
        assert!(matches!(
            constraint.validate(&word("think")),
            Err(HardModeViolation::MissingRequiredPosition { .. })
        ));
    }

    #[test]
    fn constraint_counts_duplicate_reveals() {
        // SPEED vs ERASE: both E's revealed, so two E's are required
        let constraint = after(&["speed"], "erase");
        assert_eq!(constraint.required_count(b'E'), 2);
        assert_eq!(
            constraint.validate(&word("beast")),
            Err(HardModeViolation::MissingRequiredLetter {
                letter: b'E',
                count: 2
            })
        );
        assert!(constraint.validate(&word("geese")).is_ok());
    }

    #[test]
    fn constraint_allows_absent_letter_reuse() {
        // CRANE vs SLATE: C, R, N absent
        let constraint = after(&["crane"], "slate");
        assert!(constraint.is_absent(b'C'));
        assert!(constraint.validate(&word("crate")).is_ok());
    }

    #[test]
    fn constraint_absent_tile_of_revealed_letter_is_not_absent() {
        // SPEED vs BEACH: one E yellow, one E gray; E is still in the word
        let constraint = after(&["speed"], "beach");
        assert!(!constraint.is_absent(b'E'));
        assert!(constraint.is_absent(b'S'));
        assert_eq!(constraint.required_count(b'E'), 1);
    }

    #[test]
    fn constraint_never_relaxes() {
        // EERIE never shows S, yet the S requirement from SPEED stays
        let constraint = after(&["speed", "eerie"], "erase");
        assert_eq!(constraint.required_count(b'E'), 2);
        assert_eq!(constraint.required_count(b'S'), 1);
    }
}

//! Core domain types for Wordle
//!
//! Pure, I/O-free types: words, guess scoring and hard mode constraints.

mod constraint;
mod feedback;
mod word;

pub use constraint::{Constraint, HardModeViolation};
pub use feedback::{GuessResult, LetterStatus};
pub use word::{WORD_LENGTH, Word, WordError};

//! Word lists for the game
//!
//! A `WordList` pairs the allowed-guess pool with the solution pool. Built-in
//! lists are compiled into the binary; custom lists are loaded from files.

mod embedded;
pub mod loader;

pub use embedded::{ALLOWED, ALLOWED_COUNT, SOLUTIONS, SOLUTIONS_COUNT};
pub use loader::{InvalidEntry, ParsedWords};

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while building a word list
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("solution list is empty")]
    EmptyWordList,
    #[error("failed to read word list {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Validated, deduplicated allowed guesses and solutions
///
/// Every solution is also an allowed guess, so the answer can always be typed.
#[derive(Debug, Clone)]
pub struct WordList {
    allowed: Vec<Word>,
    solutions: Vec<Word>,
    lookup: FxHashSet<Word>,
}

/// A loaded word list together with the lines skipped while loading it
#[derive(Debug)]
pub struct LoadedWordList {
    pub list: WordList,
    pub rejected: Vec<InvalidEntry>,
}

impl WordList {
    /// Build a word list, keeping first-seen order and dropping duplicates
    ///
    /// # Errors
    ///
    /// Returns `WordListError::EmptyWordList` if `solutions` is empty.
    ///
    /// # Examples
    /// ```
    /// use wordle_terminal::core::Word;
    /// use wordle_terminal::wordlists::WordList;
    ///
    /// let crane = Word::new("crane").unwrap();
    /// let slate = Word::new("slate").unwrap();
    /// let list = WordList::new(vec![crane.clone()], vec![slate.clone(), slate.clone()]).unwrap();
    ///
    /// assert_eq!(list.solutions().len(), 1);
    /// assert!(list.contains(&crane));
    /// assert!(list.contains(&slate));
    /// ```
    pub fn new(allowed: Vec<Word>, solutions: Vec<Word>) -> Result<Self, WordListError> {
        let solutions = dedup(solutions);
        if solutions.is_empty() {
            return Err(WordListError::EmptyWordList);
        }

        let allowed = dedup(allowed.into_iter().chain(solutions.iter().cloned()));
        let lookup = allowed.iter().cloned().collect();

        Ok(Self {
            allowed,
            solutions,
            lookup,
        })
    }

    /// The word list compiled into the binary
    ///
    /// # Errors
    ///
    /// Returns `WordListError::EmptyWordList` if the embedded solutions are empty.
    pub fn builtin() -> Result<Self, WordListError> {
        Self::new(
            loader::words_from_slice(ALLOWED),
            loader::words_from_slice(SOLUTIONS),
        )
    }

    /// Load from optional files, falling back to the built-in lists
    ///
    /// A missing path means "use the built-in list" for that half.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or the resulting solution
    /// list is empty.
    pub fn load(
        words_path: Option<&Path>,
        solutions_path: Option<&Path>,
    ) -> Result<LoadedWordList, WordListError> {
        let mut rejected = Vec::new();

        let allowed = match words_path {
            Some(path) => {
                let parsed = loader::load_from_file(path)?;
                rejected.extend(parsed.rejected);
                parsed.words
            }
            None => loader::words_from_slice(ALLOWED),
        };

        let solutions = match solutions_path {
            Some(path) => {
                let parsed = loader::load_from_file(path)?;
                rejected.extend(parsed.rejected);
                parsed.words
            }
            None => loader::words_from_slice(SOLUTIONS),
        };

        let list = Self::new(allowed, solutions)?;
        log::debug!(
            "word list ready: {} allowed, {} solutions",
            list.allowed.len(),
            list.solutions.len()
        );

        Ok(LoadedWordList { list, rejected })
    }

    /// Check if `word` may be guessed
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.lookup.contains(word)
    }

    /// All allowed guesses (solutions included)
    #[must_use]
    pub fn allowed(&self) -> &[Word] {
        &self.allowed
    }

    /// Words that can be picked as the target
    #[must_use]
    pub fn solutions(&self) -> &[Word] {
        &self.solutions
    }
}

fn dedup(words: impl IntoIterator<Item = Word>) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    words
        .into_iter()
        .filter(|w| seen.insert(w.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn words(list: &[&str]) -> Vec<Word> {
        loader::words_from_slice(list)
    }

    #[test]
    fn solutions_count_matches_const() {
        assert_eq!(SOLUTIONS.len(), SOLUTIONS_COUNT);
        assert_eq!(ALLOWED.len(), ALLOWED_COUNT);
    }

    #[test]
    fn builtin_words_are_valid() {
        for &word in SOLUTIONS.iter().chain(ALLOWED) {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn builtin_solutions_are_guessable() {
        let list = WordList::builtin().unwrap();
        assert_eq!(list.solutions().len(), SOLUTIONS_COUNT);
        for solution in list.solutions() {
            assert!(list.contains(solution), "{solution} not guessable");
        }
    }

    #[test]
    fn word_list_dedups_preserving_order() {
        let list = WordList::new(
            words(&["about", "crane", "about"]),
            words(&["slate", "crane", "slate"]),
        )
        .unwrap();

        let solutions: Vec<&str> = list.solutions().iter().map(Word::text).collect();
        assert_eq!(solutions, vec!["SLATE", "CRANE"]);

        let allowed: Vec<&str> = list.allowed().iter().map(Word::text).collect();
        assert_eq!(allowed, vec!["ABOUT", "CRANE", "SLATE"]);
    }

    #[test]
    fn word_list_empty_solutions_fails() {
        let result = WordList::new(words(&["crane"]), Vec::new());
        assert!(matches!(result, Err(WordListError::EmptyWordList)));
    }

    #[test]
    fn word_list_rejects_unknown_guess() {
        let list = WordList::new(Vec::new(), words(&["crane"])).unwrap();
        assert!(!list.contains(&Word::new("slate").unwrap()));
    }

    #[test]
    fn load_without_paths_uses_builtin() {
        let loaded = WordList::load(None, None).unwrap();
        assert_eq!(loaded.list.solutions().len(), SOLUTIONS_COUNT);
        assert!(loaded.rejected.is_empty());
    }

    #[test]
    fn load_custom_files_collects_rejections() {
        let dir = tempfile::tempdir().unwrap();
        let words_path = dir.path().join("words.txt");
        let solutions_path = dir.path().join("solutions.txt");
        fs::write(&words_path, "about\nbad\n").unwrap();
        fs::write(&solutions_path, "crane\n12345\nslate\n").unwrap();

        let loaded = WordList::load(Some(&words_path), Some(&solutions_path)).unwrap();

        assert_eq!(loaded.list.solutions().len(), 2);
        assert_eq!(loaded.list.allowed().len(), 3);
        assert_eq!(loaded.rejected.len(), 2);
        assert_eq!(loaded.rejected[0].line, 2);
        assert_eq!(loaded.rejected[1].line, 2);
    }

    #[test]
    fn load_all_malformed_solutions_fails() {
        let dir = tempfile::tempdir().unwrap();
        let solutions_path = dir.path().join("solutions.txt");
        fs::write(&solutions_path, "bad\nwords!\n").unwrap();

        let result = WordList::load(None, Some(&solutions_path));
        assert!(matches!(result, Err(WordListError::EmptyWordList)));
    }
}

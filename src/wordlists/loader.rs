//! Word list loading utilities
//!
//! Parses word lists from text (one word per line) or files, keeping a record
//! of every line that was rejected.

use super::WordListError;
use crate::core::{Word, WordError};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// A line that could not be parsed as a word
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{origin}:{line}: rejected '{text}': {reason}")]
pub struct InvalidEntry {
    pub origin: String,
    /// 1-based line number
    pub line: usize,
    pub text: String,
    pub reason: WordError,
}

/// Words parsed from one source, plus the lines that were skipped
#[derive(Debug, Clone, Default)]
pub struct ParsedWords {
    pub words: Vec<Word>,
    pub rejected: Vec<InvalidEntry>,
}

/// Parse one word per line
///
/// Blank lines are ignored. Malformed lines are skipped and reported with
/// their line number.
///
/// # Examples
/// ```
/// use wordle_terminal::wordlists::loader::parse_words;
///
/// let parsed = parse_words("crane\n\nsl4te\nslate\n", "inline");
/// assert_eq!(parsed.words.len(), 2);
/// assert_eq!(parsed.rejected[0].line, 3);
/// ```
#[must_use]
pub fn parse_words(content: &str, origin: &str) -> ParsedWords {
    let mut parsed = ParsedWords::default();

    for (index, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match Word::new(trimmed) {
            Ok(word) => parsed.words.push(word),
            Err(reason) => {
                log::warn!("{origin}:{}: skipping '{trimmed}': {reason}", index + 1);
                parsed.rejected.push(InvalidEntry {
                    origin: origin.to_string(),
                    line: index + 1,
                    text: trimmed.to_string(),
                    reason,
                });
            }
        }
    }

    parsed
}

/// Load words from a file
///
/// # Errors
///
/// Returns `WordListError::Io` if the file cannot be read.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ParsedWords, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let parsed = parse_words(&content, &path.display().to_string());
    log::debug!(
        "loaded {} words from {} ({} rejected)",
        parsed.words.len(),
        path.display(),
        parsed.rejected.len()
    );
    Ok(parsed)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_terminal::wordlists::loader::words_from_slice;
/// use wordle_terminal::wordlists::SOLUTIONS;
///
/// let words = words_from_slice(SOLUTIONS);
/// assert_eq!(words.len(), SOLUTIONS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

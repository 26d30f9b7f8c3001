//! Game configuration
//!
//! Everything a game needs to know about how it was launched, resolved once
//! from the command line and passed down explicitly.

use crate::game::Selection;
use crate::output::RenderStyle;
use std::path::{Path, PathBuf};

/// File picked up from the working directory when `--words` is not given
pub const LOCAL_WORDS_FILE: &str = "words.txt";
/// File picked up from the working directory when `--solutions` is not given
pub const LOCAL_SOLUTIONS_FILE: &str = "solutions.txt";

/// How each game in this run is set up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub selection: Selection,
    pub hard_mode: bool,
    pub style: RenderStyle,
}

/// Where the word lists come from; `None` means built-in
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordListSources {
    pub words: Option<PathBuf>,
    pub solutions: Option<PathBuf>,
}

impl WordListSources {
    /// Prefer explicit paths, then well-known files in `dir`
    #[must_use]
    pub fn resolve(words: Option<PathBuf>, solutions: Option<PathBuf>, dir: &Path) -> Self {
        Self {
            words: words.or_else(|| existing(dir.join(LOCAL_WORDS_FILE))),
            solutions: solutions.or_else(|| existing(dir.join(LOCAL_SOLUTIONS_FILE))),
        }
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    if path.is_file() {
        log::debug!("using {} from working directory", path.display());
        Some(path)
    } else {
        None
    }
}

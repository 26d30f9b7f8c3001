//! Tile rendering and small formatting helpers
//!
//! Game code only ever talks to `TileRenderer`; which glyphs come out is
//! decided once, when the renderer is picked.

use crate::core::LetterStatus;
use colored::Colorize;

/// Turns tile outcomes into terminal glyphs
pub trait TileRenderer {
    /// One board tile
    fn render_tile(&self, letter: u8, status: LetterStatus) -> String;

    /// One keyboard key; `None` means the letter has not been guessed yet
    fn render_key(&self, letter: u8, status: Option<LetterStatus>) -> String;

    /// A board slot with no guess in it yet
    fn render_empty(&self) -> String {
        "[ _ ]".to_string()
    }
}

/// Letters on colored backgrounds
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiRenderer;

/// Emoji squares, no escape codes
#[derive(Debug, Clone, Copy, Default)]
pub struct EmojiRenderer;

fn paint(text: &str, status: LetterStatus) -> String {
    let text = text.white().bold();
    match status {
        LetterStatus::Correct => text.on_green(),
        LetterStatus::Present => text.on_yellow(),
        LetterStatus::Absent => text.on_bright_black(),
    }
    .to_string()
}

impl TileRenderer for AnsiRenderer {
    fn render_tile(&self, letter: u8, status: LetterStatus) -> String {
        paint(&format!(" {} ", char::from(letter)), status)
    }

    fn render_key(&self, letter: u8, status: Option<LetterStatus>) -> String {
        let key = char::from(letter).to_string();
        status.map_or(key.clone(), |s| paint(&key, s))
    }
}

impl TileRenderer for EmojiRenderer {
    fn render_tile(&self, _letter: u8, status: LetterStatus) -> String {
        status.emoji().to_string()
    }

    fn render_key(&self, letter: u8, status: Option<LetterStatus>) -> String {
        let key = char::from(letter);
        match status {
            Some(s) => format!("{}{key}", s.emoji()),
            None => key.to_string(),
        }
    }
}

/// Which renderer to use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStyle {
    Ansi,
    Emoji,
}

impl RenderStyle {
    /// Emoji when asked for, or when color is off or stdout is not a terminal
    #[must_use]
    pub const fn choose(emoji: bool, no_color: bool, is_terminal: bool) -> Self {
        if emoji || no_color || !is_terminal {
            Self::Emoji
        } else {
            Self::Ansi
        }
    }

    #[must_use]
    pub fn renderer(self) -> Box<dyn TileRenderer> {
        match self {
            Self::Ansi => Box::new(AnsiRenderer),
            Self::Emoji => Box::new(EmojiRenderer),
        }
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emoji_tiles() {
        let r = EmojiRenderer;
        assert_eq!(r.render_tile(b'A', LetterStatus::Correct), "🟩");
        assert_eq!(r.render_tile(b'A', LetterStatus::Present), "🟨");
        assert_eq!(r.render_tile(b'A', LetterStatus::Absent), "⬛");
    }

    #[test]
    fn emoji_keys() {
        let r = EmojiRenderer;
        assert_eq!(r.render_key(b'Q', None), "Q");
        assert_eq!(r.render_key(b'Q', Some(LetterStatus::Correct)), "🟩Q");
    }

    #[test]
    fn ansi_tile_wraps_letter_in_color() {
        colored::control::set_override(true);
        let tile = AnsiRenderer.render_tile(b'R', LetterStatus::Present);
        assert!(tile.contains(" R "));
        assert!(tile.contains("\x1b["));
    }

    #[test]
    fn ansi_unknown_key_is_plain() {
        assert_eq!(AnsiRenderer.render_key(b'Z', None), "Z");
    }

    #[test]
    fn render_style_choose() {
        assert_eq!(RenderStyle::choose(false, false, true), RenderStyle::Ansi);
        assert_eq!(RenderStyle::choose(true, false, true), RenderStyle::Emoji);
        assert_eq!(RenderStyle::choose(false, true, true), RenderStyle::Emoji);
        assert_eq!(RenderStyle::choose(false, false, false), RenderStyle::Emoji);
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(0.0, 0.0, 4), "░░░░");
    }
}

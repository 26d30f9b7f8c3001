//! Terminal output formatting
//!
//! Tile renderers plus board, keyboard, share and stats display.

pub mod display;
pub mod formatters;

pub use display::{
    format_board, format_hints, format_keyboard, format_stats, game_title, keyboard_states,
    print_board, print_game_over, share_text,
};
pub use formatters::{AnsiRenderer, EmojiRenderer, RenderStyle, TileRenderer};

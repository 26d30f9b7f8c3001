//! Board, keyboard, share grid and stats display
//!
//! `format_*` functions build strings so they can be tested; `print_*`
//! functions write them to stdout.

use super::formatters::{TileRenderer, create_progress_bar};
use crate::core::{Constraint, GuessResult, LetterStatus, WORD_LENGTH, Word};
use crate::game::{GameSession, MAX_GUESSES, Outcome, Selection};
use crate::stats::StatsRecord;
use colored::Colorize;
use rustc_hash::FxHashMap;

/// Keyboard layout for the overlay
pub const QWERTY_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Heading shown above a game and in the share text
#[must_use]
pub fn game_title(selection: &Selection) -> String {
    match selection {
        Selection::Daily { date, .. } => format!("Wordle-T Daily {}", date.format("%Y-%m-%d")),
        Selection::Seeded(seed) => format!("Wordle-T ({MAX_GUESSES}) [seed {seed}]"),
        Selection::Random => format!("Wordle-T ({MAX_GUESSES})"),
    }
}

/// One row per guess, then empty rows up to the guess limit
#[must_use]
pub fn format_board(guesses: &[(Word, GuessResult)], renderer: &dyn TileRenderer) -> String {
    let mut rows: Vec<String> = guesses
        .iter()
        .map(|(_, result)| {
            result
                .tiles()
                .iter()
                .map(|&(letter, status)| renderer.render_tile(letter, status))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();

    let empty = vec![renderer.render_empty(); 5].join(" ");
    rows.extend(std::iter::repeat_n(empty, MAX_GUESSES.saturating_sub(guesses.len())));
    rows.join("\n")
}

/// Best status seen for every guessed letter (Correct > Present > Absent)
#[must_use]
pub fn keyboard_states(guesses: &[(Word, GuessResult)]) -> FxHashMap<u8, LetterStatus> {
    let mut best: FxHashMap<u8, LetterStatus> = FxHashMap::default();
    for (_, result) in guesses {
        for &(letter, status) in result.tiles() {
            best.entry(letter)
                .and_modify(|s| *s = (*s).max(status))
                .or_insert(status);
        }
    }
    best
}

/// QWERTY overlay colored by `keyboard_states`
#[must_use]
pub fn format_keyboard(guesses: &[(Word, GuessResult)], renderer: &dyn TileRenderer) -> String {
    let states = keyboard_states(guesses);
    QWERTY_ROWS
        .iter()
        .map(|row| {
            row.bytes()
                .map(|key| renderer.render_key(key, states.get(&key).copied()))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pasteable result grid, always emoji
///
/// # Examples
/// ```
/// use wordle_terminal::core::Word;
/// use wordle_terminal::game::GameSession;
/// use wordle_terminal::output::share_text;
/// use wordle_terminal::wordlists::WordList;
///
/// let words = WordList::builtin().unwrap();
/// let mut game = GameSession::new(&words, Word::new("slate").unwrap(), false);
/// game.submit_text("crane").unwrap();
/// game.submit_text("slate").unwrap();
///
/// assert_eq!(share_text("Wordle-T (6)", &game), "Wordle-T (6) 2/6\n⬛⬛🟩⬛🟩\n🟩🟩🟩🟩🟩");
/// ```
#[must_use]
pub fn share_text(title: &str, session: &GameSession<'_>) -> String {
    let score = match session.outcome() {
        Some(Outcome::Won { guesses }) => guesses.to_string(),
        _ => "X".to_string(),
    };

    let mut lines = vec![format!("{title} {score}/{MAX_GUESSES}")];
    lines.extend(session.guesses().iter().map(|(_, r)| r.to_emoji()));
    lines.join("\n")
}

/// Hard mode reminder of what the next guess must honor
///
/// `None` until something has been revealed.
#[must_use]
pub fn format_hints(constraint: &Constraint) -> Option<String> {
    let mut parts = Vec::new();

    let fixed: Vec<Option<u8>> = (0..WORD_LENGTH).map(|i| constraint.fixed_at(i)).collect();
    if fixed.iter().any(Option::is_some) {
        let pattern: Vec<String> = fixed
            .iter()
            .map(|f| f.map_or('_', char::from).to_string())
            .collect();
        parts.push(format!("Known: {}", pattern.join(" ")));
    }

    // Letters still owed beyond the fixed positions
    let mut owed = Vec::new();
    for letter in b'A'..=b'Z' {
        let placed = fixed.iter().filter(|&&f| f == Some(letter)).count();
        let extra = constraint.required_count(letter).saturating_sub(placed);
        owed.extend(std::iter::repeat_n(char::from(letter).to_string(), extra));
    }
    if !owed.is_empty() {
        parts.push(format!("Must use: {}", owed.join(" ")));
    }

    let out: Vec<String> = (b'A'..=b'Z')
        .filter(|&l| constraint.is_absent(l))
        .map(|l| char::from(l).to_string())
        .collect();
    if !out.is_empty() {
        parts.push(format!("Out: {}", out.join(" ")));
    }

    (!parts.is_empty()).then(|| parts.join("  •  "))
}

/// Totals line plus a guess-distribution chart
#[must_use]
pub fn format_stats(stats: &StatsRecord) -> String {
    let mut lines = vec![
        format!(
            "Games: {}  •  Wins: {}  •  Losses: {}  •  Win%: {}  •  Streak: {} (max {})",
            stats.games_played,
            stats.games_won,
            stats.games_lost(),
            stats.win_percentage(),
            stats.current_streak,
            stats.max_streak
        ),
        "Guess distribution:".to_string(),
    ];

    let max = (1..=MAX_GUESSES).map(|n| stats.wins_in(n)).max().unwrap_or(0);
    for n in 1..=MAX_GUESSES {
        let count = stats.wins_in(n);
        let bar = create_progress_bar(f64::from(count), f64::from(max), 30);
        lines.push(format!(" {n}: {bar} {count}"));
    }

    lines.join("\n")
}

/// Board followed by keyboard overlay
pub fn print_board(session: &GameSession<'_>, renderer: &dyn TileRenderer) {
    println!("{}", format_board(session.guesses(), renderer));
    println!();
    println!("{}", format_keyboard(session.guesses(), renderer));
    println!();

    if session.hard_mode()
        && !session.is_over()
        && let Some(hints) = format_hints(session.constraint())
    {
        println!("{}\n", hints.cyan());
    }
}

/// End-of-game banner, stats and share grid
pub fn print_game_over(session: &GameSession<'_>, title: &str, stats: &StatsRecord) {
    match session.outcome() {
        Some(Outcome::Won { guesses }) => println!(
            "{}",
            format!("✅ You win in {guesses}/{MAX_GUESSES}!").green().bold()
        ),
        _ => println!(
            "{}",
            format!("❌ You lose. The word was: {}", session.target())
                .red()
                .bold()
        ),
    }

    println!("{}", format_stats(stats));
    println!("\nShare:");
    println!("{}", share_text(title, session));
}

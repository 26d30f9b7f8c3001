//! Line-based game loop
//!
//! Plays games back to back until the player declines another round or
//! closes input.

use crate::config::GameConfig;
use crate::game::{GameError, GameSession, MAX_GUESSES};
use crate::output::{game_title, print_board, print_game_over};
use crate::stats::{StatsRecord, StatsStore};
use crate::wordlists::WordList;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the interactive line-based game
///
/// # Errors
///
/// Returns an error if the target cannot be picked, stdin/stdout fail, or
/// stats cannot be saved.
pub fn run_play(
    config: &GameConfig,
    words: &WordList,
    store: &StatsStore,
    mut stats: StatsRecord,
) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        let Some(finished) = play_one_game(config, words, &mut input)? else {
            println!("\nBye!");
            return Ok(());
        };

        stats = stats.record_completed_game(&finished)?;
        store
            .save(&stats)
            .with_context(|| format!("saving stats to {}", store.path().display()))?;

        print_game_over(&finished, &game_title(&config.selection), &stats);

        let again = prompt(&mut input, "\nPlay again? [y/N]")?;
        if !again.is_some_and(|a| wants_another(&a)) {
            println!("Okay, gg. 👋");
            return Ok(());
        }
    }
}

/// Play until the game ends; `None` if input closed first
fn play_one_game<'a, R: BufRead>(
    config: &GameConfig,
    words: &'a WordList,
    input: &mut R,
) -> Result<Option<GameSession<'a>>> {
    let target = config
        .selection
        .pick(words.solutions())
        .context("picking the target word")?
        .clone();
    let mut session = GameSession::new(words, target, config.hard_mode);
    let renderer = config.style.renderer();

    println!("{}", game_title(&config.selection).bold());
    if session.hard_mode() {
        println!("Hard mode ON");
    }
    println!("Type a 5-letter word. Enter to submit. Ctrl+D to quit.\n");

    while !session.is_over() {
        print_board(&session, renderer.as_ref());

        let label = format!("Guess {}/{MAX_GUESSES}", session.guesses().len() + 1);
        let Some(guess) = prompt(input, &label)? else {
            return Ok(None);
        };

        if let Err(e) = session.submit_text(&guess) {
            println!("{}\n", describe(&e).yellow());
        }
    }

    print_board(&session, renderer.as_ref());
    Ok(Some(session))
}

/// Player-facing text for a refused guess
#[must_use]
pub fn describe(error: &GameError) -> String {
    match error {
        GameError::InvalidWord(_) => "Please enter a valid 5-letter word.".to_string(),
        GameError::NotInWordList(word) => {
            format!("{word} is not in the word list (add it to words.txt to allow).")
        }
        GameError::HardModeViolation(v) => format!("Hard mode: {v}."),
        GameError::AlreadyTerminal => "The game is already over.".to_string(),
    }
}

fn wants_another(answer: &str) -> bool {
    matches!(answer.to_lowercase().as_str(), "y" | "yes")
}

/// Print a prompt and read one trimmed line; `None` on end of input
fn prompt<R: BufRead>(input: &mut R, label: &str) -> Result<Option<String>> {
    print!("{label}: ");
    io::stdout().flush().context("flushing stdout")?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("reading input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

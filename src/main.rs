//! Wordle Terminal - CLI
//!
//! Plays Wordle in the terminal, line by line or as a full-screen TUI.

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::io::IsTerminal;
use std::path::PathBuf;
use wordle_terminal::{
    commands::{load_stats, run_play, run_stats},
    config::{GameConfig, WordListSources},
    game::{Selection, default_epoch},
    output::RenderStyle,
    stats::StatsStore,
    wordlists::WordList,
};

#[derive(Parser)]
#[command(
    name = "wordle_terminal",
    about = "Wordle in the terminal: daily puzzles, hard mode, emoji tiles and stats",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word of the day (same puzzle for everyone on a date)
    #[arg(long, global = true)]
    daily: bool,

    /// Seed for a reproducible game (ignored with --daily)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Hard mode: revealed hints must be used in later guesses
    #[arg(long, global = true)]
    hard: bool,

    /// Emoji-only tiles (no ANSI colors)
    #[arg(long, global = true)]
    emoji: bool,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    /// Allowed-guess list, one word per line (default: ./words.txt or built-in)
    #[arg(long, global = true)]
    words: Option<PathBuf>,

    /// Solution list, one word per line (default: ./solutions.txt or built-in)
    #[arg(long, global = true)]
    solutions: Option<PathBuf>,

    /// Stats file (default: ~/.wordle_terminal_stats.json)
    #[arg(long, global = true, env = "WORDLE_TERMINAL_STATS")]
    stats_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play in the terminal, line by line (default)
    Play,

    /// Play in a full-screen TUI
    Tui,

    /// Show saved statistics
    Stats,
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        let selection = if self.daily {
            Selection::Daily {
                date: Local::now().date_naive(),
                epoch: default_epoch(),
            }
        } else if let Some(seed) = self.seed {
            Selection::Seeded(seed)
        } else {
            Selection::Random
        };

        GameConfig {
            selection,
            hard_mode: self.hard,
            style: RenderStyle::choose(self.emoji, self.no_color, std::io::stdout().is_terminal()),
        }
    }

    fn stats_store(&self) -> Result<StatsStore> {
        let path = match &self.stats_file {
            Some(path) => path.clone(),
            None => StatsStore::default_path()
                .context("no home directory found; pass --stats-file")?,
        };
        Ok(StatsStore::new(path))
    }
}

/// Load word lists, reporting skipped lines
fn load_word_list(cli: &Cli) -> Result<WordList> {
    let cwd = std::env::current_dir().context("reading the working directory")?;
    let sources = WordListSources::resolve(cli.words.clone(), cli.solutions.clone(), &cwd);

    let loaded = WordList::load(sources.words.as_deref(), sources.solutions.as_deref())
        .context("loading word lists")?;

    for entry in &loaded.rejected {
        eprintln!("{}", format!("skipped {entry}").yellow());
    }

    Ok(loaded.list)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if cli.no_color {
        colored::control::set_override(false);
    }

    let store = cli.stats_store()?;
    let command = cli.command.as_ref().unwrap_or(&Commands::Play);

    match command {
        Commands::Stats => run_stats(&store),
        Commands::Play => {
            let words = load_word_list(&cli)?;
            let stats = load_stats(&store)?;
            run_play(&cli.game_config(), &words, &store, stats)
        }
        Commands::Tui => run_tui_command(&cli, &store),
    }
}

fn run_tui_command(cli: &Cli, store: &StatsStore) -> Result<()> {
    use wordle_terminal::interactive::{App, run_tui};

    let words = load_word_list(cli)?;
    let stats = load_stats(store)?;
    let app = App::new(cli.game_config(), &words, store, stats)?;
    run_tui(app)
}

//! Stats loading and the `stats` command

use crate::output::format_stats;
use crate::stats::{StatsRecord, StatsStore};
use anyhow::{Context, Result};
use colored::Colorize;

/// Load stats, moving a corrupt file aside with a visible warning
///
/// # Errors
///
/// Returns an error if the stats file exists but cannot be read or backed up.
pub fn load_stats(store: &StatsStore) -> Result<StatsRecord> {
    let (record, backup) = store
        .load_or_recover()
        .with_context(|| format!("loading stats from {}", store.path().display()))?;

    if let Some(backup) = backup {
        eprintln!(
            "{}",
            format!(
                "⚠ Stats file was unreadable; saved a copy to {} and started fresh.",
                backup.display()
            )
            .yellow()
        );
    }

    Ok(record)
}

/// Print the stored statistics
///
/// # Errors
///
/// Returns an error if the stats file cannot be read.
pub fn run_stats(store: &StatsStore) -> Result<()> {
    let record = load_stats(store)?;
    println!("{}", "Statistics".bold());
    println!("{}", format_stats(&record));
    println!("\n{}", format!("({})", store.path().display()).bright_black());
    Ok(())
}

//! Cumulative play statistics

use super::StatsError;
use crate::game::{GameSession, MAX_GUESSES, Outcome};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Totals across every finished game
///
/// Older stats files used `played`, `wins` and `dist`; those keys are still
/// read. Missing fields fall back to zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsRecord {
    #[serde(alias = "played")]
    pub games_played: u32,
    #[serde(alias = "wins")]
    pub games_won: u32,
    pub current_streak: u32,
    pub max_streak: u32,
    /// Guesses used (1-6) -> number of games won with that many
    #[serde(alias = "dist")]
    pub guess_distribution: BTreeMap<usize, u32>,
}

impl Default for StatsRecord {
    fn default() -> Self {
        Self {
            games_played: 0,
            games_won: 0,
            current_streak: 0,
            max_streak: 0,
            guess_distribution: (1..=MAX_GUESSES).map(|n| (n, 0)).collect(),
        }
    }
}

impl StatsRecord {
    /// Fold a finished game into the totals
    ///
    /// Returns a new record; `self` is left as it was. Call this exactly once
    /// per game.
    ///
    /// # Errors
    ///
    /// Returns `StatsError::GameInProgress` if the session has not finished.
    pub fn record_completed_game(&self, session: &GameSession<'_>) -> Result<Self, StatsError> {
        let outcome = session.outcome().ok_or(StatsError::GameInProgress)?;
        Ok(self.with_outcome(outcome))
    }

    /// Apply one game result
    ///
    /// # Examples
    /// ```
    /// use wordle_terminal::game::Outcome;
    /// use wordle_terminal::stats::StatsRecord;
    ///
    /// let stats = StatsRecord::default()
    ///     .with_outcome(Outcome::Won { guesses: 3 })
    ///     .with_outcome(Outcome::Lost);
    ///
    /// assert_eq!(stats.games_played, 2);
    /// assert_eq!(stats.games_won, 1);
    /// assert_eq!(stats.current_streak, 0);
    /// assert_eq!(stats.max_streak, 1);
    /// assert_eq!(stats.guess_distribution[&3], 1);
    /// ```
    #[must_use]
    pub fn with_outcome(&self, outcome: Outcome) -> Self {
        let mut next = self.clone();
        next.games_played = next.games_played.saturating_add(1);

        match outcome {
            Outcome::Won { guesses } => {
                next.games_won = next.games_won.saturating_add(1);
                next.current_streak = next.current_streak.saturating_add(1);
                next.max_streak = next.max_streak.max(next.current_streak);
                let bucket = next.guess_distribution.entry(guesses).or_insert(0);
                *bucket = bucket.saturating_add(1);
            }
            Outcome::Lost => next.current_streak = 0,
        }

        next
    }

    #[must_use]
    pub const fn games_lost(&self) -> u32 {
        self.games_played.saturating_sub(self.games_won)
    }

    /// Rounded win rate, 0 when nothing has been played
    #[must_use]
    pub fn win_percentage(&self) -> u32 {
        if self.games_played == 0 {
            return 0;
        }
        (f64::from(self.games_won) * 100.0 / f64::from(self.games_played)).round() as u32
    }

    /// Count for a bucket (0 if absent)
    #[must_use]
    pub fn wins_in(&self, guesses: usize) -> u32 {
        self.guess_distribution.get(&guesses).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::wordlists::WordList;
    use crate::wordlists::loader::words_from_slice;

    fn won_in(guesses: usize) -> Outcome {
        Outcome::Won { guesses }
    }

    #[test]
    fn default_has_all_buckets() {
        let stats = StatsRecord::default();
        assert_eq!(stats.guess_distribution.len(), MAX_GUESSES);
        assert!(stats.guess_distribution.values().all(|&n| n == 0));
    }

    #[test]
    fn won_game_bumps_only_its_bucket() {
        let before = StatsRecord::default().with_outcome(won_in(4));
        let after = before.with_outcome(won_in(3));

        assert_eq!(after.wins_in(3), before.wins_in(3) + 1);
        for bucket in [1, 2, 4, 5, 6] {
            assert_eq!(after.wins_in(bucket), before.wins_in(bucket), "bucket {bucket}");
        }
        assert_eq!(after.games_played, 2);
        assert_eq!(after.games_won, 2);
        assert_eq!(after.current_streak, 2);
        assert_eq!(after.max_streak, 2);
    }

    #[test]
    fn loss_resets_streak_keeps_max() {
        let mut stats = StatsRecord::default();
        for _ in 0..5 {
            stats = stats.with_outcome(won_in(2));
        }
        let stats = stats.with_outcome(Outcome::Lost);

        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.max_streak, 5);
        assert_eq!(stats.games_played, 6);
        assert_eq!(stats.games_lost(), 1);
        assert_eq!(stats.wins_in(2), 5);
    }

    #[test]
    fn loss_adds_no_distribution_entry() {
        let before = StatsRecord::default();
        let after = before.with_outcome(Outcome::Lost);
        assert_eq!(after.guess_distribution, before.guess_distribution);
    }

    #[test]
    fn max_streak_only_grows() {
        let stats = StatsRecord {
            current_streak: 0,
            max_streak: 9,
            ..StatsRecord::default()
        }
        .with_outcome(won_in(1));
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.max_streak, 9);
    }

    #[test]
    fn win_percentage_rounds() {
        assert_eq!(StatsRecord::default().win_percentage(), 0);
        let stats = StatsRecord::default()
            .with_outcome(won_in(1))
            .with_outcome(won_in(1))
            .with_outcome(Outcome::Lost);
        assert_eq!(stats.win_percentage(), 67);
    }

    #[test]
    fn record_completed_game_from_session() {
        let words = WordList::new(Vec::new(), words_from_slice(&["crane", "slate"])).unwrap();
        let mut game = GameSession::new(&words, Word::new("slate").unwrap(), false);

        assert!(matches!(
            StatsRecord::default().record_completed_game(&game),
            Err(StatsError::GameInProgress)
        ));

        game.submit_text("crane").unwrap();
        game.submit_text("slate").unwrap();
        let stats = StatsRecord::default().record_completed_game(&game).unwrap();
        assert_eq!(stats.wins_in(2), 1);
        assert_eq!(stats.games_won, 1);
    }

    #[test]
    fn counters_saturate_at_max() {
        let json = format!(
            r#"{{"games_played": {max}, "games_won": {max}, "current_streak": {max},
                "max_streak": {max}, "guess_distribution": {{"2": {max}}}}}"#,
            max = u32::MAX
        );
        let stats: StatsRecord = serde_json::from_str(&json).unwrap();

        let won = stats.with_outcome(won_in(2));
        assert_eq!(won.games_played, u32::MAX);
        assert_eq!(won.games_won, u32::MAX);
        assert_eq!(won.current_streak, u32::MAX);
        assert_eq!(won.max_streak, u32::MAX);
        assert_eq!(won.wins_in(2), u32::MAX);

        let lost = stats.with_outcome(Outcome::Lost);
        assert_eq!(lost.games_played, u32::MAX);
        assert_eq!(lost.current_streak, 0);
    }

    #[test]
    fn deserializes_legacy_keys() {
        let json = r#"{
            "played": 4,
            "wins": 3,
            "current_streak": 2,
            "max_streak": 3,
            "dist": {"1": 0, "2": 1, "3": 2, "4": 0, "5": 0, "6": 0},
            "fails": 1
        }"#;
        let stats: StatsRecord = serde_json::from_str(json).unwrap();
        assert_eq!(stats.games_played, 4);
        assert_eq!(stats.games_won, 3);
        assert_eq!(stats.wins_in(3), 2);
    }

    #[test]
    fn deserializes_partial_object() {
        let stats: StatsRecord = serde_json::from_str(r#"{"games_played": 2}"#).unwrap();
        assert_eq!(stats.games_played, 2);
        assert_eq!(stats.guess_distribution.len(), MAX_GUESSES);
    }
}

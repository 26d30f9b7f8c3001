//! Target word selection
//!
//! Every strategy reduces to the same contract: produce a raw index, then take
//! it modulo the solution count. That keeps short custom lists in range.

use crate::core::Word;
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use thiserror::Error;

/// Errors raised while picking a target
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectError {
    #[error("date {date} is before the puzzle epoch {epoch}")]
    InvalidDate { date: NaiveDate, epoch: NaiveDate },
    #[error("no solutions to choose from")]
    NoSolutions,
}

/// Day zero of the daily puzzle sequence (2021-06-19)
#[must_use]
pub fn default_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2021, 6, 19).unwrap_or_default()
}

/// Reduce a raw index into `0..len`
#[inline]
#[must_use]
pub fn index_for(raw: u64, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some((raw % len as u64) as usize)
}

fn pick(raw: u64, solutions: &[Word]) -> Result<&Word, SelectError> {
    index_for(raw, solutions.len())
        .map(|i| &solutions[i])
        .ok_or(SelectError::NoSolutions)
}

/// Daily puzzle: whole days since `epoch`, modulo the solution count
///
/// # Errors
///
/// Returns `SelectError::InvalidDate` if `date` is before `epoch`, or
/// `SelectError::NoSolutions` if the list is empty.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use wordle_terminal::core::Word;
/// use wordle_terminal::game::select_daily;
///
/// let words: Vec<Word> = ["crane", "slate", "adieu"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let epoch = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
///
/// // 4 days after the epoch, 4 mod 3 = 1
/// assert_eq!(select_daily(date, &words, epoch).unwrap().text(), "SLATE");
/// ```
pub fn select_daily(
    date: NaiveDate,
    solutions: &[Word],
    epoch: NaiveDate,
) -> Result<&Word, SelectError> {
    let days = date.signed_duration_since(epoch).num_days();
    let days = u64::try_from(days).map_err(|_| SelectError::InvalidDate { date, epoch })?;
    pick(days, solutions)
}

/// Reproducible pick driven by a caller-supplied seed
///
/// # Errors
///
/// Returns `SelectError::NoSolutions` if the list is empty.
pub fn select_seeded(seed: u64, solutions: &[Word]) -> Result<&Word, SelectError> {
    let mut rng = StdRng::seed_from_u64(seed);
    pick(rng.next_u64(), solutions)
}

/// Pick using the given random source
///
/// # Errors
///
/// Returns `SelectError::NoSolutions` if the list is empty.
pub fn select_random<'a, R: RngCore + ?Sized>(
    rng: &mut R,
    solutions: &'a [Word],
) -> Result<&'a Word, SelectError> {
    pick(rng.next_u64(), solutions)
}

/// How the target word is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Same word for everyone on a given date
    Daily { date: NaiveDate, epoch: NaiveDate },
    Seeded(u64),
    Random,
}

impl Selection {
    /// Pick a target from `solutions`
    ///
    /// # Errors
    ///
    /// Propagates the `SelectError` of the underlying strategy.
    pub fn pick<'a>(&self, solutions: &'a [Word]) -> Result<&'a Word, SelectError> {
        let target = match *self {
            Self::Daily { date, epoch } => select_daily(date, solutions, epoch)?,
            Self::Seeded(seed) => select_seeded(seed, solutions)?,
            Self::Random => select_random(&mut rand::rng(), solutions)?,
        };
        log::debug!("selected target via {self:?}");
        Ok(target)
    }
}

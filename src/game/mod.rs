//! Game flow: choosing a target and running a session

mod selector;
mod session;

pub use selector::{
    SelectError, Selection, default_epoch, index_for, select_daily, select_random, select_seeded,
};
pub use session::{GameError, GameSession, GameStatus, MAX_GUESSES, Outcome};

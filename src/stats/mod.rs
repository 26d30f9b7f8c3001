//! Play statistics and their on-disk store

mod record;
mod store;

pub use record::StatsRecord;
pub use store::{DEFAULT_FILE_NAME, StatsStore};

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while updating or persisting stats
#[derive(Debug, Error)]
pub enum StatsError {
    #[error("stats file {} is corrupt", .path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("stats file {} could not be accessed", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to encode stats")]
    Serialize(#[source] serde_json::Error),
    #[error("cannot record a game that is still in progress")]
    GameInProgress,
}

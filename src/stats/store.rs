//! Stats file persistence
//!
//! The record lives in a single JSON file. Saves go to a sibling temp file
//! that is flushed, synced and renamed over the destination, so an
//! interrupted save leaves the previous file intact.
//!
//! One process is assumed to own the file; there is no locking.

use super::{StatsError, StatsRecord};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// File name used under the home directory
pub const DEFAULT_FILE_NAME: &str = ".wordle_terminal_stats.json";

/// Reads and writes a `StatsRecord` at a fixed path
#[derive(Debug, Clone)]
pub struct StatsStore {
    path: PathBuf,
}

impl StatsStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `$HOME/.wordle_terminal_stats.json` (`%USERPROFILE%` on Windows)
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        std::env::var_os("HOME")
            .or_else(|| std::env::var_os("USERPROFILE"))
            .map(|home| PathBuf::from(home).join(DEFAULT_FILE_NAME))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the record, or an empty one if the file does not exist
    ///
    /// # Errors
    ///
    /// Returns `StatsError::Corrupt` if the file is not a valid record and
    /// `StatsError::Io` if it cannot be read.
    pub fn load(&self) -> Result<StatsRecord, StatsError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("no stats at {}, starting fresh", self.path.display());
                return Ok(StatsRecord::default());
            }
            Err(source) => {
                return Err(StatsError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        parse_record(&content).map_err(|source| StatsError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    /// Atomically replace the stored record
    ///
    /// # Errors
    ///
    /// Returns `StatsError::Io` if the temp file cannot be written or renamed.
    /// The previous file is untouched in that case.
    pub fn save(&self, record: &StatsRecord) -> Result<(), StatsError> {
        let mut bytes = serde_json::to_vec_pretty(record).map_err(StatsError::Serialize)?;
        bytes.push(b'\n');

        let tmp = self.temp_path();
        let result = self.write_and_swap(&tmp, &bytes);
        if result.is_err() {
            // Best effort; the write error is the one reported
            let _ = fs::remove_file(&tmp);
        }

        result.map_err(|source| StatsError::Io {
            path: self.path.clone(),
            source,
        })?;
        log::debug!("saved stats to {}", self.path.display());
        Ok(())
    }

    /// Move an unreadable stats file aside to `<name>.bak`
    ///
    /// Earlier backups are kept: if `<name>.bak` exists, the first free
    /// `<name>.bak.N` is used instead.
    ///
    /// # Errors
    ///
    /// Returns `StatsError::Io` if the rename fails.
    pub fn back_up(&self) -> Result<PathBuf, StatsError> {
        let backup = self.free_backup_path();

        fs::rename(&self.path, &backup).map_err(|source| StatsError::Io {
            path: self.path.clone(),
            source,
        })?;
        log::warn!(
            "moved unreadable stats {} to {}",
            self.path.display(),
            backup.display()
        );
        Ok(backup)
    }

    /// Load, backing up and starting over if the file is corrupt
    ///
    /// Returns the record and, when recovery happened, the backup path.
    ///
    /// # Errors
    ///
    /// Returns I/O failures; corruption is handled here.
    pub fn load_or_recover(&self) -> Result<(StatsRecord, Option<PathBuf>), StatsError> {
        match self.load() {
            Ok(record) => Ok((record, None)),
            Err(StatsError::Corrupt { source, .. }) => {
                log::warn!("stats file {} is corrupt: {source}", self.path.display());
                let backup = self.back_up()?;
                Ok((StatsRecord::default(), Some(backup)))
            }
            Err(e) => Err(e),
        }
    }

    fn free_backup_path(&self) -> PathBuf {
        let base = self.path.file_name().unwrap_or_default();
        (0u32..)
            .map(|n| {
                let mut name = base.to_os_string();
                name.push(".bak");
                if n > 0 {
                    name.push(format!(".{n}"));
                }
                self.path.with_file_name(name)
            })
            .find(|candidate| !candidate.exists())
            .unwrap_or_else(|| self.path.with_extension("bak"))
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = std::ffi::OsString::from(".");
        name.push(self.path.file_name().unwrap_or_default());
        name.push(format!(".{}.tmp", std::process::id()));
        self.path.with_file_name(name)
    }

    fn write_and_swap(&self, tmp: &Path, bytes: &[u8]) -> io::Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let mut file = File::create(tmp)?;
        file.write_all(bytes)?;
        file.sync_all()?;
        drop(file);

        fs::rename(tmp, &self.path)
    }
}

/// Parse a stored record, accepting only a JSON object at the top level
///
/// serde's derived struct impl also fills fields from a sequence, which
/// would turn `[1, 2, 3]` into a record.
fn parse_record(content: &str) -> Result<StatsRecord, serde_json::Error> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    if !value.is_object() {
        return Err(serde::de::Error::custom("stats file must hold a JSON object"));
    }
    serde_json::from_value(value)
}

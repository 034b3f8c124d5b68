//! # High Score Persistence
//!
//! One named integer (`highest_score`) kept across runs. Stored as a small
//! JSON document in the data directory (`~/.flagquiz/high_score.json` by
//! default), written via `.tmp` + `rename()` so a crash never leaves a
//! half-written file behind.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::core::storage::atomic_write_json;

const HIGH_SCORE_FILE: &str = "high_score.json";

#[derive(Debug)]
pub enum StoreError {
    Io(io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "high score I/O error: {e}"),
            StoreError::Parse(e) => write!(f, "high score parse error: {e}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<io::Error> for StoreError {
    fn from(e: io::Error) -> Self {
        StoreError::Io(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Parse(e)
    }
}

/// Reads and writes the persisted high score.
pub trait HighScoreStore {
    /// Returns the stored high score, or 0 if none has been recorded.
    fn load(&self) -> Result<i32, StoreError>;

    fn save(&mut self, score: i32) -> Result<(), StoreError>;
}

#[derive(Serialize, Deserialize, Debug, Default, PartialEq, Eq)]
struct HighScoreRecord {
    highest_score: i32,
}

/// File-backed store.
#[derive(Debug, Clone)]
pub struct FileHighScoreStore {
    path: PathBuf,
}

impl FileHighScoreStore {
    /// Store the high score inside `data_dir`.
    pub fn in_dir(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(HIGH_SCORE_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HighScoreStore for FileHighScoreStore {
    fn load(&self) -> Result<i32, StoreError> {
        if !self.path.exists() {
            debug!("No high score file at {}", self.path.display());
            return Ok(0);
        }
        let json = fs::read_to_string(&self.path)?;
        let record: HighScoreRecord = serde_json::from_str(&json)?;
        info!(
            "Loaded high score {} from {}",
            record.highest_score,
            self.path.display()
        );
        Ok(record.highest_score)
    }

    fn save(&mut self, score: i32) -> Result<(), StoreError> {
        atomic_write_json(
            &self.path,
            &HighScoreRecord {
                highest_score: score,
            },
        )?;
        info!("Saved high score {} to {}", score, self.path.display());
        Ok(())
    }
}

/// In-memory store for tests and for running without a data directory.
#[derive(Debug, Default, Clone)]
pub struct MemoryHighScoreStore {
    pub value: Option<i32>,
}

impl HighScoreStore for MemoryHighScoreStore {
    fn load(&self) -> Result<i32, StoreError> {
        Ok(self.value.unwrap_or(0))
    }

    fn save(&mut self, score: i32) -> Result<(), StoreError> {
        self.value = Some(score);
        Ok(())
    }
}

//! # Data Directory
//!
//! Everything flagquiz writes lives under `~/.flagquiz/` (or
//! `FLAGQUIZ_DATA_DIR`). All writes go through `atomic_write_json` so a crash
//! mid-write never corrupts a file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Returns `~/.flagquiz/`, or `None` if there is no home directory.
pub fn default_data_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".flagquiz"))
}

/// Atomically write `data` as JSON to `path` (via `.tmp` + rename).
/// Creates the parent directory if needed.
pub fn atomic_write_json<T: Serialize>(path: &Path, data: &T) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp_path = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

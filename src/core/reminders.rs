//! # Practice Reminders
//!
//! A fixed batch of one-shot reminders at whole multiples of an interval
//! (seven reminders, one per day, by default). Rescheduling always clears
//! every pending reminder before adding the new batch, so launching the quiz
//! pushes the reminders forward instead of piling them up.
//!
//! The delivery mechanism sits behind `ReminderScheduler`. The terminal build
//! uses `FileReminderScheduler`, which keeps the pending batch in
//! `reminders.json` and reports the ones that came due while the player was
//! away on the next launch.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeDelta, Utc};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::storage::atomic_write_json;

pub const DEFAULT_REMINDER_COUNT: u32 = 7;
pub const DEFAULT_REMINDER_INTERVAL_HOURS: u32 = 24;
/// At most a week of daily reminders is ever pending.
pub const MAX_REMINDER_COUNT: u32 = 7;
/// Longest accepted gap between reminders (one year).
pub const MAX_REMINDER_INTERVAL_HOURS: u32 = 24 * 365;

const REMINDERS_FILE: &str = "reminders.json";
const REMINDER_TITLE: &str = "Guess the Flag";
const REMINDER_BODY: &str = "Ten new flags are waiting. Can you beat your high score?";

#[derive(Debug)]
pub enum ReminderError {
    /// The player has not allowed reminders.
    PermissionDenied,
    Io(io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for ReminderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReminderError::PermissionDenied => write!(f, "reminders are not allowed"),
            ReminderError::Io(e) => write!(f, "reminder I/O error: {e}"),
            ReminderError::Parse(e) => write!(f, "reminder parse error: {e}"),
        }
    }
}

impl std::error::Error for ReminderError {}

impl From<io::Error> for ReminderError {
    fn from(e: io::Error) -> Self {
        ReminderError::Io(e)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Reminder {
    pub id: Uuid,
    pub fire_at: DateTime<Utc>,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReminderSettings {
    pub enabled: bool,
    pub count: u32,
    pub interval: TimeDelta,
}

impl Default for ReminderSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            count: DEFAULT_REMINDER_COUNT,
            interval: TimeDelta::hours(DEFAULT_REMINDER_INTERVAL_HOURS as i64),
        }
    }
}

/// Builds `count` reminders firing at `now + k * interval` for `k = 1..=count`.
///
/// Stops early at the first fire time chrono cannot represent.
pub fn plan(now: DateTime<Utc>, count: u32, interval: TimeDelta) -> Vec<Reminder> {
    let batch: Vec<Reminder> = (1..=count)
        .map_while(|k| {
            let offset = interval.checked_mul(i32::try_from(k).ok()?)?;
            let fire_at = now.checked_add_signed(offset)?;
            Some(Reminder {
                id: Uuid::new_v4(),
                fire_at,
                title: REMINDER_TITLE.to_string(),
                body: REMINDER_BODY.to_string(),
            })
        })
        .collect();
    if batch.len() < count as usize {
        warn!(
            "Only {} of {} reminders fit in the calendar",
            batch.len(),
            count
        );
    }
    batch
}

/// Reminders whose time has come.
pub fn due(reminders: &[Reminder], now: DateTime<Utc>) -> Vec<&Reminder> {
    reminders.iter().filter(|r| r.fire_at <= now).collect()
}

pub trait ReminderScheduler {
    /// Checks that reminders may be delivered.
    fn authorize(&mut self) -> Result<(), ReminderError>;

    /// Drops every reminder that has not fired yet.
    fn clear_pending(&mut self) -> Result<(), ReminderError>;

    fn schedule(&mut self, reminders: &[Reminder]) -> Result<(), ReminderError>;

    fn pending(&self) -> Result<Vec<Reminder>, ReminderError>;
}

/// Replaces all pending reminders with a fresh batch. Returns how many were
/// scheduled.
pub fn reschedule<S: ReminderScheduler + ?Sized>(
    scheduler: &mut S,
    now: DateTime<Utc>,
    settings: &ReminderSettings,
) -> Result<usize, ReminderError> {
    scheduler.authorize()?;
    scheduler.clear_pending()?;
    let batch = plan(now, settings.count, settings.interval);
    scheduler.schedule(&batch)?;
    info!(
        "Scheduled {} reminders every {}h",
        batch.len(),
        settings.interval.num_hours()
    );
    Ok(batch.len())
}

#[derive(Serialize, Deserialize, Default, Debug)]
struct ReminderFile {
    reminders: Vec<Reminder>,
}

/// Keeps pending reminders in `<data_dir>/reminders.json`.
#[derive(Debug, Clone)]
pub struct FileReminderScheduler {
    path: PathBuf,
    allowed: bool,
}

impl FileReminderScheduler {
    pub fn in_dir(data_dir: &Path, allowed: bool) -> Self {
        Self {
            path: data_dir.join(REMINDERS_FILE),
            allowed,
        }
    }

    fn read(&self) -> Result<ReminderFile, ReminderError> {
        if !self.path.exists() {
            return Ok(ReminderFile::default());
        }
        let json = fs::read_to_string(&self.path)?;
        serde_json::from_str(&json).map_err(ReminderError::Parse)
    }
}

impl ReminderScheduler for FileReminderScheduler {
    fn authorize(&mut self) -> Result<(), ReminderError> {
        if self.allowed {
            Ok(())
        } else {
            Err(ReminderError::PermissionDenied)
        }
    }

    fn clear_pending(&mut self) -> Result<(), ReminderError> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
            debug!("Cleared pending reminders at {}", self.path.display());
        }
        Ok(())
    }

    fn schedule(&mut self, reminders: &[Reminder]) -> Result<(), ReminderError> {
        let mut file = self.read()?;
        file.reminders.extend_from_slice(reminders);
        file.reminders.sort_by_key(|r| r.fire_at);
        atomic_write_json(&self.path, &file)?;
        Ok(())
    }

    fn pending(&self) -> Result<Vec<Reminder>, ReminderError> {
        Ok(self.read()?.reminders)
    }
}

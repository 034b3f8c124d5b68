//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.flagquiz/config.toml`. If missing on first run, a
//! commented-out default is generated so players can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::TimeDelta;

use crate::ScoringRule;
use crate::core::country;
use crate::core::quiz::{CHOICES_PER_ROUND, QuizError};
use crate::core::reminders::{
    DEFAULT_REMINDER_COUNT, DEFAULT_REMINDER_INTERVAL_HOURS, MAX_REMINDER_COUNT,
    MAX_REMINDER_INTERVAL_HOURS, ReminderSettings,
};
use crate::core::storage::default_data_dir;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FlagQuizConfig {
    #[serde(default)]
    pub quiz: QuizConfig,
    #[serde(default)]
    pub reminders: RemindersConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct QuizConfig {
    pub scoring: Option<ScoringRule>,
    pub countries: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct RemindersConfig {
    pub enabled: Option<bool>,
    pub count: Option<u32>,
    pub interval_hours: Option<u32>,
}

/// Values taken from the command line (None / false = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub scoring: Option<ScoringRule>,
    pub seed: Option<u64>,
    pub no_reminders: bool,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub scoring: ScoringRule,
    /// Canonical catalog identifiers, in configured order.
    pub countries: Vec<String>,
    pub seed: Option<u64>,
    pub reminders: ReminderSettings,
    /// Where the high score and reminders live. None = keep them in memory.
    pub data_dir: Option<PathBuf>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    UnknownCountry(String),
    Pool(QuizError),
    /// A `[reminders]` value outside its accepted range.
    Reminders(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::UnknownCountry(id) => write!(f, "config: unknown country '{id}'"),
            ConfigError::Pool(e) => write!(f, "config: {e}"),
            ConfigError::Reminders(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.flagquiz/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    default_data_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.flagquiz/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `FlagQuizConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<FlagQuizConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(FlagQuizConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<FlagQuizConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(FlagQuizConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: FlagQuizConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# flagquiz configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [quiz]
# scoring = "penalizing"             # "penalizing" (wrong answer costs a point) or "lenient"
# countries = ["estonia", "france", "germany", "ireland", "italy", "monaco",
#              "nigeria", "poland", "russia", "spain", "uk", "us"]
# Also available: austria, belgium, hungary, lithuania, netherlands, romania

# [reminders]
# enabled = true
# count = 7                          # 1 to 7
# interval_hours = 24                # 1 to 8760 (one year)
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &FlagQuizConfig, cli: &CliOverrides) -> Result<ResolvedConfig, ConfigError> {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], reading environment variables through `env`.
pub fn resolve_with_env(
    config: &FlagQuizConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> Result<ResolvedConfig, ConfigError> {
    // Scoring: CLI → env → config → default
    let env_scoring = env("FLAGQUIZ_SCORING").and_then(|raw| {
        let parsed = ScoringRule::parse(&raw);
        if parsed.is_none() {
            warn!("Ignoring FLAGQUIZ_SCORING={raw:?}: expected \"lenient\" or \"penalizing\"");
        }
        parsed
    });
    let scoring = cli
        .scoring
        .or(env_scoring)
        .or(config.quiz.scoring)
        .unwrap_or_default();

    let countries = match config.quiz.countries {
        Some(ref ids) => resolve_countries(ids)?,
        None => country::DEFAULT_POOL.iter().map(|s| s.to_string()).collect(),
    };

    // Data dir: env → default
    let data_dir = env("FLAGQUIZ_DATA_DIR")
        .map(PathBuf::from)
        .or_else(default_data_dir);

    let reminders = resolve_reminders(&config.reminders, cli.no_reminders)?;

    Ok(ResolvedConfig {
        scoring,
        countries,
        seed: cli.seed,
        reminders,
        data_dir,
    })
}

/// Applies defaults to `[reminders]` and checks the values are in range.
fn resolve_reminders(
    config: &RemindersConfig,
    no_reminders: bool,
) -> Result<ReminderSettings, ConfigError> {
    let count = config.count.unwrap_or(DEFAULT_REMINDER_COUNT);
    if !(1..=MAX_REMINDER_COUNT).contains(&count) {
        return Err(ConfigError::Reminders(format!(
            "reminders.count must be between 1 and {MAX_REMINDER_COUNT}, got {count}"
        )));
    }

    let hours = config
        .interval_hours
        .unwrap_or(DEFAULT_REMINDER_INTERVAL_HOURS);
    if !(1..=MAX_REMINDER_INTERVAL_HOURS).contains(&hours) {
        return Err(ConfigError::Reminders(format!(
            "reminders.interval_hours must be between 1 and {MAX_REMINDER_INTERVAL_HOURS}, got {hours}"
        )));
    }

    Ok(ReminderSettings {
        enabled: !no_reminders && config.enabled.unwrap_or(true),
        count,
        interval: TimeDelta::hours(hours as i64),
    })
}

/// Maps configured names onto catalog ids and checks the pool is playable.
fn resolve_countries(ids: &[String]) -> Result<Vec<String>, ConfigError> {
    let mut resolved: Vec<String> = Vec::with_capacity(ids.len());
    for id in ids {
        let country =
            country::lookup(id).ok_or_else(|| ConfigError::UnknownCountry(id.clone()))?;
        if resolved.iter().any(|r| r == country.id) {
            return Err(ConfigError::Pool(QuizError::DuplicateCountry(
                country.id.to_string(),
            )));
        }
        resolved.push(country.id.to_string());
    }
    if resolved.len() < CHOICES_PER_ROUND {
        return Err(ConfigError::Pool(QuizError::PoolTooSmall(resolved.len())));
    }
    Ok(resolved)
}

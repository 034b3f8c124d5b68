//! flagquiz library exports for testing

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// How a wrong answer affects the running score.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringRule {
    /// Wrong answers leave the score unchanged.
    Lenient,
    /// Wrong answers cost one point.
    #[default]
    Penalizing,
}

impl ScoringRule {
    /// Score change for a wrong answer.
    pub fn wrong_answer_delta(self) -> i32 {
        match self {
            ScoringRule::Lenient => 0,
            ScoringRule::Penalizing => -1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoringRule::Lenient => "lenient",
            ScoringRule::Penalizing => "penalizing",
        }
    }

    /// Parses the names accepted in config files and env vars.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lenient" => Some(ScoringRule::Lenient),
            "penalizing" => Some(ScoringRule::Penalizing),
            _ => None,
        }
    }
}

//! # Application State
//!
//! Core business state for flagquiz. This module contains domain logic only,
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── quiz: QuizState              // pool, current round, score, high score
//! ├── dialog: Option<Dialog>       // feedback waiting to be dismissed
//! └── status_message: String       // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::core::config::ResolvedConfig;
use crate::core::quiz::{QuizError, QuizState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    /// Verdict for a single round. Dismissing it deals the next round.
    RoundResult,
    /// Last round of a set. Dismissing it resets the score and deals a new round.
    SetComplete,
    /// Informational score readout. Dismissing it changes nothing.
    Score,
}

/// A modal message with a single button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub kind: DialogKind,
    pub title: String,
    pub message: Option<String>,
    pub button: String,
}

pub struct App {
    pub quiz: QuizState,
    pub dialog: Option<Dialog>,
    pub status_message: String,
}

impl App {
    pub fn new(quiz: QuizState) -> Self {
        Self {
            quiz,
            dialog: None,
            status_message: String::from("Welcome to Guess the Flag!"),
        }
    }

    /// Builds the quiz from resolved settings. A configured seed makes every
    /// round reproducible; otherwise the OS seeds the generator.
    pub fn from_config(config: &ResolvedConfig, high_score: i32) -> Result<Self, QuizError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let quiz = QuizState::new(config.countries.clone(), config.scoring, high_score, rng)?;
        Ok(Self::new(quiz))
    }
}

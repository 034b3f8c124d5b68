//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::ScoringRule;
use crate::core::country::DEFAULT_POOL;
use crate::core::quiz::QuizState;
use crate::core::state::App;

/// The default country pool as owned strings.
pub fn test_pool() -> Vec<String> {
    DEFAULT_POOL.iter().map(|s| s.to_string()).collect()
}

/// A quiz over the default pool with a fixed seed.
pub fn seeded_quiz(scoring: ScoringRule, high_score: i32, seed: u64) -> QuizState {
    QuizState::new(test_pool(), scoring, high_score, StdRng::seed_from_u64(seed))
        .expect("default pool is valid")
}

/// Creates a test App: lenient scoring, no high score, fixed seed.
pub fn test_app() -> App {
    test_app_with(ScoringRule::Lenient, 0)
}

pub fn test_app_with(scoring: ScoringRule, high_score: i32) -> App {
    App::new(seeded_quiz(scoring, high_score, 1234))
}

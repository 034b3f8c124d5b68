//! # Quiz State
//!
//! Rounds, scoring and set bookkeeping for the flag quiz. Owned by `App`,
//! mutated only through `new_round`, `submit_guess` and `acknowledge`.
//!
//! ```text
//!   new_round() ──► Answering ──submit_guess()──► AwaitingAck
//!        ▲                                             │
//!        └──────────────── acknowledge() ◄─────────────┘
//!                   (resets score + counter after a full set)
//! ```
//!
//! The random source is a type parameter so tests can run with a seeded
//! `StdRng` and get the same rounds every time.

use std::fmt;

use log::debug;
use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::ScoringRule;

/// Flags shown per round.
pub const CHOICES_PER_ROUND: usize = 3;

/// Rounds in a set; the high score is checked when a set completes.
pub const SET_LENGTH: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    PoolTooSmall(usize),
    DuplicateCountry(String),
    ChoiceOutOfRange(usize),
    AwaitingAcknowledgement,
}

impl fmt::Display for QuizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizError::PoolTooSmall(n) => write!(
                f,
                "country pool needs at least {CHOICES_PER_ROUND} countries, got {n}"
            ),
            QuizError::DuplicateCountry(id) => write!(f, "country listed twice: {id}"),
            QuizError::ChoiceOutOfRange(i) => {
                write!(f, "choice {i} is out of range (0..{CHOICES_PER_ROUND})")
            }
            QuizError::AwaitingAcknowledgement => {
                write!(f, "previous answer has not been acknowledged")
            }
        }
    }
}

impl std::error::Error for QuizError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
}

/// Emitted when the last round of a set has been answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetSummary {
    pub score: i32,
    pub previous_high_score: i32,
    pub new_high_score: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    pub verdict: Verdict,
    /// Identifier of the country whose flag was picked.
    pub chosen: String,
    /// Score after applying the verdict.
    pub score: i32,
    pub set: Option<SetSummary>,
}

impl GuessOutcome {
    pub fn is_correct(&self) -> bool {
        self.verdict == Verdict::Correct
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Answering,
    AwaitingAck { set_complete: bool },
}

pub struct QuizState<R: Rng = StdRng> {
    pool: Vec<String>,
    correct_index: usize,
    score: i32,
    rounds_answered: u32,
    high_score: i32,
    scoring: ScoringRule,
    phase: Phase,
    rng: R,
}

impl<R: Rng> QuizState<R> {
    /// Builds a quiz over `pool` and deals the first round.
    ///
    /// The pool must hold at least three distinct identifiers.
    pub fn new(
        pool: Vec<String>,
        scoring: ScoringRule,
        high_score: i32,
        rng: R,
    ) -> Result<Self, QuizError> {
        if pool.len() < CHOICES_PER_ROUND {
            return Err(QuizError::PoolTooSmall(pool.len()));
        }
        for (i, id) in pool.iter().enumerate() {
            if pool[..i].contains(id) {
                return Err(QuizError::DuplicateCountry(id.clone()));
            }
        }

        let mut quiz = Self {
            pool,
            correct_index: 0,
            score: 0,
            rounds_answered: 0,
            high_score,
            scoring,
            phase: Phase::Answering,
            rng,
        };
        quiz.new_round();
        Ok(quiz)
    }

    /// Reshuffles the pool and picks a new correct answer among the first
    /// three countries.
    pub fn new_round(&mut self) {
        self.pool.shuffle(&mut self.rng);
        self.correct_index = self.rng.random_range(0..CHOICES_PER_ROUND);
        self.phase = Phase::Answering;
        debug!(
            "New round: choices={:?}, correct={}",
            self.choices(),
            self.correct_index
        );
    }

    /// Scores a guess. The round stays on screen until `acknowledge()`.
    pub fn submit_guess(&mut self, choice_index: usize) -> Result<GuessOutcome, QuizError> {
        if choice_index >= CHOICES_PER_ROUND {
            return Err(QuizError::ChoiceOutOfRange(choice_index));
        }
        if self.phase != Phase::Answering {
            return Err(QuizError::AwaitingAcknowledgement);
        }

        let verdict = if choice_index == self.correct_index {
            self.score += 1;
            Verdict::Correct
        } else {
            self.score += self.scoring.wrong_answer_delta();
            Verdict::Incorrect
        };
        self.rounds_answered += 1;

        let set = if self.rounds_answered >= SET_LENGTH {
            let previous_high_score = self.high_score;
            let new_high_score = self.score > previous_high_score;
            if new_high_score {
                self.high_score = self.score;
            }
            Some(SetSummary {
                score: self.score,
                previous_high_score,
                new_high_score,
            })
        } else {
            None
        };

        self.phase = Phase::AwaitingAck {
            set_complete: set.is_some(),
        };

        Ok(GuessOutcome {
            verdict,
            chosen: self.pool[choice_index].clone(),
            score: self.score,
            set,
        })
    }

    /// Closes the answered round and deals the next one. Returns `true` when
    /// this also closed a set (score and counter are back to 0).
    pub fn acknowledge(&mut self) -> bool {
        let set_complete = matches!(self.phase, Phase::AwaitingAck { set_complete: true });
        if set_complete {
            self.score = 0;
            self.rounds_answered = 0;
        }
        self.new_round();
        set_complete
    }

    /// The three countries on offer this round.
    pub fn choices(&self) -> &[String] {
        &self.pool[..CHOICES_PER_ROUND]
    }

    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    /// Country the player is asked to find.
    pub fn target(&self) -> &str {
        &self.pool[self.correct_index]
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn rounds_answered(&self) -> u32 {
        self.rounds_answered
    }

    pub fn high_score(&self) -> i32 {
        self.high_score
    }

    pub fn scoring(&self) -> ScoringRule {
        self.scoring
    }

    pub fn is_awaiting_ack(&self) -> bool {
        matches!(self.phase, Phase::AwaitingAck { .. })
    }
}

//! # Core Application Logic
//!
//! This module contains flagquiz's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • QuizState (rounds)   │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No UI. Pure reducer.   │
//!                    └───────────┬─────────────┘
//!                                │ Effect
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │ High score │      │ Reminders  │
//!     │  Adapter   │      │   store    │      │ scheduler  │
//!     │ (ratatui)  │      │  (JSON)    │      │  (JSON)    │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`quiz`]: `QuizState`, rounds, scoring and set bookkeeping
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`country`]: Country catalog and flag geometry
//! - [`high_score`]: Persisted high score
//! - [`reminders`]: Practice reminder planning and scheduling
//! - [`config`]: Config file, env and CLI resolution
//! - [`storage`]: Data directory and atomic JSON writes

pub mod action;
pub mod config;
pub mod country;
pub mod high_score;
pub mod quiz;
pub mod reminders;
pub mod state;
pub mod storage;

//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 500ms between polls and only
//! redraws after an event (including terminal resize).
//!
//! ## Effects
//!
//! `update()` never touches the disk. When it returns
//! `Effect::SaveHighScore` the loop writes the score through the
//! `HighScoreStore`; failures end up in the status line and never stop the
//! game.

mod component;
mod components;
mod event;
mod ui;

use log::{info, warn};
use std::io::stdout;
use std::time::Duration;

use chrono::{DateTime, Utc};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::high_score::{FileHighScoreStore, HighScoreStore, MemoryHighScoreStore};
use crate::core::reminders::{
    self, FileReminderScheduler, ReminderError, ReminderScheduler, ReminderSettings,
};
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{BoardEvent, FlagBoardState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
#[derive(Debug, Default)]
pub struct TuiState {
    pub board: FlagBoardState,
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

/// Decide what a terminal event means given the current state.
///
/// Dialog open: Enter, Space, Esc or a click dismisses it.
/// Otherwise the board handles navigation and picks; Esc quits.
pub fn route_event(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::Quit | TuiEvent::ForceQuit => return Some(Action::Quit),
        TuiEvent::Resize => return None,
        _ => {}
    }

    if app.dialog.is_some() {
        return match event {
            TuiEvent::Submit | TuiEvent::Escape | TuiEvent::MouseClick(..) => {
                Some(Action::Acknowledge)
            }
            _ => None,
        };
    }

    match event {
        TuiEvent::Escape => Some(Action::Quit),
        TuiEvent::ShowScore => Some(Action::ShowScore),
        _ => tui
            .board
            .handle_event(event)
            .map(|BoardEvent::Choose(index)| Action::Guess(index)),
    }
}

/// Persist a new high score, reporting the outcome in the status line.
pub fn save_high_score(store: &mut dyn HighScoreStore, app: &mut App, score: i32) {
    match store.save(score) {
        Ok(()) => {
            app.status_message = format!("New high score saved: {score}");
        }
        Err(e) => {
            warn!("Failed to save high score: {}", e);
            app.status_message = format!("Could not save high score: {e}");
        }
    }
}

/// Greets the player if a reminder fired while they were away, then replaces
/// the pending reminders with a fresh batch. Returns a status message, if
/// there is something to tell.
pub fn refresh_reminders(
    scheduler: &mut dyn ReminderScheduler,
    settings: &ReminderSettings,
    now: DateTime<Utc>,
) -> Option<String> {
    let came_due = match scheduler.pending() {
        Ok(pending) => !reminders::due(&pending, now).is_empty(),
        Err(e) => {
            warn!("Could not read pending reminders: {}", e);
            false
        }
    };

    match reminders::reschedule(scheduler, now, settings) {
        Ok(_) if came_due => Some(String::from("Welcome back! Time for some flag practice.")),
        Ok(_) => None,
        Err(ReminderError::PermissionDenied) => {
            info!("Reminders not scheduled: permission denied");
            Some(String::from("Reminders are off. Enable them in config.toml"))
        }
        Err(e) => {
            warn!("Failed to schedule reminders: {}", e);
            Some(format!("Reminders unavailable: {e}"))
        }
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut store: Box<dyn HighScoreStore> = match config.data_dir {
        Some(ref dir) => Box::new(FileHighScoreStore::in_dir(dir)),
        None => {
            warn!("No data directory, high score will not persist");
            Box::new(MemoryHighScoreStore::default())
        }
    };

    let mut notice = None;
    let high_score = store.load().unwrap_or_else(|e| {
        warn!("Failed to load high score: {}", e);
        notice = Some(format!("High score unavailable: {e}"));
        0
    });

    let mut app = App::from_config(&config, high_score).map_err(std::io::Error::other)?;

    if let Some(ref dir) = config.data_dir {
        let mut scheduler = FileReminderScheduler::in_dir(dir, config.reminders.enabled);
        if let Some(message) = refresh_reminders(&mut scheduler, &config.reminders, Utc::now()) {
            app.status_message = message;
        }
    }
    if let Some(message) = notice {
        app.status_message = message;
    }

    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(Duration::from_millis(500));
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let Some(action) = route_event(&app, &mut tui, &event) else {
                continue;
            };
            match update(&mut app, action) {
                Effect::Quit => {
                    should_quit = true;
                    break;
                }
                Effect::SaveHighScore(score) => {
                    save_high_score(store.as_mut(), &mut app, score);
                }
                Effect::None => {}
            }
        }

        if should_quit {
            break;
        }
    }

    info!(
        "Exiting: score {}, high score {}",
        app.quiz.score(),
        app.quiz.high_score()
    );
    ratatui::restore();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScoringRule;
    use crate::core::high_score::StoreError;
    use crate::core::quiz::SET_LENGTH;
    use crate::test_support::{test_app, test_app_with};
    use chrono::{TimeDelta, TimeZone};
    use tempfile::TempDir;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 10, 18, 30, 0).unwrap()
    }

    struct FailingStore;

    impl HighScoreStore for FailingStore {
        fn load(&self) -> Result<i32, StoreError> {
            Ok(0)
        }

        fn save(&mut self, _score: i32) -> Result<(), StoreError> {
            Err(StoreError::Io(std::io::Error::other("disk full")))
        }
    }

    #[test]
    fn test_route_number_key_guesses() {
        let app = test_app();
        let mut tui = TuiState::new();
        assert_eq!(
            route_event(&app, &mut tui, &TuiEvent::Choose(1)),
            Some(Action::Guess(1))
        );
    }

    #[test]
    fn test_route_navigation_then_submit() {
        let app = test_app();
        let mut tui = TuiState::new();
        assert_eq!(route_event(&app, &mut tui, &TuiEvent::Right), None);
        assert_eq!(route_event(&app, &mut tui, &TuiEvent::Right), None);
        assert_eq!(
            route_event(&app, &mut tui, &TuiEvent::Submit),
            Some(Action::Guess(2))
        );
    }

    #[test]
    fn test_route_with_dialog_open_acknowledges() {
        let mut app = test_app();
        update(&mut app, Action::Guess(0));
        let mut tui = TuiState::new();
        assert_eq!(route_event(&app, &mut tui, &TuiEvent::Choose(2)), None);
        assert_eq!(route_event(&app, &mut tui, &TuiEvent::ShowScore), None);
        assert_eq!(
            route_event(&app, &mut tui, &TuiEvent::Escape),
            Some(Action::Acknowledge)
        );
        assert_eq!(
            route_event(&app, &mut tui, &TuiEvent::Submit),
            Some(Action::Acknowledge)
        );
        assert_eq!(
            route_event(&app, &mut tui, &TuiEvent::Quit),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_route_escape_quits_without_dialog() {
        let app = test_app();
        let mut tui = TuiState::new();
        assert_eq!(
            route_event(&app, &mut tui, &TuiEvent::Escape),
            Some(Action::Quit)
        );
        assert_eq!(
            route_event(&app, &mut tui, &TuiEvent::ShowScore),
            Some(Action::ShowScore)
        );
        assert_eq!(route_event(&app, &mut tui, &TuiEvent::Resize), None);
    }

    #[test]
    fn test_full_set_persists_high_score() {
        let dir = TempDir::new().unwrap();
        let mut store = FileHighScoreStore::in_dir(dir.path());
        let mut app = test_app_with(ScoringRule::Lenient, 0);
        let mut tui = TuiState::new();

        for _ in 0..SET_LENGTH {
            let pick = TuiEvent::Choose(app.quiz.correct_index());
            let action = route_event(&app, &mut tui, &pick).unwrap();
            if let Effect::SaveHighScore(score) = update(&mut app, action) {
                save_high_score(&mut store, &mut app, score);
            }
            let ack = route_event(&app, &mut tui, &TuiEvent::Submit).unwrap();
            update(&mut app, ack);
        }

        assert_eq!(store.load().unwrap(), 10);
        assert_eq!(app.status_message, "New set: ten more flags");
        assert_eq!(app.quiz.score(), 0);
    }

    #[test]
    fn test_save_failure_is_reported_not_fatal() {
        let mut app = test_app();
        save_high_score(&mut FailingStore, &mut app, 4);
        assert!(app.status_message.contains("Could not save high score"));
        assert!(app.status_message.contains("disk full"));
    }

    #[test]
    fn test_refresh_reminders_first_launch_is_silent() {
        let dir = TempDir::new().unwrap();
        let mut scheduler = FileReminderScheduler::in_dir(dir.path(), true);
        let message = refresh_reminders(&mut scheduler, &ReminderSettings::default(), now());
        assert_eq!(message, None);
        assert_eq!(scheduler.pending().unwrap().len(), 7);
    }

    #[test]
    fn test_refresh_reminders_greets_after_due_reminder() {
        let dir = TempDir::new().unwrap();
        let mut scheduler = FileReminderScheduler::in_dir(dir.path(), true);
        let settings = ReminderSettings::default();
        refresh_reminders(&mut scheduler, &settings, now());

        let two_days_later = now() + TimeDelta::days(2);
        let message = refresh_reminders(&mut scheduler, &settings, two_days_later);
        assert!(message.unwrap().starts_with("Welcome back!"));

        let pending = scheduler.pending().unwrap();
        assert_eq!(pending.len(), 7);
        assert!(reminders::due(&pending, two_days_later).is_empty());
    }

    #[test]
    fn test_refresh_reminders_permission_denied() {
        let dir = TempDir::new().unwrap();
        let mut scheduler = FileReminderScheduler::in_dir(dir.path(), false);
        let message = refresh_reminders(&mut scheduler, &ReminderSettings::default(), now());
        assert_eq!(
            message.as_deref(),
            Some("Reminders are off. Enable them in config.toml")
        );
        assert!(scheduler.pending().unwrap().is_empty());
    }
}

//! # Actions
//!
//! Everything that can happen in flagquiz becomes an `Action`.
//! Player picks the second flag? That's `Action::Guess(1)`.
//! Player dismisses the feedback? That's `Action::Acknowledge`.
//!
//! The `update()` function takes the current state and an action,
//! mutates the state, and returns an `Effect` describing any I/O the
//! caller should perform. No side effects here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};

use crate::core::country;
use crate::core::quiz::{GuessOutcome, Verdict};
use crate::core::state::{App, Dialog, DialogKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The player picked the flag at this index.
    Guess(usize),
    /// The player dismissed the open dialog.
    Acknowledge,
    /// Show the running score without answering.
    ShowScore,
    Quit,
}

/// I/O the caller should perform after `update()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// A set beat the stored high score; persist the new value.
    SaveHighScore(i32),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Guess(index) => {
            if app.dialog.is_some() {
                debug!("Ignoring guess while a dialog is open");
                return Effect::None;
            }
            match app.quiz.submit_guess(index) {
                Ok(outcome) => {
                    let effect = match outcome.set {
                        Some(ref set) if set.new_high_score => Effect::SaveHighScore(set.score),
                        _ => Effect::None,
                    };
                    app.dialog = Some(feedback_dialog(&outcome));
                    effect
                }
                Err(e) => {
                    warn!("Guess rejected: {}", e);
                    app.status_message = format!("Guess rejected: {e}");
                    Effect::None
                }
            }
        }
        Action::Acknowledge => {
            let Some(dialog) = app.dialog.take() else {
                return Effect::None;
            };
            if dialog.kind != DialogKind::Score && app.quiz.acknowledge() {
                info!("Set closed, starting a new one");
                app.status_message = String::from("New set: ten more flags");
            }
            Effect::None
        }
        Action::ShowScore => {
            if app.dialog.is_none() {
                app.dialog = Some(Dialog {
                    kind: DialogKind::Score,
                    title: format!("Your score is {}", app.quiz.score()),
                    message: None,
                    button: String::from("OK"),
                });
            }
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

fn feedback_dialog(outcome: &GuessOutcome) -> Dialog {
    if let Some(ref set) = outcome.set {
        let (message, button) = if set.new_high_score {
            (
                format!("Your new score {} beat the previous high score!", set.score),
                "OK",
            )
        } else {
            (format!("Your final score is {}", set.score), "Continue")
        };
        return Dialog {
            kind: DialogKind::SetComplete,
            title: String::from("Congratulations!"),
            message: Some(message),
            button: button.to_string(),
        };
    }

    let title = match outcome.verdict {
        Verdict::Correct => String::from("Correct"),
        Verdict::Incorrect => format!(
            "Wrong! That's the flag of {}",
            country::shouted_name(&outcome.chosen)
        ),
    };
    Dialog {
        kind: DialogKind::RoundResult,
        title,
        message: Some(format!("Your score is {}.", outcome.score)),
        button: String::from("Continue"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScoringRule;
    use crate::core::quiz::SET_LENGTH;
    use crate::test_support::{test_app, test_app_with};

    fn wrong(app: &App) -> usize {
        (app.quiz.correct_index() + 1) % 3
    }

    #[test]
    fn test_correct_guess_opens_round_dialog() {
        let mut app = test_app();
        let index = app.quiz.correct_index();
        let effect = update(&mut app, Action::Guess(index));
        assert_eq!(effect, Effect::None);
        let dialog = app.dialog.as_ref().unwrap();
        assert_eq!(dialog.kind, DialogKind::RoundResult);
        assert_eq!(dialog.title, "Correct");
        assert_eq!(dialog.message.as_deref(), Some("Your score is 1."));
        assert_eq!(dialog.button, "Continue");
    }

    #[test]
    fn test_wrong_guess_names_the_chosen_country() {
        let mut app = test_app_with(ScoringRule::Penalizing, 0);
        let index = wrong(&app);
        let chosen = country::shouted_name(&app.quiz.choices()[index]);
        update(&mut app, Action::Guess(index));
        let dialog = app.dialog.as_ref().unwrap();
        assert_eq!(dialog.title, format!("Wrong! That's the flag of {chosen}"));
        assert_eq!(dialog.message.as_deref(), Some("Your score is -1."));
    }

    #[test]
    fn test_guess_ignored_while_dialog_open() {
        let mut app = test_app();
        update(&mut app, Action::Guess(0));
        let before = app.dialog.clone();
        update(&mut app, Action::Guess(1));
        assert_eq!(app.quiz.rounds_answered(), 1);
        assert_eq!(app.dialog, before);
    }

    #[test]
    fn test_out_of_range_guess_sets_status() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Guess(5)), Effect::None);
        assert!(app.dialog.is_none());
        assert!(app.status_message.starts_with("Guess rejected"));
    }

    #[test]
    fn test_acknowledge_deals_next_round() {
        let mut app = test_app();
        update(&mut app, Action::Guess(0));
        update(&mut app, Action::Acknowledge);
        assert!(app.dialog.is_none());
        assert!(!app.quiz.is_awaiting_ack());
        assert_eq!(app.quiz.rounds_answered(), 1);
    }

    #[test]
    fn test_acknowledge_without_dialog_is_noop() {
        let mut app = test_app();
        let choices = app.quiz.choices().to_vec();
        assert_eq!(update(&mut app, Action::Acknowledge), Effect::None);
        assert_eq!(app.quiz.choices(), choices.as_slice());
    }

    #[test]
    fn test_show_score_does_not_advance_round() {
        let mut app = test_app();
        let choices = app.quiz.choices().to_vec();
        update(&mut app, Action::ShowScore);
        let dialog = app.dialog.as_ref().unwrap();
        assert_eq!(dialog.kind, DialogKind::Score);
        assert_eq!(dialog.title, "Your score is 0");
        assert!(dialog.message.is_none());

        update(&mut app, Action::Acknowledge);
        assert!(app.dialog.is_none());
        assert_eq!(app.quiz.choices(), choices.as_slice());
    }

    #[test]
    fn test_new_high_score_emits_save_effect() {
        let mut app = test_app_with(ScoringRule::Lenient, 2);
        let mut last = Effect::None;
        for _ in 0..SET_LENGTH {
            let index = app.quiz.correct_index();
            last = update(&mut app, Action::Guess(index));
            if app.dialog.as_ref().map(|d| d.kind) == Some(DialogKind::RoundResult) {
                update(&mut app, Action::Acknowledge);
            }
        }
        assert_eq!(last, Effect::SaveHighScore(10));
        let dialog = app.dialog.as_ref().unwrap();
        assert_eq!(dialog.kind, DialogKind::SetComplete);
        assert_eq!(dialog.title, "Congratulations!");
        assert_eq!(
            dialog.message.as_deref(),
            Some("Your new score 10 beat the previous high score!")
        );
        assert_eq!(dialog.button, "OK");

        update(&mut app, Action::Acknowledge);
        assert_eq!(app.quiz.score(), 0);
        assert_eq!(app.quiz.rounds_answered(), 0);
        assert_eq!(app.quiz.high_score(), 10);
        assert_eq!(app.status_message, "New set: ten more flags");
    }

    #[test]
    fn test_set_below_high_score_has_no_effect() {
        let mut app = test_app_with(ScoringRule::Lenient, 5);
        let mut last = Effect::None;
        for round in 0..SET_LENGTH {
            let index = if round < 3 {
                app.quiz.correct_index()
            } else {
                wrong(&app)
            };
            last = update(&mut app, Action::Guess(index));
            if round + 1 < SET_LENGTH {
                update(&mut app, Action::Acknowledge);
            }
        }
        assert_eq!(last, Effect::None);
        let dialog = app.dialog.as_ref().unwrap();
        assert_eq!(dialog.message.as_deref(), Some("Your final score is 3"));
        assert_eq!(dialog.button, "Continue");
        assert_eq!(app.quiz.high_score(), 5);
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}

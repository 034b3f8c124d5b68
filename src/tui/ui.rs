use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::core::quiz::SET_LENGTH;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{DialogView, FlagBoard, HelpBar, Prompt, TitleBar};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(4), Min(6), Length(1)]);
    let [title_area, prompt_area, board_area, help_area] = layout.areas(frame.area());

    let quiz = &app.quiz;
    TitleBar::new(
        quiz.rounds_answered(),
        SET_LENGTH,
        quiz.score(),
        quiz.high_score(),
        app.status_message.clone(),
    )
    .render(frame, title_area);

    Prompt::new(quiz.target()).render(frame, prompt_area);

    FlagBoard::new(&mut tui.board, quiz.choices(), app.dialog.is_some())
        .render(frame, board_area);

    HelpBar::new(app.dialog.is_some(), quiz.scoring()).render(frame, help_area);

    if let Some(ref dialog) = app.dialog {
        DialogView::new(dialog).render(frame, frame.area());
    }
}

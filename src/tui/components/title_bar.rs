//! # TitleBar Component
//!
//! Top status bar: round progress, score, best score and the latest status
//! message.
//!
//! Purely presentational. It receives all data as props and keeps no state:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(2, 10, 1, 5, "Welcome".to_string());
//! title_bar.render(frame, area);
//! ```
//!
//! The text degrades on narrow terminals: the status message is dropped
//! first, then the best score, so progress and score stay visible.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

pub struct TitleBar {
    /// Rounds answered in the current set
    pub round: u32,
    pub set_length: u32,
    pub score: i32,
    pub high_score: i32,
    pub status_message: String,
}

impl TitleBar {
    pub fn new(
        round: u32,
        set_length: u32,
        score: i32,
        high_score: i32,
        status_message: String,
    ) -> Self {
        Self {
            round,
            set_length,
            score,
            high_score,
            status_message,
        }
    }

    /// Title text that fits in `width` columns.
    fn text(&self, width: usize) -> String {
        let core = format!(
            "Guess the Flag | Round {}/{} | Score: {}",
            self.round, self.set_length, self.score
        );
        let with_best = format!("{core} | Best: {}", self.high_score);
        let full = if self.status_message.is_empty() {
            with_best.clone()
        } else {
            format!("{with_best} | {}", self.status_message)
        };

        [full, with_best, core]
            .into_iter()
            .find(|candidate| candidate.width() <= width)
            .unwrap_or_else(|| "Guess the Flag".to_string())
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let text = self.text(area.width as usize);
        let line = Line::from(Span::styled(
            text,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(line, area);
    }
}

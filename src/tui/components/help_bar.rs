//! # HelpBar Component
//!
//! Bottom line with key hints. Switches to dialog hints while a dialog is
//! open and shows the active scoring rule on the right.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;

use crate::ScoringRule;
use crate::tui::component::Component;

pub struct HelpBar {
    pub dialog_open: bool,
    pub scoring: ScoringRule,
}

impl HelpBar {
    pub fn new(dialog_open: bool, scoring: ScoringRule) -> Self {
        Self {
            dialog_open,
            scoring,
        }
    }

    fn hints(&self) -> &'static str {
        if self.dialog_open {
            " Enter Continue  q Quit "
        } else {
            " 1-3 Pick  ←/→ Move  Enter Choose  s Score  q Quit "
        }
    }
}

impl Component for HelpBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let rule = format!(" scoring: {} ", self.scoring.label());
        let [left, right] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(rule.len() as u16)])
                .areas(area);
        let style = Style::default().fg(Color::DarkGray);
        frame.render_widget(Line::styled(self.hints(), style), left);
        frame.render_widget(Line::styled(rule, style).right_aligned(), right);
    }
}

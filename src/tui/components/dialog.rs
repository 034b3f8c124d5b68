//! # Dialog Component
//!
//! Centered modal with a title, an optional message and a single button.
//! Drawn over the board after every guess and for the score readout;
//! Enter, Space, Esc or a click dismisses it.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::state::{Dialog, DialogKind};
use crate::tui::component::Component;

const MIN_WIDTH: u16 = 36;
const MAX_WIDTH: u16 = 64;

pub struct DialogView<'a> {
    dialog: &'a Dialog,
}

impl<'a> DialogView<'a> {
    pub fn new(dialog: &'a Dialog) -> Self {
        Self { dialog }
    }

    /// Body lines: wrapped title, blank line, wrapped message.
    fn body_lines(&self, text_width: usize) -> Vec<Line<'static>> {
        let title_style = match self.dialog.kind {
            DialogKind::RoundResult if self.dialog.title.starts_with("Wrong") => {
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
            }
            DialogKind::RoundResult => Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            DialogKind::SetComplete => Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            DialogKind::Score => Style::default().add_modifier(Modifier::BOLD),
        };

        let mut lines: Vec<Line<'static>> = textwrap::wrap(&self.dialog.title, text_width)
            .into_iter()
            .map(|l| Line::from(Span::styled(l.into_owned(), title_style)))
            .collect();

        if let Some(ref message) = self.dialog.message {
            lines.push(Line::default());
            lines.extend(
                textwrap::wrap(message, text_width)
                    .into_iter()
                    .map(|l| Line::from(l.into_owned())),
            );
        }
        lines
    }

    /// Overlay rectangle for this dialog inside `area`.
    pub fn overlay_area(&self, area: Rect) -> Rect {
        let longest = self
            .dialog
            .message
            .as_deref()
            .map(UnicodeWidthStr::width)
            .unwrap_or(0)
            .max(self.dialog.title.width());
        // borders + horizontal padding
        let width = (longest as u16)
            .saturating_add(6)
            .clamp(MIN_WIDTH, MAX_WIDTH)
            .min(area.width);
        let text_width = width.saturating_sub(6).max(1) as usize;
        // body + blank + button + borders
        let height = (self.body_lines(text_width).len() as u16 + 4).min(area.height);

        let [row] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(area);
        let [overlay] = Layout::horizontal([Constraint::Length(width)])
            .flex(Flex::Center)
            .areas(row);
        overlay
    }
}

impl Component for DialogView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = self.overlay_area(area);
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Gray))
            .padding(Padding::horizontal(2));
        let inner = block.inner(overlay);
        frame.render_widget(block, overlay);

        let [body_area, button_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

        let body = Paragraph::new(self.body_lines(inner.width.max(1) as usize))
            .alignment(Alignment::Center);
        frame.render_widget(body, body_area);

        let button = Paragraph::new(Line::from(Span::styled(
            format!("[ {} ]", self.dialog.button),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(button, button_area);
    }
}

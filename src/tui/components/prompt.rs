//! # Prompt Component
//!
//! "Tap the flag of" above the target country's name.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::country;
use crate::tui::component::Component;

pub struct Prompt {
    pub target: String,
}

impl Prompt {
    pub fn new(target: &str) -> Self {
        Self {
            target: target.to_string(),
        }
    }
}

impl Component for Prompt {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::default(),
            Line::from(Span::styled(
                "Tap the flag of",
                Style::default().fg(Color::Gray),
            )),
            Line::from(Span::styled(
                country::shouted_name(&self.target),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
        ];
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_prompt_shows_shouted_name() {
        let backend = TestBackend::new(40, 4);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut prompt = Prompt::new("uk");
        terminal
            .draw(|f| {
                prompt.render(f, f.area());
            })
            .unwrap();
        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("Tap the flag of"));
        assert!(text.contains("UNITED KINGDOM"));
    }
}

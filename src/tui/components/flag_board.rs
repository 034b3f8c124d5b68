//! # Flag Board Component
//!
//! The three flags of the current round, side by side. Each flag is drawn
//! with upper-half-block characters (`▀`) so one terminal cell holds two
//! vertically stacked "pixels", which keeps stripes roughly square.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `FlagBoardState` lives in `TuiState` (selection, last drawn areas)
//! - `FlagBoard` is created each frame with borrowed state and props

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Widget};

use crate::core::country::{self, FlagPattern, Rgb};
use crate::core::quiz::CHOICES_PER_ROUND;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Width-to-height ratio of a drawn flag, in terminal cells. Cells are about
/// twice as tall as wide and hold two pixels, so 3 cells wide per row ≈ 3:2.
const CELLS_WIDE_PER_ROW: u16 = 3;

/// Events emitted by the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardEvent {
    Choose(usize),
}

/// Persistent state for the flag board.
#[derive(Debug, Default)]
pub struct FlagBoardState {
    pub selected: usize,
    /// Where each flag card was drawn last frame, for mouse hit testing.
    pub card_areas: [Rect; CHOICES_PER_ROUND],
}

impl FlagBoardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the card containing the screen position, if any.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<usize> {
        let position = Position::new(column, row);
        self.card_areas
            .iter()
            .position(|area| area.contains(position))
    }
}

impl EventHandler for FlagBoardState {
    type Event = BoardEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<BoardEvent> {
        match *event {
            TuiEvent::Left => {
                self.selected = (self.selected + CHOICES_PER_ROUND - 1) % CHOICES_PER_ROUND;
                None
            }
            TuiEvent::Right => {
                self.selected = (self.selected + 1) % CHOICES_PER_ROUND;
                None
            }
            TuiEvent::Submit => Some(BoardEvent::Choose(self.selected)),
            TuiEvent::Choose(index) if index < CHOICES_PER_ROUND => {
                self.selected = index;
                Some(BoardEvent::Choose(index))
            }
            TuiEvent::MouseClick(column, row) => {
                let index = self.hit_test(column, row)?;
                self.selected = index;
                Some(BoardEvent::Choose(index))
            }
            _ => None,
        }
    }
}

/// Transient render wrapper for the board.
pub struct FlagBoard<'a> {
    state: &'a mut FlagBoardState,
    choices: &'a [String],
    /// Drawn dimmer while a dialog is open.
    dimmed: bool,
}

impl<'a> FlagBoard<'a> {
    pub fn new(state: &'a mut FlagBoardState, choices: &'a [String], dimmed: bool) -> Self {
        Self {
            state,
            choices,
            dimmed,
        }
    }
}

impl Component for FlagBoard<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let cards: [Rect; CHOICES_PER_ROUND] = Layout::horizontal([Constraint::Fill(1); 3])
            .spacing(2)
            .areas(area);
        self.state.card_areas = cards;

        for (index, card) in cards.into_iter().enumerate() {
            let is_selected = index == self.state.selected && !self.dimmed;
            let border_style = if is_selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let block = Block::bordered()
                .title(format!(" {} ", index + 1))
                .border_style(border_style)
                .title_style(border_style);
            let inner = block.inner(card);
            frame.render_widget(block, card);

            let Some(id) = self.choices.get(index) else {
                continue;
            };
            match country::lookup(id) {
                Some(c) => {
                    let flag_area = fit_flag(inner);
                    frame.render_widget(FlagWidget::new(c.flag, self.dimmed), flag_area);
                }
                None => {
                    log::warn!("No flag for country id {:?}", id);
                }
            }
        }
    }
}

/// Largest 3:2 flag area centered inside `area`.
pub fn fit_flag(area: Rect) -> Rect {
    let rows = area.height.min(area.width / CELLS_WIDE_PER_ROW);
    let width = (rows * CELLS_WIDE_PER_ROW).min(area.width);
    let [_, column, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width),
        Constraint::Fill(1),
    ])
    .areas(area);
    let [_, flag, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(rows),
        Constraint::Fill(1),
    ])
    .areas(column);
    flag
}

/// Paints a `FlagPattern` into a buffer region.
pub struct FlagWidget {
    pattern: FlagPattern,
    dimmed: bool,
}

impl FlagWidget {
    pub fn new(pattern: FlagPattern, dimmed: bool) -> Self {
        Self { pattern, dimmed }
    }

    fn color(&self, rgb: Rgb) -> Color {
        let Rgb(r, g, b) = rgb;
        if self.dimmed {
            Color::Rgb(r / 2, g / 2, b / 2)
        } else {
            Color::Rgb(r, g, b)
        }
    }
}

impl Widget for FlagWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let width = area.width as f32;
        let pixel_rows = (area.height * 2) as f32;
        for dy in 0..area.height {
            let top_y = (dy as f32 * 2.0 + 0.5) / pixel_rows;
            let bottom_y = (dy as f32 * 2.0 + 1.5) / pixel_rows;
            for dx in 0..area.width {
                let x = (dx as f32 + 0.5) / width;
                let top = self.color(self.pattern.color_at(x, top_y));
                let bottom = self.color(self.pattern.color_at(x, bottom_y));
                if let Some(cell) = buf.cell_mut((area.x + dx, area.y + dy)) {
                    cell.set_symbol("▀").set_fg(top).set_bg(bottom);
                }
            }
        }
    }
}

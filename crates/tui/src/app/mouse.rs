//! Mouse event handling for the TUI app.
//!
//! Responsibilities:
//! - Scroll the guide with the wheel.
//! - Toggle a section when its title row is clicked.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use crate::action::Action;
use crate::app::App;

impl App {
    /// Handle mouse input; returns the Action to dispatch, if any.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<Action> {
        if self.show_help {
            return None;
        }
        match mouse.kind {
            MouseEventKind::ScrollUp => Some(Action::ScrollUp),
            MouseEventKind::ScrollDown => Some(Action::ScrollDown),
            MouseEventKind::Down(MouseButton::Left) => self.handle_body_click(mouse.column, mouse.row),
            _ => None,
        }
    }

    /// Map a click to the section title under it, using the last rendered rows.
    fn handle_body_click(&self, column: u16, row: u16) -> Option<Action> {
        if !self.body_area.contains(Position::new(column, row)) {
            return None;
        }
        let guide_row = usize::from(row - self.body_area.y) + self.scroll;
        self.view.section_at(guide_row).map(Action::Toggle)
    }
}

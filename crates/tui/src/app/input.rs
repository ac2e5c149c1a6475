//! Keyboard input handling for the TUI app.
//!
//! Invariants:
//! - While the help popup is open it captures input: only closing it or
//!   quitting gets through.

use crossterm::event::{KeyCode, KeyEvent};

use crate::action::Action;
use crate::app::App;

impl App {
    /// Resolve a key press into an Action, if any.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<Action> {
        let action = self.keymap.resolve(key);

        if self.show_help {
            return match (key.code, action) {
                (KeyCode::Esc, _) | (_, Some(Action::ToggleHelp)) => Some(Action::ToggleHelp),
                (_, Some(Action::Quit)) => Some(Action::Quit),
                _ => None,
            };
        }

        if action.is_none() {
            tracing::trace!(?key, "Unbound key");
        }
        action
    }
}

//! Action protocol for TUI event handling.
//!
//! Actions are produced by the input task (raw terminal events), by the
//! keymap resolver and by the mouse handler, and consumed by `App::update`.
//!
//! Does NOT handle:
//! - Applying actions (see `app::actions`).
//! - Mapping keys to actions (see `input::keymap`).

use crossterm::event::{KeyEvent, MouseEvent};

use crate::content::SectionId;

/// Unified action enum for the event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Raw key press forwarded from the input task.
    Input(KeyEvent),
    /// Raw mouse event forwarded from the input task.
    Mouse(MouseEvent),
    /// Terminal resized to (width, height).
    Resize(u16, u16),
    /// UI tick (prunes expired toasts).
    Tick,
    Quit,

    /// Expand or collapse a section by id.
    Toggle(SectionId),
    /// Expand or collapse a section by its one-based position.
    ///
    /// Positions outside the table are reported and otherwise ignored.
    TogglePosition(usize),
    /// Expand or collapse the section under the cursor.
    ToggleFocused,
    FocusNext,
    FocusPrevious,
    CollapseAll,

    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollTop,

    ToggleHelp,
    CycleTheme,
}

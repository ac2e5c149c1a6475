//! Test helpers for TUI testing.
//!
//! Provides key/mouse event builders and a harness that renders the app
//! into a `TestBackend`.

#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use prompt_guide::App;
use prompt_guide::action::Action;
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

/// Create a character key event.
pub fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

pub fn enter_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)
}

pub fn esc_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)
}

pub fn down_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Down, KeyModifiers::NONE)
}

pub fn up_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Up, KeyModifiers::NONE)
}

pub fn page_down_key() -> KeyEvent {
    KeyEvent::new(KeyCode::PageDown, KeyModifiers::NONE)
}

/// Shift+Tab as crossterm reports it.
pub fn back_tab_key() -> KeyEvent {
    KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)
}

/// Create a Ctrl+char key event.
pub fn ctrl_key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

pub fn mouse_click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

pub fn mouse_scroll_down(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::ScrollDown,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

/// Test harness for TUI rendering with a mock terminal.
pub struct TuiHarness {
    pub app: App,
    pub terminal: Terminal<TestBackend>,
}

impl TuiHarness {
    pub fn new(width: u16, height: u16) -> Self {
        Self::with_app(App::default(), width, height)
    }

    pub fn with_app(app: App, width: u16, height: u16) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        Self { app, terminal }
    }

    /// Render the current app state and return the buffer contents.
    pub fn render(&mut self) -> String {
        self.terminal.draw(|f| self.app.render(f)).unwrap();
        buffer_to_string(self.terminal.backend().buffer())
    }

    /// Feed a key press through input resolution and update, like the main loop.
    /// Returns false when the key asked to quit.
    pub fn press(&mut self, key: KeyEvent) -> bool {
        match self.app.handle_input(key) {
            Some(Action::Quit) => false,
            Some(action) => {
                self.app.update(action);
                true
            }
            None => true,
        }
    }

    pub fn mouse(&mut self, event: MouseEvent) {
        if let Some(action) = self.app.handle_mouse(event) {
            self.app.update(action);
        }
    }

    /// Screen row currently showing the guide row `row`.
    pub fn screen_row(&self, row: usize) -> u16 {
        self.app.body_area.y + u16::try_from(row - self.app.scroll).unwrap()
    }
}

/// Convert a buffer into text, one line per terminal row.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut output = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            output.push_str(buffer[(x, y)].symbol());
        }
        output.push('\n');
    }
    output
}

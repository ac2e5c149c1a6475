//! Terminal state management and cleanup.
//!
//! Responsibilities:
//! - Enter raw mode and the alternate screen, optionally capturing the mouse.
//! - Restore the terminal on drop, including during panics.
//!
//! Invariants:
//! - Must live for the duration of the TUI session.
//! - Drop implementation must not panic.

use std::io;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};

/// Guard that restores terminal state on drop.
#[derive(Debug)]
pub struct TerminalGuard {
    mouse_captured: bool,
}

impl TerminalGuard {
    /// Switch the terminal into TUI mode.
    ///
    /// If entering the alternate screen fails, raw mode is undone before
    /// returning the error.
    pub fn enter(capture_mouse: bool) -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = Self {
            mouse_captured: capture_mouse,
        };

        let mut stdout = io::stdout();
        if capture_mouse {
            execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        } else {
            execute!(stdout, EnterAlternateScreen)?;
        }

        tracing::debug!(capture_mouse, "Terminal entered TUI mode");
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Errors are ignored: there is nothing useful to do with them here.
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        if self.mouse_captured {
            let _ = execute!(stdout, LeaveAlternateScreen, DisableMouseCapture);
        } else {
            let _ = execute!(stdout, LeaveAlternateScreen);
        }
    }
}

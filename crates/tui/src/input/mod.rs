//! Centralized input/keybinding definitions for the TUI.
//!
//! Responsibilities:
//! - Define the shared keybinding catalog used by input resolution, the footer and help popup.
//! - Apply user keybinding overrides on top of the defaults.
//!
//! Non-responsibilities:
//! - Mutating application state directly (handled by App via Actions).
//!
//! Invariants:
//! - Keybinding metadata is the single source of truth for footer and help text.
//! - Input resolution returns Actions only and never mutates App state.

pub mod help;
pub mod keymap;

pub use keymap::Keymap;

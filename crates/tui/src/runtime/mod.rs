//! Runtime components for the TUI application.
//!
//! - Terminal management (`TerminalGuard`)
//! - Configuration loading from CLI, environment and config file
//!
//! Does NOT handle:
//! - UI rendering or input handling (see `prompt_guide::app` and `prompt_guide::ui`).

pub mod config;
pub mod terminal;

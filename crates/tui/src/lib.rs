//! Prompt Guide TUI library.
//!
//! Core state, input handling and rendering for an interactive terminal
//! guide on writing effective prompts for AI models.
//!
//! # Example
//!
//! ```rust
//! use prompt_guide::{Action, App};
//! use crossterm::event::{KeyCode, KeyEvent};
//!
//! let mut app = App::default();
//! if let Some(action) = app.handle_input(KeyEvent::from(KeyCode::Char('2'))) {
//!     app.update(action);
//! }
//! assert!(app.selection.is_expanded(prompt_guide::SectionId::Contexto));
//! ```

pub mod action;
pub mod app;
pub mod cli;
pub mod content;
pub mod error;
pub mod input;
pub mod runtime;
pub mod selection;
pub mod ui;

pub use action::Action;
pub use app::{App, FOOTER_HEIGHT};
pub use content::{SECTIONS, Section, SectionExample, SectionId};
pub use error::GuideError;
pub use selection::Selection;
pub use ui::toast::{Toast, ToastLevel};

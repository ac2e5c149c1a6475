//! UI rendering modules for the TUI.
//!
//! Rendering here is separated from the app state in `crate::app`.

pub mod guide;
pub mod help;
pub mod theme;
pub mod toast;

pub use toast::{Toast, ToastLevel};

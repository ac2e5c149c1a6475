//! Keybinding configuration types.
//!
//! Responsibilities:
//! - Define overridable keybinding action identifiers (`KeybindAction`).
//! - Define `KeybindOverrides` for user-defined keybinding customizations.
//!
//! Does NOT handle:
//! - Keybinding parsing or validation (see `keybind` module at crate root).
//! - Runtime key event matching (see TUI crate).
//!
//! Invariants:
//! - `KeybindAction` uses snake_case serialization for config file consistency.
//! - `KeybindOverrides` uses `BTreeMap` for deterministic ordering.
//! - Only actions explicitly listed in overrides override the defaults.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// An overridable keybinding action identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum KeybindAction {
    /// Quit the application
    Quit,
    /// Open or close the help popup
    Help,
    /// Expand or collapse the focused section
    Toggle,
    /// Move focus to the next section
    NextSection,
    /// Move focus to the previous section
    PreviousSection,
    /// Switch to the next color theme
    CycleTheme,
}

impl fmt::Display for KeybindAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quit => write!(f, "quit"),
            Self::Help => write!(f, "help"),
            Self::Toggle => write!(f, "toggle"),
            Self::NextSection => write!(f, "next_section"),
            Self::PreviousSection => write!(f, "previous_section"),
            Self::CycleTheme => write!(f, "cycle_theme"),
        }
    }
}

/// User-defined keybinding overrides.
///
/// Maps action identifiers to key combinations. Only actions explicitly
/// listed here override the defaults; all others use built-in bindings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeybindOverrides {
    /// Map of action -> key combination string.
    #[serde(default)]
    pub overrides: BTreeMap<KeybindAction, String>,
}

impl KeybindOverrides {
    /// Returns true if there are no overrides configured.
    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }

    /// Get the override for a specific action, if any.
    pub fn get(&self, action: KeybindAction) -> Option<&str> {
        self.overrides.get(&action).map(|s| s.as_str())
    }
}

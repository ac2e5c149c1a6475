//! Configuration types.
//!
//! Responsibilities:
//! - Define the on-disk `ConfigFile` shape and the resolved `Config`.
//! - Re-export theme and keybinding types.
//!
//! Does NOT handle:
//! - Loading or merging values (see `loader`).

pub mod keybind;
pub mod theme;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use keybind::{KeybindAction, KeybindOverrides};
pub use theme::{ColorTheme, Theme};

/// Contents of the optional JSON config file.
///
/// Every field is optional; unknown fields are rejected so typos surface
/// as parse errors instead of silently falling back to defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub theme: Option<ColorTheme>,
    #[serde(default)]
    pub keybind_overrides: KeybindOverrides,
}

/// Fully resolved configuration handed to the TUI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub theme: ColorTheme,
    pub keybind_overrides: KeybindOverrides,
    /// Config file that contributed values, if one was read.
    pub source_path: Option<PathBuf>,
}

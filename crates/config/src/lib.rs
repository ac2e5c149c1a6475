//! Configuration management for the prompt guide TUI.
//!
//! This crate provides the theme palettes, keybinding override types and the
//! loader that merges CLI values, environment variables and the optional
//! JSON config file into a single [`Config`].

pub mod constants;
pub mod keybind;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, default_config_path, env_var_or_none};
pub use types::{ColorTheme, Config, ConfigFile, KeybindAction, KeybindOverrides, Theme};

#[cfg(test)]
pub(crate) mod test_util {
    use std::sync::{Mutex, OnceLock};

    pub fn global_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }
}

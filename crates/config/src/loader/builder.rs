//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for hierarchical configuration merging.
//! - Support loading from `.env`, environment variables, builder methods and the config file.
//! - Build the final `Config`.
//!
//! Invariants / Assumptions:
//! - Builder methods called after `from_env()` take precedence over environment variables.
//! - `from_file()` only fills values that are still unset.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

use std::path::PathBuf;

use super::env::apply_env;
use super::error::ConfigError;
use super::file::load_config_file;
use crate::constants::ENV_DOTENV_DISABLED;
use crate::types::{ColorTheme, Config, KeybindOverrides};

/// Configuration loader that merges CLI, environment and file values.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    theme: Option<ColorTheme>,
    config_path: Option<PathBuf>,
    keybind_overrides: Option<KeybindOverrides>,
    source_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(ENV_DOTENV_DISABLED).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from a `.env` file if present.
    ///
    /// Skipped entirely when `DOTENV_DISABLED` is `1` or `true`. Missing
    /// files are silently ignored.
    ///
    /// # Errors
    ///
    /// - `ConfigError::DotenvParse` when the file has invalid syntax.
    /// - `ConfigError::DotenvIo` when the file exists but cannot be read.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(path) => {
                tracing::debug!(path = %path.display(), "Loaded .env file");
                Ok(self)
            }
            Err(dotenvy::Error::Io(io_err)) if io_err.kind() == std::io::ErrorKind::NotFound => {
                Ok(self)
            }
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Read configuration from environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Read the config file and fill any values not already set.
    ///
    /// Uses the path set via `with_config_path` / `PROMPT_GUIDE_CONFIG_PATH`,
    /// falling back to the platform default location.
    pub fn from_file(mut self) -> Result<Self, ConfigError> {
        if let Some((path, file)) = load_config_file(self.config_path.as_deref())? {
            if self.theme.is_none() {
                self.theme = file.theme;
            }
            if self.keybind_overrides.is_none() {
                self.keybind_overrides = Some(file.keybind_overrides);
            }
            self.source_path = Some(path);
        }
        Ok(self)
    }

    /// Set the theme.
    pub fn with_theme(mut self, theme: ColorTheme) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Set the theme from its name (as typed on the command line).
    pub fn with_theme_name(self, name: &str) -> Result<Self, ConfigError> {
        let theme = name.parse::<ColorTheme>().map_err(ConfigError::UnknownTheme)?;
        Ok(self.with_theme(theme))
    }

    /// Set the config file path.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Build the final configuration.
    ///
    /// Keybinding overrides are passed through unvalidated; the TUI checks
    /// them when building its keymap and falls back to defaults on error.
    pub fn build(self) -> Config {
        Config {
            theme: self.theme.unwrap_or_default(),
            keybind_overrides: self.keybind_overrides.unwrap_or_default(),
            source_path: self.source_path,
        }
    }

    pub fn theme(&self) -> Option<ColorTheme> {
        self.theme
    }

    pub fn config_path(&self) -> Option<&PathBuf> {
        self.config_path.as_ref()
    }

    pub(crate) fn set_theme(&mut self, theme: Option<ColorTheme>) {
        self.theme = theme;
    }

    pub(crate) fn set_config_path(&mut self, path: Option<PathBuf>) {
        self.config_path = path;
    }
}

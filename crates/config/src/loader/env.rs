//! Environment variable parsing for configuration.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed.

use std::path::PathBuf;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::{ENV_CONFIG_PATH, ENV_THEME};
use crate::types::ColorTheme;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(theme) = env_var_or_none(ENV_THEME) {
        let theme = theme
            .parse::<ColorTheme>()
            .map_err(|raw| ConfigError::InvalidValue {
                var: ENV_THEME.to_string(),
                message: format!("unknown theme '{raw}'"),
            })?;
        loader.set_theme(Some(theme));
    }
    if let Some(path) = env_var_or_none(ENV_CONFIG_PATH) {
        loader.set_config_path(Some(PathBuf::from(path)));
    }
    Ok(())
}

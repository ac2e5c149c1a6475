//! Configuration loading for the TUI.
//!
//! Invariants:
//! - Precedence: CLI args > env vars > config file > defaults.
//! - `.env` is loaded first unless `DOTENV_DISABLED` is set.
//! - A blank `--config-path` is treated as absent.
//! - Nothing is ever written back to disk.

use anyhow::{Context, Result};
use prompt_guide_config::{Config, ConfigLoader};

use crate::cli::Cli;

/// Resolve the effective configuration for this run.
///
/// # Errors
///
/// Returns an error for an unknown theme name, an invalid environment value,
/// a malformed `.env`, or an unreadable or malformed config file. A missing
/// default config file is not an error.
pub fn load_config(cli: &Cli) -> Result<Config> {
    let mut loader = ConfigLoader::new()
        .load_dotenv()
        .context("Failed to load .env")?
        .from_env()?;

    if let Some(path) = &cli.config_path
        && !path.as_os_str().to_string_lossy().trim().is_empty()
    {
        loader = loader.with_config_path(path.clone());
    }

    if let Some(theme) = &cli.theme {
        loader = loader.with_theme_name(theme)?;
    }

    let config = loader.from_file()?.build();

    match &config.source_path {
        Some(path) => tracing::info!(path = %path.display(), theme = %config.theme, "Loaded configuration"),
        None => tracing::info!(theme = %config.theme, "No config file found, using defaults"),
    }

    Ok(config)
}

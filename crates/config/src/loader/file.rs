//! Config file discovery and parsing.
//!
//! Invariants:
//! - A missing file at the default location is not an error.
//! - A missing file at an explicitly requested location is an error.
//! - The file is only ever read.

use std::path::{Path, PathBuf};

use anyhow::Context;

use super::error::ConfigError;
use crate::constants::{APP_NAME, CONFIG_FILE_NAME};
use crate::types::ConfigFile;

/// Returns the default path to the configuration file.
///
/// - Linux: `~/.config/prompt-guide/config.json`
/// - macOS: `~/Library/Application Support/prompt-guide/config.json`
/// - Windows: `%AppData%\prompt-guide\config\config.json`
pub fn default_config_path() -> Result<PathBuf, anyhow::Error> {
    let proj_dirs = directories::ProjectDirs::from("", "", APP_NAME)
        .context("Failed to determine project directories")?;

    Ok(proj_dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Read and parse a config file.
pub(crate) fn read_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::ConfigFileRead {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| ConfigError::ConfigFileParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Locate and read the config file.
///
/// Returns `Ok(None)` when no explicit path was given and nothing exists at
/// the default location.
pub(crate) fn load_config_file(
    explicit: Option<&Path>,
) -> Result<Option<(PathBuf, ConfigFile)>, ConfigError> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let path = default_config_path()
                .map_err(|e| ConfigError::ConfigDirUnavailable(e.to_string()))?;
            if !path.exists() {
                tracing::debug!(path = %path.display(), "No config file at default location");
                return Ok(None);
            }
            path
        }
    };

    let file = read_config_file(&path)?;
    tracing::debug!(path = %path.display(), "Loaded config file");
    Ok(Some((path, file)))
}

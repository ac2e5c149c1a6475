//! Command-line argument parsing for prompt-guide.
//!
//! Responsibilities:
//! - Define CLI argument structure using clap derive macros.
//!
//! Does NOT handle:
//! - Configuration loading or precedence (see `runtime::config`).
//! - Terminal state management (see `runtime::terminal`).

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for prompt-guide.
///
/// Configuration precedence (highest to lowest):
/// 1. CLI arguments (`--theme`, `--config-path`)
/// 2. Environment variables (`PROMPT_GUIDE_THEME`, `PROMPT_GUIDE_CONFIG_PATH`)
/// 3. Config file (`config.json`)
/// 4. Default values
#[derive(Debug, Parser)]
#[command(
    name = "prompt-guide",
    about = "Interactive terminal guide to writing effective AI prompts",
    version,
    after_help = "Examples:\n  prompt-guide\n  prompt-guide --theme high-contrast\n  prompt-guide --config-path ~/prompt-guide.json --no-mouse\n  RUST_LOG=debug prompt-guide --log-dir /tmp/prompt-guide\n"
)]
pub struct Cli {
    /// Path to a custom configuration file
    #[arg(long)]
    pub config_path: Option<PathBuf>,

    /// Color theme (default, light, dark, high-contrast, monochrome)
    #[arg(long)]
    pub theme: Option<String>,

    /// Directory for log files
    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,

    /// Disable mouse support
    #[arg(long)]
    pub no_mouse: bool,
}

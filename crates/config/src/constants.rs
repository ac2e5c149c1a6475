//! Centralized constants for the prompt guide workspace.
//!
//! Default values shared by the config loader and the TUI crate.

// =============================================================================
// Environment & Files
// =============================================================================

/// Environment variable selecting the color theme (e.g. `dark`).
pub const ENV_THEME: &str = "PROMPT_GUIDE_THEME";

/// Environment variable pointing at a custom config file.
pub const ENV_CONFIG_PATH: &str = "PROMPT_GUIDE_CONFIG_PATH";

/// Environment variable that disables `.env` loading when set to `1` or `true`.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";

/// Application name used for the platform config directory.
pub const APP_NAME: &str = "prompt-guide";

/// File name of the config file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// File name prefix for the rolling log file.
pub const LOG_FILE_NAME: &str = "prompt-guide.log";

// =============================================================================
// TUI/UI Defaults
// =============================================================================

/// Default channel capacity for action messages.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Default UI tick interval in milliseconds (drives toast expiry).
pub const DEFAULT_UI_TICK_MS: u64 = 250;

/// Rows scrolled per PageUp/PageDown until the viewport height is known.
pub const DEFAULT_PAGE_SCROLL_ROWS: u16 = 10;

/// Rows scrolled per mouse wheel notch and per Ctrl+e/Ctrl+y.
pub const DEFAULT_WHEEL_SCROLL_ROWS: u16 = 3;

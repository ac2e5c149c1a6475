//! Keybinding parsing and validation.
//!
//! Responsibilities:
//! - Parse human-readable key strings ("q", "Ctrl+x", "F1") into `ParsedKey`.
//! - Validate override sets for syntax errors, reserved keys and conflicts.
//!
//! Does NOT handle:
//! - Conversion to crossterm events (that's in the TUI crate).

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use thiserror::Error;

use crate::types::keybind::KeybindAction;

/// Errors that can occur when parsing or validating keybindings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeybindError {
    #[error("Invalid key syntax: '{key}'. Expected format like 'q', 'Ctrl+x', 'F1'")]
    InvalidSyntax { key: String },

    #[error("Unknown key name: '{name}'")]
    UnknownKey { name: String },

    #[error("Invalid binding for action '{action}': {source}")]
    InvalidBinding {
        action: KeybindAction,
        #[source]
        source: Box<KeybindError>,
    },

    #[error("Conflicting keybindings: '{key}' is assigned to both {first} and {second}")]
    Conflict {
        key: String,
        first: KeybindAction,
        second: KeybindAction,
    },

    #[error("Reserved keybinding: '{key}' cannot be overridden")]
    ReservedKey { key: String },
}

/// Key code names accepted in config strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCodeName {
    Char(char),
    /// Function key F1-F20
    F(u8),
    Esc,
    Enter,
    Space,
    Tab,
    BackTab,
    Home,
    End,
    PageUp,
    PageDown,
    Up,
    Down,
    Left,
    Right,
}

impl fmt::Display for KeyCodeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(c) => write!(f, "{c}"),
            Self::F(n) => write!(f, "F{n}"),
            Self::Esc => f.write_str("Esc"),
            Self::Enter => f.write_str("Enter"),
            Self::Space => f.write_str("Space"),
            Self::Tab => f.write_str("Tab"),
            Self::BackTab => f.write_str("BackTab"),
            Self::Home => f.write_str("Home"),
            Self::End => f.write_str("End"),
            Self::PageUp => f.write_str("PageUp"),
            Self::PageDown => f.write_str("PageDown"),
            Self::Up => f.write_str("Up"),
            Self::Down => f.write_str("Down"),
            Self::Left => f.write_str("Left"),
            Self::Right => f.write_str("Right"),
        }
    }
}

/// Modifier flags for key combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct ModifierFlags {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

/// A parsed key combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParsedKey {
    pub code: KeyCodeName,
    pub modifiers: ModifierFlags,
}

impl ParsedKey {
    /// Key shown for this binding in the footer and help popup.
    pub fn label(&self) -> String {
        let mut label = String::new();
        if self.modifiers.ctrl {
            label.push_str("Ctrl+");
        }
        if self.modifiers.alt {
            label.push_str("Alt+");
        }
        if self.modifiers.shift {
            label.push_str("Shift+");
        }
        label.push_str(&self.code.to_string());
        label
    }

    /// The form the terminal actually reports for this key.
    ///
    /// Shifted characters arrive as their uppercase char, so Shift is folded
    /// into the code. BackTab always arrives with Shift held. Two keys that
    /// canonicalize equal are the same physical binding.
    ///
    /// ```
    /// use prompt_guide_config::keybind::parse_key;
    ///
    /// assert_eq!(
    ///     parse_key("Shift+n").unwrap().canonical(),
    ///     parse_key("N").unwrap().canonical(),
    /// );
    /// ```
    pub fn canonical(self) -> Self {
        let mut modifiers = self.modifiers;
        let code = match self.code {
            KeyCodeName::Char(c) => {
                let c = if modifiers.shift { c.to_ascii_uppercase() } else { c };
                modifiers.shift = false;
                KeyCodeName::Char(c)
            }
            KeyCodeName::Space => {
                modifiers.shift = false;
                KeyCodeName::Space
            }
            KeyCodeName::BackTab => {
                modifiers.shift = true;
                KeyCodeName::BackTab
            }
            other => other,
        };
        Self { code, modifiers }
    }
}

impl fmt::Display for ParsedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Parse a key string like "Ctrl+x", "F1", "Shift+Tab" into structured form.
///
/// # Examples
///
/// ```
/// use prompt_guide_config::keybind::{parse_key, KeyCodeName};
///
/// let key = parse_key("Ctrl+x").unwrap();
/// assert_eq!(key.code, KeyCodeName::Char('x'));
/// assert!(key.modifiers.ctrl);
/// ```
pub fn parse_key(key_str: &str) -> Result<ParsedKey, KeybindError> {
    let trimmed = key_str.trim();
    let syntax_error = || KeybindError::InvalidSyntax {
        key: trimmed.to_string(),
    };

    if trimmed.is_empty() {
        return Err(syntax_error());
    }

    // A lone "+" is the plus key, not a separator.
    if trimmed == "+" {
        return Ok(ParsedKey {
            code: KeyCodeName::Char('+'),
            modifiers: ModifierFlags::default(),
        });
    }

    let mut modifiers = ModifierFlags::default();
    let mut key_name: Option<&str> = None;

    for part in trimmed.split('+').map(str::trim) {
        match part.to_ascii_lowercase().as_str() {
            "ctrl" | "control" => modifiers.ctrl = true,
            "shift" => modifiers.shift = true,
            "alt" | "option" => modifiers.alt = true,
            "" => return Err(syntax_error()),
            _ if key_name.is_some() => return Err(syntax_error()),
            _ => key_name = Some(part),
        }
    }

    let code = parse_key_code(key_name.ok_or_else(syntax_error)?)?;

    let code = match code {
        KeyCodeName::Tab if modifiers.shift => KeyCodeName::BackTab,
        other => other,
    };

    Ok(ParsedKey { code, modifiers })
}

fn parse_key_code(name: &str) -> Result<KeyCodeName, KeybindError> {
    let lower = name.to_ascii_lowercase();

    let named = match lower.as_str() {
        "esc" | "escape" => Some(KeyCodeName::Esc),
        "enter" | "return" => Some(KeyCodeName::Enter),
        "space" => Some(KeyCodeName::Space),
        "tab" => Some(KeyCodeName::Tab),
        "backtab" => Some(KeyCodeName::BackTab),
        "home" => Some(KeyCodeName::Home),
        "end" => Some(KeyCodeName::End),
        "pageup" | "page_up" | "pgup" => Some(KeyCodeName::PageUp),
        "pagedown" | "page_down" | "pgdn" => Some(KeyCodeName::PageDown),
        "up" => Some(KeyCodeName::Up),
        "down" => Some(KeyCodeName::Down),
        "left" => Some(KeyCodeName::Left),
        "right" => Some(KeyCodeName::Right),
        _ => None,
    };
    if let Some(code) = named {
        return Ok(code);
    }

    if let Some(num) = lower.strip_prefix('f')
        && let Ok(num) = num.parse::<u8>()
        && (1..=20).contains(&num)
    {
        return Ok(KeyCodeName::F(num));
    }

    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(KeyCodeName::Char(c)),
        _ => Err(KeybindError::UnknownKey {
            name: name.to_string(),
        }),
    }
}

/// Returns true for keys that overrides may not claim.
///
/// Ctrl+C always quits and the digits jump straight to a section.
pub fn is_reserved(key: &ParsedKey) -> bool {
    match key.code {
        KeyCodeName::Char(c) if key.modifiers.ctrl => c.eq_ignore_ascii_case(&'c'),
        KeyCodeName::Char(c) => !key.modifiers.alt && c.is_ascii_digit(),
        _ => false,
    }
}

/// Validate a set of keybinding overrides.
///
/// Conflicts are detected on the canonical key, so `"Shift+n"` and `"N"`
/// collide.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use prompt_guide_config::keybind::validate_overrides;
/// use prompt_guide_config::KeybindAction;
///
/// let mut overrides = BTreeMap::new();
/// overrides.insert(KeybindAction::Quit, "F10".to_string());
/// overrides.insert(KeybindAction::Help, "F1".to_string());
///
/// assert!(validate_overrides(&overrides).is_ok());
/// ```
pub fn validate_overrides(
    overrides: &BTreeMap<KeybindAction, String>,
) -> Result<Vec<(KeybindAction, ParsedKey)>, KeybindError> {
    let mut parsed = Vec::with_capacity(overrides.len());
    let mut seen: HashMap<ParsedKey, KeybindAction> = HashMap::new();

    for (action, key_str) in overrides {
        let key = parse_key(key_str).map_err(|e| KeybindError::InvalidBinding {
            action: *action,
            source: Box::new(e),
        })?;

        if is_reserved(&key) {
            return Err(KeybindError::ReservedKey {
                key: key_str.trim().to_string(),
            });
        }

        if let Some(first) = seen.insert(key.canonical(), *action) {
            return Err(KeybindError::Conflict {
                key: key_str.trim().to_string(),
                first,
                second: *action,
            });
        }

        parsed.push((*action, key));
    }

    Ok(parsed)
}

//! Keybinding override resolution.
//!
//! Bridges the config crate's `KeybindOverrides` with the crossterm-based
//! keymap. Parsed key strings become `(KeyCode, KeyModifiers)` lookups.
//!
//! Does NOT handle:
//! - Parsing key strings (handled by `prompt_guide_config::keybind`).
//! - Runtime keybinding changes (overrides are immutable after startup).

use std::collections::{BTreeMap, HashMap};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use prompt_guide_config::keybind::{
    KeyCodeName, KeybindError, ModifierFlags, ParsedKey, validate_overrides,
};
use prompt_guide_config::{KeybindAction, KeybindOverrides};

use super::normalized;
use crate::action::Action;

/// Pre-computed lookup table for overridden bindings.
#[derive(Debug, Clone, Default)]
pub struct KeybindOverrideTable {
    bindings: HashMap<(KeyCode, KeyModifiers), Action>,
    /// Label per overridden action, for the footer and help popup.
    labels: BTreeMap<KeybindAction, String>,
}

impl KeybindOverrideTable {
    /// Build the override table from config.
    ///
    /// # Errors
    ///
    /// Returns the first syntax, reserved-key or conflict error.
    pub fn from_overrides(overrides: &KeybindOverrides) -> Result<Self, KeybindError> {
        let mut table = Self::default();

        for (action, parsed) in validate_overrides(&overrides.overrides)? {
            let event = parsed_key_to_crossterm(&parsed);
            table
                .bindings
                .insert((event.code, event.modifiers), action_for_keybind(action));
            table.labels.insert(action, parsed.label());
        }

        Ok(table)
    }

    /// Check if a key event matches an override.
    pub fn resolve(&self, key: KeyEvent) -> Option<Action> {
        let key = normalized(key);
        self.bindings.get(&(key.code, key.modifiers)).copied()
    }

    /// Label of the key overriding `action`, if any.
    pub fn key_for(&self, action: KeybindAction) -> Option<&str> {
        self.labels.get(&action).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }
}

/// Converts a parsed key from config into the event `normalized` produces.
fn parsed_key_to_crossterm(parsed: &ParsedKey) -> KeyEvent {
    let parsed = parsed.canonical();
    let modifiers = modifier_flags_to_crossterm(&parsed.modifiers);
    let code = match parsed.code {
        KeyCodeName::Char(c) => KeyCode::Char(c),
        KeyCodeName::F(n) => KeyCode::F(n),
        KeyCodeName::Esc => KeyCode::Esc,
        KeyCodeName::Enter => KeyCode::Enter,
        KeyCodeName::Space => KeyCode::Char(' '),
        KeyCodeName::Tab => KeyCode::Tab,
        KeyCodeName::BackTab => KeyCode::BackTab,
        KeyCodeName::Home => KeyCode::Home,
        KeyCodeName::End => KeyCode::End,
        KeyCodeName::PageUp => KeyCode::PageUp,
        KeyCodeName::PageDown => KeyCode::PageDown,
        KeyCodeName::Up => KeyCode::Up,
        KeyCodeName::Down => KeyCode::Down,
        KeyCodeName::Left => KeyCode::Left,
        KeyCodeName::Right => KeyCode::Right,
    };

    KeyEvent::new(code, modifiers)
}

fn modifier_flags_to_crossterm(flags: &ModifierFlags) -> KeyModifiers {
    let mut modifiers = KeyModifiers::NONE;
    if flags.ctrl {
        modifiers |= KeyModifiers::CONTROL;
    }
    if flags.shift {
        modifiers |= KeyModifiers::SHIFT;
    }
    if flags.alt {
        modifiers |= KeyModifiers::ALT;
    }
    modifiers
}

fn action_for_keybind(action: KeybindAction) -> Action {
    match action {
        KeybindAction::Quit => Action::Quit,
        KeybindAction::Help => Action::ToggleHelp,
        KeybindAction::Toggle => Action::ToggleFocused,
        KeybindAction::NextSection => Action::FocusNext,
        KeybindAction::PreviousSection => Action::FocusPrevious,
        KeybindAction::CycleTheme => Action::CycleTheme,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(pairs: &[(KeybindAction, &str)]) -> KeybindOverrideTable {
        let overrides = KeybindOverrides {
            overrides: pairs
                .iter()
                .map(|(action, key)| (*action, key.to_string()))
                .collect(),
        };
        KeybindOverrideTable::from_overrides(&overrides).unwrap()
    }

    #[test]
    fn empty_overrides_build_empty_table() {
        let table = KeybindOverrideTable::from_overrides(&KeybindOverrides::default()).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.resolve(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)), None);
    }

    #[test]
    fn ctrl_override_resolves() {
        let table = table(&[(KeybindAction::Quit, "Ctrl+q")]);
        let event = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL);
        assert_eq!(table.resolve(event), Some(Action::Quit));
        assert_eq!(table.key_for(KeybindAction::Quit), Some("Ctrl+q"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn shifted_letter_matches_uppercase_event() {
        let table = table(&[(KeybindAction::NextSection, "Shift+n")]);
        let event = KeyEvent::new(KeyCode::Char('N'), KeyModifiers::SHIFT);
        assert_eq!(table.resolve(event), Some(Action::FocusNext));
    }

    #[test]
    fn backtab_override_matches_shift_tab_event() {
        for spelling in ["BackTab", "Shift+Tab"] {
            let table = table(&[(KeybindAction::PreviousSection, spelling)]);
            assert_eq!(
                table.resolve(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)),
                Some(Action::FocusPrevious),
                "{spelling}"
            );
            assert_eq!(
                table.resolve(KeyEvent::new(KeyCode::BackTab, KeyModifiers::NONE)),
                Some(Action::FocusPrevious),
                "{spelling} without reported Shift"
            );
        }
    }

    #[test]
    fn equivalent_spellings_are_rejected_as_conflict() {
        let overrides = KeybindOverrides {
            overrides: BTreeMap::from([
                (KeybindAction::NextSection, "Shift+n".to_string()),
                (KeybindAction::PreviousSection, "N".to_string()),
            ]),
        };
        assert!(matches!(
            KeybindOverrideTable::from_overrides(&overrides),
            Err(KeybindError::Conflict { .. })
        ));
    }

    #[test]
    fn space_and_function_keys_convert() {
        let table = table(&[
            (KeybindAction::Toggle, "Space"),
            (KeybindAction::Help, "F1"),
        ]);
        assert_eq!(
            table.resolve(KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE)),
            Some(Action::ToggleFocused)
        );
        assert_eq!(
            table.resolve(KeyEvent::new(KeyCode::F(1), KeyModifiers::NONE)),
            Some(Action::ToggleHelp)
        );
    }

    #[test]
    fn reserved_key_is_rejected() {
        let overrides = KeybindOverrides {
            overrides: BTreeMap::from([(KeybindAction::Toggle, "3".to_string())]),
        };
        assert!(matches!(
            KeybindOverrideTable::from_overrides(&overrides),
            Err(KeybindError::ReservedKey { .. })
        ));
    }
}

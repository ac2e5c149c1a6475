//! Keybinding catalog and input resolver.
//!
//! Responsibilities:
//! - Define every default binding with its help description.
//! - Resolve KeyEvents into Actions, honoring user overrides.
//!
//! Invariants:
//! - Catalog order is stable; help output and resolution both follow it.
//! - An overridden action loses its default keys.
//! - Character keys match regardless of the Shift modifier, since terminals
//!   disagree on whether to report it for shifted symbols like `?`.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use prompt_guide_config::KeybindAction;
use prompt_guide_config::KeybindOverrides;
use prompt_guide_config::keybind::KeybindError;

use crate::action::Action;

pub mod overrides;

use overrides::KeybindOverrideTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Group {
    Sections,
    Scrolling,
    General,
}

impl Group {
    pub(crate) const ORDER: [Group; 3] = [Self::Sections, Self::Scrolling, Self::General];

    pub(crate) fn title(self) -> &'static str {
        match self {
            Self::Sections => "Sections",
            Self::Scrolling => "Scrolling",
            Self::General => "General",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Matcher {
    Key {
        code: KeyCode,
        modifiers: KeyModifiers,
    },
    /// Digits 1-9, resolved to `Action::TogglePosition`.
    Digit,
}

impl Matcher {
    fn resolve(self, key: KeyEvent, action: Option<Action>) -> Option<Action> {
        match self {
            Matcher::Key { code, modifiers } => {
                (key.code == code && normalized(key).modifiers == modifiers)
                    .then_some(action)
                    .flatten()
            }
            Matcher::Digit => {
                let key = normalized(key);
                match key.code {
                    KeyCode::Char(c @ '1'..='9') if key.modifiers.is_empty() => c
                        .to_digit(10)
                        .map(|d| Action::TogglePosition(d as usize)),
                    _ => None,
                }
            }
        }
    }
}

/// Drop Shift from character keys and force it on BackTab.
pub(crate) fn normalized(key: KeyEvent) -> KeyEvent {
    match key.code {
        KeyCode::Char(_) => KeyEvent::new(key.code, key.modifiers - KeyModifiers::SHIFT),
        // Some terminals drop the Shift bit on BackTab.
        KeyCode::BackTab => KeyEvent::new(key.code, key.modifiers | KeyModifiers::SHIFT),
        _ => KeyEvent::new(key.code, key.modifiers),
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Keybinding {
    pub(crate) group: Group,
    pub(crate) keys: &'static str,
    pub(crate) description: &'static str,
    pub(crate) matcher: Matcher,
    pub(crate) action: Option<Action>,
    /// Set when users may rebind this entry.
    pub(crate) overridable: Option<KeybindAction>,
}

const fn key(code: KeyCode) -> Matcher {
    Matcher::Key {
        code,
        modifiers: KeyModifiers::NONE,
    }
}

const fn ctrl(c: char) -> Matcher {
    Matcher::Key {
        code: KeyCode::Char(c),
        modifiers: KeyModifiers::CONTROL,
    }
}

const BINDINGS: &[Keybinding] = &[
    Keybinding {
        group: Group::Sections,
        keys: "j/↓",
        description: "Next section",
        matcher: key(KeyCode::Char('j')),
        action: Some(Action::FocusNext),
        overridable: Some(KeybindAction::NextSection),
    },
    Keybinding {
        group: Group::Sections,
        keys: "j/↓",
        description: "Next section",
        matcher: key(KeyCode::Down),
        action: Some(Action::FocusNext),
        overridable: Some(KeybindAction::NextSection),
    },
    Keybinding {
        group: Group::Sections,
        keys: "k/↑",
        description: "Previous section",
        matcher: key(KeyCode::Char('k')),
        action: Some(Action::FocusPrevious),
        overridable: Some(KeybindAction::PreviousSection),
    },
    Keybinding {
        group: Group::Sections,
        keys: "k/↑",
        description: "Previous section",
        matcher: key(KeyCode::Up),
        action: Some(Action::FocusPrevious),
        overridable: Some(KeybindAction::PreviousSection),
    },
    Keybinding {
        group: Group::Sections,
        keys: "Enter/Space",
        description: "Expand or collapse",
        matcher: key(KeyCode::Enter),
        action: Some(Action::ToggleFocused),
        overridable: Some(KeybindAction::Toggle),
    },
    Keybinding {
        group: Group::Sections,
        keys: "Enter/Space",
        description: "Expand or collapse",
        matcher: key(KeyCode::Char(' ')),
        action: Some(Action::ToggleFocused),
        overridable: Some(KeybindAction::Toggle),
    },
    Keybinding {
        group: Group::Sections,
        keys: "1-9",
        description: "Expand or collapse section by number",
        matcher: Matcher::Digit,
        action: None,
        overridable: None,
    },
    Keybinding {
        group: Group::Sections,
        keys: "Esc",
        description: "Collapse all",
        matcher: key(KeyCode::Esc),
        action: Some(Action::CollapseAll),
        overridable: None,
    },
    Keybinding {
        group: Group::Scrolling,
        keys: "PgDn/PgUp",
        description: "Scroll a page",
        matcher: key(KeyCode::PageDown),
        action: Some(Action::PageDown),
        overridable: None,
    },
    Keybinding {
        group: Group::Scrolling,
        keys: "PgDn/PgUp",
        description: "Scroll a page",
        matcher: key(KeyCode::PageUp),
        action: Some(Action::PageUp),
        overridable: None,
    },
    Keybinding {
        group: Group::Scrolling,
        keys: "Ctrl+e/Ctrl+y",
        description: "Scroll a few lines",
        matcher: ctrl('e'),
        action: Some(Action::ScrollDown),
        overridable: None,
    },
    Keybinding {
        group: Group::Scrolling,
        keys: "Ctrl+e/Ctrl+y",
        description: "Scroll a few lines",
        matcher: ctrl('y'),
        action: Some(Action::ScrollUp),
        overridable: None,
    },
    Keybinding {
        group: Group::Scrolling,
        keys: "g/Home",
        description: "Back to top",
        matcher: key(KeyCode::Char('g')),
        action: Some(Action::ScrollTop),
        overridable: None,
    },
    Keybinding {
        group: Group::Scrolling,
        keys: "g/Home",
        description: "Back to top",
        matcher: key(KeyCode::Home),
        action: Some(Action::ScrollTop),
        overridable: None,
    },
    Keybinding {
        group: Group::General,
        keys: "t",
        description: "Cycle color theme",
        matcher: key(KeyCode::Char('t')),
        action: Some(Action::CycleTheme),
        overridable: Some(KeybindAction::CycleTheme),
    },
    Keybinding {
        group: Group::General,
        keys: "?",
        description: "Help",
        matcher: key(KeyCode::Char('?')),
        action: Some(Action::ToggleHelp),
        overridable: Some(KeybindAction::Help),
    },
    Keybinding {
        group: Group::General,
        keys: "q",
        description: "Quit",
        matcher: key(KeyCode::Char('q')),
        action: Some(Action::Quit),
        overridable: Some(KeybindAction::Quit),
    },
    Keybinding {
        group: Group::General,
        keys: "Ctrl+c",
        description: "Quit (always)",
        matcher: ctrl('c'),
        action: Some(Action::Quit),
        overridable: None,
    },
];

pub(crate) fn keybindings() -> &'static [Keybinding] {
    BINDINGS
}

/// Resolves key events against the catalog plus user overrides.
#[derive(Debug, Clone, Default)]
pub struct Keymap {
    overrides: KeybindOverrideTable,
}

impl Keymap {
    /// Build a keymap from configured overrides.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure; callers fall back to
    /// `Keymap::default()`.
    pub fn from_overrides(overrides: &KeybindOverrides) -> Result<Self, KeybindError> {
        Ok(Self {
            overrides: KeybindOverrideTable::from_overrides(overrides)?,
        })
    }

    /// Resolve a key press to an action, if it is bound.
    pub fn resolve(&self, key: KeyEvent) -> Option<Action> {
        if let Some(action) = self.overrides.resolve(key) {
            return Some(action);
        }

        BINDINGS
            .iter()
            .filter(|binding| !self.is_overridden(binding))
            .find_map(|binding| binding.matcher.resolve(key, binding.action))
    }

    fn is_overridden(&self, binding: &Keybinding) -> bool {
        binding
            .overridable
            .is_some_and(|action| self.overrides.key_for(action).is_some())
    }

    /// Keys to display for a binding, reflecting overrides.
    pub(crate) fn display_keys(&self, binding: &Keybinding) -> String {
        binding
            .overridable
            .and_then(|action| self.overrides.key_for(action))
            .map_or_else(|| binding.keys.to_string(), str::to_string)
    }

    /// Display label of the key that triggers `action`.
    pub fn key_label(&self, action: KeybindAction) -> String {
        if let Some(key) = self.overrides.key_for(action) {
            return key.to_string();
        }
        BINDINGS
            .iter()
            .find(|binding| binding.overridable == Some(action))
            .map(|binding| binding.keys.to_string())
            .unwrap_or_default()
    }

    /// Number of active overrides.
    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }
}

//! Help popup text from the centralized keybinding catalog.
//!
//! Invariants:
//! - Rendering order is stable across runs.
//! - Keys reflect user overrides.

use crate::input::keymap::{Group, Keymap, keybindings};

/// One help row: keys, then what they do.
pub(crate) type HelpEntry = (String, &'static str);

/// Catalog entries for `group`, deduplicated, with override-aware keys.
pub(crate) fn entries(keymap: &Keymap, group: Group) -> Vec<HelpEntry> {
    let mut out: Vec<HelpEntry> = Vec::new();
    for binding in keybindings().iter().filter(|b| b.group == group) {
        let entry = (keymap.display_keys(binding), binding.description);
        if !out.contains(&entry) {
            out.push(entry);
        }
    }
    out
}

/// Full help text, grouped and column-aligned.
pub fn help_text(keymap: &Keymap) -> String {
    let mut out = String::new();
    for group in Group::ORDER {
        let entries = entries(keymap, group);
        if entries.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(group.title());
        out.push('\n');
        let width = entries
            .iter()
            .map(|(keys, _)| keys.chars().count())
            .max()
            .unwrap_or(0);
        for (keys, description) in entries {
            let padding = width.saturating_sub(keys.chars().count()) + 2;
            out.push_str("  ");
            out.push_str(&keys);
            out.push_str(&" ".repeat(padding));
            out.push_str(description);
            out.push('\n');
        }
    }
    out
}

/// Compact hints for the footer bar.
pub fn footer_hints(keymap: &Keymap) -> Vec<(String, &'static str)> {
    use prompt_guide_config::KeybindAction;

    vec![
        (
            format!(
                "{} {}",
                keymap.key_label(KeybindAction::NextSection),
                keymap.key_label(KeybindAction::PreviousSection)
            ),
            "Move",
        ),
        (keymap.key_label(KeybindAction::Toggle), "Open/close"),
        ("1-4".to_string(), "Jump"),
        (keymap.key_label(KeybindAction::Help), "Help"),
        (keymap.key_label(KeybindAction::Quit), "Quit"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use prompt_guide_config::{KeybindAction, KeybindOverrides};
    use std::collections::BTreeMap;

    #[test]
    fn help_lists_groups_in_order() {
        let text = help_text(&Keymap::default());
        let sections = text.find("Sections").unwrap();
        let scrolling = text.find("Scrolling").unwrap();
        let general = text.find("General").unwrap();
        assert!(sections < scrolling && scrolling < general);
    }

    #[test]
    fn help_deduplicates_shared_rows() {
        let text = help_text(&Keymap::default());
        assert_eq!(text.matches("Next section").count(), 1);
        assert_eq!(text.matches("Expand or collapse\n").count(), 1);
    }

    #[test]
    fn help_reflects_overrides() {
        let overrides = KeybindOverrides {
            overrides: BTreeMap::from([(KeybindAction::Quit, "F10".to_string())]),
        };
        let keymap = Keymap::from_overrides(&overrides).unwrap();
        let text = help_text(&keymap);
        assert!(text.contains("F10"));
        assert!(footer_hints(&keymap).contains(&("F10".to_string(), "Quit")));
    }

    #[test]
    fn footer_uses_default_keys() {
        let hints = footer_hints(&Keymap::default());
        assert_eq!(hints[0].0, "j/↓ k/↑");
        assert!(hints.contains(&("?".to_string(), "Help")));
    }
}

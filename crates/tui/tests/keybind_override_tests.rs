//! Keybinding overrides flowing from config into the running app.

mod helpers;

use std::collections::BTreeMap;

use helpers::{TuiHarness, back_tab_key, ctrl_key, enter_key, key, up_key};
use prompt_guide::App;
use prompt_guide::input::Keymap;
use prompt_guide::input::help::help_text;
use prompt_guide::{SectionId, Selection};
use prompt_guide_config::keybind::KeybindError;
use prompt_guide_config::{ColorTheme, KeybindAction, KeybindOverrides};

fn overrides(pairs: &[(KeybindAction, &str)]) -> KeybindOverrides {
    KeybindOverrides {
        overrides: pairs
            .iter()
            .map(|(action, key)| (*action, key.to_string()))
            .collect::<BTreeMap<_, _>>(),
    }
}

fn harness_with(pairs: &[(KeybindAction, &str)]) -> TuiHarness {
    let keymap = Keymap::from_overrides(&overrides(pairs)).unwrap();
    TuiHarness::with_app(App::new(ColorTheme::Default, keymap), 100, 40)
}

#[test]
fn overridden_toggle_key_replaces_enter() {
    let mut harness = harness_with(&[(KeybindAction::Toggle, "o")]);
    harness.press(enter_key());
    assert_eq!(harness.app.selection, Selection::Collapsed);
    harness.press(key('o'));
    assert_eq!(
        harness.app.selection,
        Selection::Expanded(SectionId::Instruccion)
    );
}

#[test]
fn overridden_quit_key_quits_and_ctrl_c_still_works() {
    let mut harness = harness_with(&[(KeybindAction::Quit, "Ctrl+q")]);
    assert!(harness.press(key('q')));
    assert!(!harness.press(ctrl_key('q')));
    assert!(!harness.press(ctrl_key('c')));
}

#[test]
fn footer_and_help_show_override_labels() {
    let mut harness = harness_with(&[(KeybindAction::Help, "F1")]);
    let output = harness.render();
    assert!(output.contains("F1 Help"));

    let text = help_text(&harness.app.keymap);
    assert!(text.contains("F1"));
}

#[test]
fn conflicting_overrides_fail_validation() {
    let err = Keymap::from_overrides(&overrides(&[
        (KeybindAction::NextSection, "n"),
        (KeybindAction::PreviousSection, "n"),
    ]))
    .unwrap_err();
    assert!(matches!(err, KeybindError::Conflict { .. }));
}

#[test]
fn back_tab_override_moves_focus_back() {
    for spelling in ["BackTab", "Shift+Tab"] {
        let mut harness = harness_with(&[(KeybindAction::PreviousSection, spelling)]);
        harness.press(up_key());
        assert_eq!(harness.app.focused, SectionId::Instruccion, "{spelling}");
        harness.press(back_tab_key());
        assert_eq!(harness.app.focused, SectionId::Output, "{spelling}");
    }
}

#[test]
fn shifted_and_uppercase_spellings_conflict() {
    let err = Keymap::from_overrides(&overrides(&[
        (KeybindAction::NextSection, "Shift+n"),
        (KeybindAction::PreviousSection, "N"),
    ]))
    .unwrap_err();
    assert!(matches!(err, KeybindError::Conflict { .. }));
}

#[test]
fn syntax_errors_name_the_action() {
    let err = Keymap::from_overrides(&overrides(&[(KeybindAction::CycleTheme, "Ctrl+")]))
        .unwrap_err();
    assert!(matches!(
        err,
        KeybindError::InvalidBinding {
            action: KeybindAction::CycleTheme,
            ..
        }
    ));
}

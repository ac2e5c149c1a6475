//! Mouse handling: clicking section titles and wheel scrolling.

mod helpers;

use helpers::{TuiHarness, key, mouse_click, mouse_scroll_down};
use prompt_guide::{SectionId, Selection};

#[test]
fn clicking_a_title_toggles_that_section() {
    let mut harness = TuiHarness::new(100, 40);
    harness.render();

    let row = harness.app.view.row_of(SectionId::Contexto).unwrap();
    let y = harness.screen_row(row);
    harness.mouse(mouse_click(10, y));
    assert_eq!(harness.app.selection, Selection::Expanded(SectionId::Contexto));
    assert_eq!(harness.app.focused, SectionId::Contexto);

    harness.render();
    let row = harness.app.view.row_of(SectionId::Contexto).unwrap();
    let y = harness.screen_row(row);
    harness.mouse(mouse_click(10, y));
    assert_eq!(harness.app.selection, Selection::Collapsed);
}

#[test]
fn clicking_body_text_does_nothing() {
    let mut harness = TuiHarness::new(100, 40);
    harness.render();
    // Row 0 of the guide is the page title.
    let y = harness.screen_row(0);
    harness.mouse(mouse_click(10, y));
    assert_eq!(harness.app.selection, Selection::Collapsed);
}

#[test]
fn clicks_outside_the_body_are_ignored() {
    let mut harness = TuiHarness::new(100, 40);
    harness.render();
    harness.mouse(mouse_click(0, 0));
    harness.mouse(mouse_click(50, 39));
    assert_eq!(harness.app.selection, Selection::Collapsed);
}

#[test]
fn clicks_account_for_scroll() {
    let mut harness = TuiHarness::new(60, 14);
    harness.press(key('1'));
    harness.render();

    let row = harness.app.view.row_of(SectionId::Contexto).unwrap();
    let viewport = usize::from(harness.app.body_area.height);
    for _ in 0..20 {
        if row >= harness.app.scroll && row < harness.app.scroll + viewport {
            break;
        }
        harness.mouse(mouse_scroll_down(10, 5));
        harness.render();
    }
    assert!(harness.app.scroll > 0);

    let y = harness.screen_row(row);
    assert!(y < harness.app.body_area.bottom());
    harness.mouse(mouse_click(5, y));
    assert_eq!(harness.app.selection, Selection::Expanded(SectionId::Contexto));
}

#[test]
fn mouse_is_ignored_while_help_is_open() {
    let mut harness = TuiHarness::new(100, 40);
    harness.render();
    let y = harness.screen_row(harness.app.view.row_of(SectionId::Datos).unwrap());
    harness.press(key('?'));
    harness.mouse(mouse_click(10, y));
    assert_eq!(harness.app.selection, Selection::Collapsed);
}

//! Application state and rendering.
//!
//! The module is organized into submodules:
//! - `actions`: applying Actions to state
//! - `input`: keyboard input resolution
//! - `mouse`: mouse event handling
//! - `render`: frame layout and drawing

mod actions;
mod input;
mod mouse;
mod render;


use prompt_guide_config::{ColorTheme, Theme};
use ratatui::layout::Rect;

use crate::content::SectionId;
use crate::input::Keymap;
use crate::selection::Selection;
use crate::ui::Toast;
use crate::ui::guide::GuideView;

/// Height of the footer bar, borders included.
pub const FOOTER_HEIGHT: u16 = 3;

/// Main application state.
pub struct App {
    /// Which section, if any, is expanded.
    pub selection: Selection,
    /// Section under the keyboard cursor.
    pub focused: SectionId,
    /// First guide row shown in the body.
    pub scroll: usize,
    pub show_help: bool,
    pub color_theme: ColorTheme,
    pub theme: Theme,
    pub toasts: Vec<Toast>,
    pub keymap: Keymap,

    /// Full frame area at the last render.
    pub last_area: Rect,
    /// Text area of the guide body at the last render.
    pub body_area: Rect,
    /// Guide as last rendered; used for hit-testing and scroll limits.
    pub view: GuideView,
    /// Scroll the focused section into view on the next render.
    follow_focus: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new(ColorTheme::default(), Keymap::default())
    }
}

impl App {
    pub fn new(color_theme: ColorTheme, keymap: Keymap) -> Self {
        Self {
            selection: Selection::default(),
            focused: SectionId::Instruccion,
            scroll: 0,
            show_help: false,
            color_theme,
            theme: Theme::from_color_theme(color_theme),
            toasts: Vec::new(),
            keymap,
            last_area: Rect::default(),
            body_area: Rect::default(),
            view: GuideView::default(),
            follow_focus: false,
        }
    }

    /// Rows the body can scroll past before the last row reaches the bottom.
    fn max_scroll(&self) -> usize {
        self.view
            .height()
            .saturating_sub(usize::from(self.body_area.height))
    }
}

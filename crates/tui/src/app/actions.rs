//! Action handling for the TUI app.
//!
//! Does NOT handle:
//! - Resolving raw key or mouse events (see `input` and `mouse`).

use prompt_guide_config::Theme;
use prompt_guide_config::constants::{DEFAULT_PAGE_SCROLL_ROWS, DEFAULT_WHEEL_SCROLL_ROWS};
use ratatui::layout::Rect;

use crate::action::Action;
use crate::app::App;
use crate::content::SectionId;
use crate::error::GuideError;
use crate::selection::Selection;
use crate::ui::Toast;

impl App {
    /// Apply an action to the state.
    pub fn update(&mut self, action: Action) {
        match action {
            Action::Toggle(id) => self.toggle(id),
            Action::TogglePosition(position) => {
                match SectionId::from_position(position) {
                    Ok(id) => self.toggle(id),
                    Err(e) => self.report(&e),
                }
            }
            Action::ToggleFocused => self.toggle(self.focused),
            Action::FocusNext => self.move_focus(1),
            Action::FocusPrevious => self.move_focus(SectionId::ALL.len() - 1),
            Action::CollapseAll => {
                self.selection = Selection::Collapsed;
                self.follow_focus = true;
            }
            Action::ScrollUp => self.scroll_by(-i64::from(DEFAULT_WHEEL_SCROLL_ROWS)),
            Action::ScrollDown => self.scroll_by(i64::from(DEFAULT_WHEEL_SCROLL_ROWS)),
            Action::PageUp => self.scroll_by(-self.page_rows()),
            Action::PageDown => self.scroll_by(self.page_rows()),
            Action::ScrollTop => {
                self.scroll = 0;
                self.follow_focus = false;
            }
            Action::ToggleHelp => self.show_help = !self.show_help,
            Action::CycleTheme => {
                self.color_theme = self.color_theme.cycle_next();
                self.theme = Theme::from_color_theme(self.color_theme);
                tracing::info!(theme = %self.color_theme, "Theme changed");
                self.toasts.push(Toast::info(format!(
                    "Theme: {}",
                    self.color_theme.display_name()
                )));
            }
            Action::Tick => self.toasts.retain(|toast| !toast.is_expired()),
            Action::Resize(width, height) => {
                tracing::debug!(width, height, "Terminal resized");
                self.last_area = Rect::new(0, 0, width, height);
                self.follow_focus = true;
            }
            Action::Input(_) | Action::Mouse(_) => {
                tracing::debug!(?action, "Raw event reached update; ignoring");
            }
            Action::Quit => {}
        }
    }

    /// Toggle a section by its raw id.
    ///
    /// # Errors
    ///
    /// Returns `GuideError::InvalidSectionId` for ids outside the content
    /// table; the state is left unchanged.
    pub fn select(&mut self, raw_id: &str) -> Result<(), GuideError> {
        let id = raw_id.parse::<SectionId>()?;
        self.toggle(id);
        Ok(())
    }

    fn toggle(&mut self, id: SectionId) {
        self.selection = self.selection.toggle(id);
        self.focused = id;
        self.follow_focus = true;
        tracing::debug!(section = %id, expanded = ?self.selection.active(), "Section toggled");
    }

    fn move_focus(&mut self, step: usize) {
        let count = SectionId::ALL.len();
        let next = (self.focused.position() + step) % count;
        self.focused = SectionId::ALL[next];
        self.follow_focus = true;
    }

    fn scroll_by(&mut self, delta: i64) {
        let target = i64::try_from(self.scroll).unwrap_or(i64::MAX).saturating_add(delta);
        let max = i64::try_from(self.max_scroll()).unwrap_or(i64::MAX);
        self.scroll = usize::try_from(target.clamp(0, max)).unwrap_or(0);
        self.follow_focus = false;
    }

    fn page_rows(&self) -> i64 {
        match self.body_area.height {
            0 | 1 => i64::from(DEFAULT_PAGE_SCROLL_ROWS),
            height => i64::from(height - 1),
        }
    }

    fn report(&mut self, error: &GuideError) {
        tracing::warn!(error = %error, "Ignoring request");
        self.toasts.push(Toast::warning(error.to_string()));
    }

    /// Bring the focused section into view, then keep the scroll in range.
    pub(crate) fn settle_scroll(&mut self) {
        let viewport = usize::from(self.body_area.height);
        if std::mem::take(&mut self.follow_focus)
            && let Some((start, end)) = self.view.extent_of(self.focused)
        {
            if start < self.scroll {
                self.scroll = start;
            } else if end > self.scroll + viewport {
                self.scroll = start.min(end.saturating_sub(viewport));
            }
        }
        self.scroll = self.scroll.min(self.max_scroll());
    }
}

//! TUI-specific theme helpers and style builders.
//!
//! Extends `prompt_guide_config::Theme` with helpers for building ratatui
//! `Style`s consistently across the guide, the popups and the toasts.

use prompt_guide_config::Theme;
use ratatui::style::{Modifier, Style};

use crate::content::SectionId;

/// Trait extending Theme with helper methods for creating styled widgets.
pub trait ThemeExt {
    /// Screen fill behind every widget.
    fn background(&self) -> Style;
    /// Base text style.
    fn text(&self) -> Style;
    fn text_dim(&self) -> Style;
    /// Page title (title color + bold).
    fn title(&self) -> Style;
    fn border(&self) -> Style;
    fn border_focused(&self) -> Style;
    /// Row under the keyboard cursor.
    fn highlight(&self) -> Style;
    fn warning(&self) -> Style;
    fn info(&self) -> Style;
    /// Section title in its badge color.
    fn section(&self, id: SectionId) -> Style;
    /// Bold label for a callout in `color`.
    fn label(&self, color: ratatui::style::Color) -> Style;
    fn example(&self) -> Style;
}

impl ThemeExt for Theme {
    fn background(&self) -> Style {
        Style::default().bg(self.background)
    }

    fn text(&self) -> Style {
        Style::default().fg(self.text)
    }

    fn text_dim(&self) -> Style {
        Style::default().fg(self.text_dim)
    }

    fn title(&self) -> Style {
        Style::default()
            .fg(self.title)
            .add_modifier(Modifier::BOLD)
    }

    fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    fn border_focused(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    fn highlight(&self) -> Style {
        Style::default()
            .fg(self.highlight_fg)
            .bg(self.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }

    fn warning(&self) -> Style {
        Style::default().fg(self.warning)
    }

    fn info(&self) -> Style {
        Style::default().fg(self.info)
    }

    fn section(&self, id: SectionId) -> Style {
        let color = match id {
            SectionId::Instruccion => self.section_instruction,
            SectionId::Contexto => self.section_context,
            SectionId::Datos => self.section_attachments,
            SectionId::Output => self.section_output,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    fn label(&self, color: ratatui::style::Color) -> Style {
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    fn example(&self) -> Style {
        Style::default()
            .fg(self.text_dim)
            .add_modifier(Modifier::ITALIC)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prompt_guide_config::ColorTheme;

    #[test]
    fn sections_use_distinct_badge_colors() {
        let theme = Theme::from_color_theme(ColorTheme::Default);
        let styles: Vec<Style> = SectionId::ALL.iter().map(|id| theme.section(*id)).collect();
        for (i, a) in styles.iter().enumerate() {
            for b in &styles[i + 1..] {
                assert_ne!(a.fg, b.fg);
            }
        }
    }

    #[test]
    fn background_only_sets_bg() {
        let theme = Theme::from_color_theme(ColorTheme::Light);
        let style = theme.background();
        assert_eq!(style.bg, Some(theme.background));
        assert_eq!(style.fg, None);
    }

    #[test]
    fn highlight_sets_both_colors() {
        let theme = Theme::from_color_theme(ColorTheme::Dark);
        let style = theme.highlight();
        assert_eq!(style.fg, Some(theme.highlight_fg));
        assert_eq!(style.bg, Some(theme.highlight_bg));
    }
}

//! Rendering logic for the TUI app.
//!
//! Responsibilities:
//! - Lay out the guide body and the footer.
//! - Rebuild the guide for the current width and keep the scroll in range.
//! - Overlay toasts and the help popup.
//!
//! Non-responsibilities:
//! - Does NOT handle input.
//! - Does NOT change selection or focus.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
};

use crate::app::{App, FOOTER_HEIGHT};
use crate::content::SECTIONS;
use crate::input::help::footer_hints;
use crate::ui::guide::build_guide;
use crate::ui::theme::ThemeExt;
use crate::ui::{help, toast};

impl App {
    /// Render the application UI.
    pub fn render(&mut self, f: &mut Frame) {
        self.last_area = f.area();
        f.render_widget(Block::default().style(self.theme.background()), f.area());

        let [body, footer] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(FOOTER_HEIGHT)])
                .areas(f.area());

        self.render_body(f, body);
        self.render_footer(f, footer);

        toast::render_toasts(f, body, &self.toasts, &self.theme);

        if self.show_help {
            help::render_help(f, &self.keymap, &self.theme);
        }
    }

    fn render_body(&mut self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border())
            .title(Span::styled(" prompt-guide ", self.theme.title()))
            .title(
                Line::from(Span::styled(
                    format!(" {} ", self.color_theme.display_name()),
                    self.theme.text_dim(),
                ))
                .right_aligned(),
            );
        let inner = block.inner(area);
        f.render_widget(block, area);

        // Last column is reserved for the scrollbar.
        let text_area = Rect {
            width: inner.width.saturating_sub(1),
            ..inner
        };
        self.body_area = text_area;
        self.view = build_guide(
            &SECTIONS,
            self.selection,
            Some(self.focused),
            &self.theme,
            text_area.width,
        );
        self.settle_scroll();

        let viewport = usize::from(text_area.height);
        let visible: Vec<Line<'static>> = self
            .view
            .lines
            .iter()
            .skip(self.scroll)
            .take(viewport)
            .cloned()
            .collect();
        f.render_widget(Paragraph::new(visible).style(self.theme.text()), text_area);

        if self.view.height() > viewport && !inner.is_empty() {
            let scrollbar = Scrollbar::default()
                .orientation(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓"))
                .style(self.theme.border());
            let mut state = ScrollbarState::new(self.max_scroll())
                .position(self.scroll)
                .viewport_content_length(viewport);
            f.render_stateful_widget(scrollbar, inner, &mut state);
        }
    }

    fn render_footer(&self, f: &mut Frame, area: Rect) {
        let mut spans = vec![Span::raw(" ")];
        for (i, (keys, label)) in footer_hints(&self.keymap).into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", self.theme.border()));
            }
            spans.push(Span::styled(keys, self.theme.border_focused()));
            spans.push(Span::styled(format!(" {label}"), self.theme.text_dim()));
        }

        let footer = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(self.theme.border()),
        );
        f.render_widget(footer, area);
    }
}

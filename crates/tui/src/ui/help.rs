//! Help popup rendering.

use prompt_guide_config::{KeybindAction, Theme};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::input::Keymap;
use crate::input::help::help_text;
use crate::ui::theme::ThemeExt;

pub const POPUP_WIDTH_PERCENT: u16 = 60;
pub const POPUP_HEIGHT_PERCENT: u16 = 70;

/// Render the help popup centered over the whole frame.
pub fn render_help(f: &mut Frame, keymap: &Keymap, theme: &Theme) {
    let area = centered_rect(POPUP_WIDTH_PERCENT, POPUP_HEIGHT_PERCENT, f.area());

    let mut lines: Vec<Line> = help_text(keymap)
        .lines()
        .map(|line| {
            if line.starts_with(' ') {
                Line::styled(line.to_string(), theme.text())
            } else {
                Line::styled(line.to_string(), theme.title())
            }
        })
        .collect();
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        format!("Esc or {} to close", keymap.key_label(KeybindAction::Help)),
        theme.text_dim(),
    )));

    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(theme.border_focused()),
        ),
        area,
    );
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(r);
    let [area] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(row);
    area
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_is_centered() {
        let area = centered_rect(50, 50, Rect::new(0, 0, 100, 40));
        assert_eq!(area, Rect::new(25, 10, 50, 20));
    }
}

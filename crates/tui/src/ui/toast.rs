//! Toast notifications for transient feedback.
//!
//! Toasts stack in the bottom-right corner above the footer. Each has a
//! unique id, a severity level and a TTL after which `App` prunes it on tick.

use std::time::{Duration, Instant};

use prompt_guide_config::Theme;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use uuid::Uuid;

use crate::ui::theme::ThemeExt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Warning,
}

impl ToastLevel {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warning => "WARN",
        }
    }

    pub fn ttl(&self) -> Duration {
        match self {
            Self::Info | Self::Warning => Duration::from_secs(4),
        }
    }
}

/// A single toast notification.
#[derive(Debug, Clone)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub level: ToastLevel,
    pub created_at: Instant,
    pub ttl: Duration,
}

impl Toast {
    pub fn new(message: String, level: ToastLevel) -> Self {
        Self {
            id: Uuid::new_v4(),
            message,
            level,
            created_at: Instant::now(),
            ttl: level.ttl(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.ttl
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Info)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Warning)
    }
}

/// Maximum number of toasts shown at once; older ones wait off-screen.
const MAX_TOASTS: usize = 3;
const TOAST_HEIGHT: u16 = 3;
const TOAST_WIDTH: u16 = 50;

/// Render active toasts stacked in the bottom-right corner of `area`.
///
/// Does nothing when `area` is too small to hold them.
pub fn render_toasts(f: &mut Frame, area: Rect, toasts: &[Toast], theme: &Theme) {
    let active: Vec<&Toast> = toasts.iter().filter(|t| !t.is_expired()).collect();
    if active.is_empty() {
        return;
    }
    let active = &active[active.len().saturating_sub(MAX_TOASTS)..];

    let total_height = active.len() as u16 * TOAST_HEIGHT;
    if area.height < total_height + 1 || area.width < TOAST_WIDTH + 2 {
        return;
    }

    let stack = Rect {
        x: area.x + area.width - TOAST_WIDTH - 1,
        y: area.y + area.height - total_height - 1,
        width: TOAST_WIDTH,
        height: total_height,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(TOAST_HEIGHT); active.len()])
        .split(stack);

    for (toast, chunk) in active.iter().zip(chunks.iter()) {
        render_single_toast(f, toast, *chunk, theme);
    }
}

fn render_single_toast(f: &mut Frame, toast: &Toast, area: Rect, theme: &Theme) {
    let style = match toast.level {
        ToastLevel::Info => theme.info(),
        ToastLevel::Warning => theme.warning(),
    };

    let max_chars = area.width.saturating_sub(4 + 6) as usize;
    let message: String = if toast.message.chars().count() > max_chars {
        let mut cut: String = toast.message.chars().take(max_chars.saturating_sub(3)).collect();
        cut.push_str("...");
        cut
    } else {
        toast.message.clone()
    };

    let line = Line::from(vec![
        Span::styled(
            format!("{} ", toast.level.label()),
            style.add_modifier(Modifier::BOLD),
        ),
        Span::styled(message, theme.text()),
    ]);

    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(style),
        ),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_toast_is_not_expired() {
        let toast = Toast::warning("Unknown section '7'");
        assert!(!toast.is_expired());
        assert_eq!(toast.level, ToastLevel::Warning);
        assert_eq!(toast.ttl, ToastLevel::Warning.ttl());
    }

    #[test]
    fn zero_ttl_expires_immediately() {
        let mut toast = Toast::info("x");
        toast.ttl = Duration::ZERO;
        assert!(toast.is_expired());
    }

    #[test]
    fn ids_are_unique() {
        assert_ne!(Toast::info("a").id, Toast::info("a").id);
    }
}

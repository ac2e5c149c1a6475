//! Theme types for the prompt guide.
//!
//! Responsibilities:
//! - Define user-selectable color themes (`ColorTheme`).
//! - Define the expanded runtime `Theme` with all color values.
//! - Provide conversion from `ColorTheme` to `Theme`.
//!
//! Does NOT handle:
//! - Actual rendering (see TUI crate).
//!
//! Invariants:
//! - `ColorTheme` is the configured representation; `Theme` is the runtime representation.
//! - `Theme` is intentionally NOT serializable.
//! - Colors are semantically named (tip/alternative/problem/solution) for consistent usage.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// User-selectable color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ColorTheme {
    #[default]
    Default,
    Light,
    Dark,
    HighContrast,
    Monochrome,
}

impl ColorTheme {
    /// All themes in cycle order.
    pub const ALL: [ColorTheme; 5] = [
        Self::Default,
        Self::Light,
        Self::Dark,
        Self::HighContrast,
        Self::Monochrome,
    ];

    /// Human-readable display name for UI surfaces.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::HighContrast => "High Contrast",
            Self::Monochrome => "Monochrome",
        }
    }

    /// Config/CLI identifier (matches the serde representation).
    pub fn id(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Light => "light",
            Self::Dark => "dark",
            Self::HighContrast => "high_contrast",
            Self::Monochrome => "monochrome",
        }
    }

    /// Next theme in the cycle (bound to the "t" key).
    pub fn cycle_next(self) -> Self {
        match self {
            Self::Default => Self::Light,
            Self::Light => Self::Dark,
            Self::Dark => Self::HighContrast,
            Self::HighContrast => Self::Monochrome,
            Self::Monochrome => Self::Default,
        }
    }
}

impl fmt::Display for ColorTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ColorTheme {
    type Err = String;

    /// Accepts snake_case ids plus kebab-case and space-separated spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        Self::ALL
            .into_iter()
            .find(|theme| theme.id() == normalized)
            .ok_or_else(|| s.trim().to_string())
    }
}

/// Expanded runtime theme.
///
/// Invariants:
/// - This is intentionally **not serialized**. Configure `ColorTheme` and expand on startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    // Global / chrome
    pub background: Color,
    pub text: Color,
    pub text_dim: Color,
    pub border: Color,
    pub title: Color,
    pub accent: Color,

    // Selection / highlight
    pub highlight_fg: Color,
    pub highlight_bg: Color,

    // Semantics
    pub warning: Color,
    pub info: Color,

    // Section badges, in content table order
    pub section_instruction: Color,
    pub section_context: Color,
    pub section_attachments: Color,
    pub section_output: Color,

    // Callouts
    pub tip: Color,
    pub alternative: Color,
    pub problem: Color,
    pub solution: Color,
    pub improved: Color,
    pub bonus: Color,
}

impl Theme {
    /// Expand a configured `ColorTheme` into a full runtime palette.
    pub fn from_color_theme(theme: ColorTheme) -> Self {
        match theme {
            ColorTheme::Default => Self {
                background: Color::Reset,
                text: Color::White,
                text_dim: Color::Gray,
                border: Color::Magenta,
                title: Color::Magenta,
                accent: Color::LightMagenta,

                highlight_fg: Color::White,
                highlight_bg: Color::DarkGray,
                warning: Color::Yellow,
                info: Color::Cyan,

                section_instruction: Color::Magenta,
                section_context: Color::Blue,
                section_attachments: Color::Green,
                section_output: Color::Indexed(208),

                tip: Color::Yellow,
                alternative: Color::LightBlue,
                problem: Color::LightRed,
                solution: Color::LightGreen,
                improved: Color::LightMagenta,
                bonus: Color::LightMagenta,
            },
            ColorTheme::Light => Self {
                background: Color::White,
                text: Color::Black,
                text_dim: Color::DarkGray,
                border: Color::Magenta,
                title: Color::Magenta,
                accent: Color::Blue,

                highlight_fg: Color::Black,
                highlight_bg: Color::Gray,
                warning: Color::Indexed(136),
                info: Color::Blue,

                section_instruction: Color::Magenta,
                section_context: Color::Blue,
                section_attachments: Color::Green,
                section_output: Color::Indexed(166),

                tip: Color::Indexed(136),
                alternative: Color::Blue,
                problem: Color::Red,
                solution: Color::Green,
                improved: Color::Magenta,
                bonus: Color::Magenta,
            },
            ColorTheme::Dark => Self {
                background: Color::Black,
                text: Color::White,
                text_dim: Color::Gray,
                border: Color::Indexed(141), // soft purple
                title: Color::Indexed(141),
                accent: Color::Indexed(213), // pink

                highlight_fg: Color::White,
                highlight_bg: Color::Indexed(236),
                warning: Color::Yellow,
                info: Color::Indexed(110),

                section_instruction: Color::Indexed(141),
                section_context: Color::Indexed(75),
                section_attachments: Color::Indexed(114),
                section_output: Color::Indexed(214),

                tip: Color::Indexed(221),
                alternative: Color::Indexed(110),
                problem: Color::Indexed(203),
                solution: Color::Indexed(114),
                improved: Color::Indexed(213),
                bonus: Color::Indexed(213),
            },
            ColorTheme::HighContrast => Self {
                background: Color::Black,
                text: Color::White,
                text_dim: Color::White,
                border: Color::White,
                title: Color::White,
                accent: Color::Yellow,

                highlight_fg: Color::White,
                highlight_bg: Color::Blue,
                warning: Color::Yellow,
                info: Color::Cyan,

                section_instruction: Color::LightMagenta,
                section_context: Color::LightCyan,
                section_attachments: Color::LightGreen,
                section_output: Color::LightYellow,

                tip: Color::Yellow,
                alternative: Color::Cyan,
                problem: Color::Red,
                solution: Color::Green,
                improved: Color::LightMagenta,
                bonus: Color::Yellow,
            },
            ColorTheme::Monochrome => Self {
                background: Color::Black,
                text: Color::White,
                text_dim: Color::Gray,
                border: Color::Gray,
                title: Color::White,
                accent: Color::White,

                highlight_fg: Color::Black,
                highlight_bg: Color::Gray,
                warning: Color::White,
                info: Color::White,

                section_instruction: Color::White,
                section_context: Color::White,
                section_attachments: Color::White,
                section_output: Color::White,

                tip: Color::Gray,
                alternative: Color::Gray,
                problem: Color::Gray,
                solution: Color::Gray,
                improved: Color::White,
                bonus: Color::White,
            },
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_color_theme(ColorTheme::Default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_visits_every_theme_once() {
        let mut seen = vec![ColorTheme::Default];
        let mut current = ColorTheme::Default.cycle_next();
        while current != ColorTheme::Default {
            assert!(!seen.contains(&current), "{current} visited twice");
            seen.push(current);
            current = current.cycle_next();
        }
        assert_eq!(seen.len(), ColorTheme::ALL.len());
    }

    #[test]
    fn test_from_str_accepts_spellings() {
        assert_eq!("dark".parse::<ColorTheme>(), Ok(ColorTheme::Dark));
        assert_eq!(
            "High-Contrast".parse::<ColorTheme>(),
            Ok(ColorTheme::HighContrast)
        );
        assert_eq!(
            " high contrast ".parse::<ColorTheme>(),
            Ok(ColorTheme::HighContrast)
        );
        assert_eq!("neon".parse::<ColorTheme>(), Err("neon".to_string()));
    }

    #[test]
    fn test_id_matches_serde_representation() {
        for theme in ColorTheme::ALL {
            let json = serde_json::to_string(&theme).unwrap();
            assert_eq!(json, format!("\"{}\"", theme.id()));
        }
    }

    #[test]
    fn test_monochrome_has_no_hue() {
        let theme = Theme::from_color_theme(ColorTheme::Monochrome);
        for color in [theme.tip, theme.problem, theme.solution, theme.section_output] {
            assert!(matches!(color, Color::White | Color::Gray));
        }
    }
}

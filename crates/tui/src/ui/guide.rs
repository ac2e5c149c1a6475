//! Guide body rendering.
//!
//! Responsibilities:
//! - Derive the full guide (header, sections, bonus tips, closing note) as
//!   pre-wrapped lines from the content table and the current selection.
//! - Record which row carries each section title for mouse hit-testing.
//!
//! Does NOT handle:
//! - Scrolling or borders (see `app::render`).
//!
//! Invariants:
//! - `build_guide` is pure: equal inputs yield an equal `GuideView`.
//! - One `Line` is one terminal row; lines are never re-wrapped downstream.
//! - Every section appears once, in table order; only the expanded one shows
//!   its body.

use prompt_guide_config::Theme;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::content::{
    ALTERNATIVE_LABEL, BASIC_LABEL, BONUS_INTRO, BONUS_TIPS, BONUS_TITLE, CLOSING_LABEL,
    CLOSING_MESSAGE, IMPROVED_LABEL, PAGE_SUBTITLE, PAGE_TITLE, PROBLEM_LABEL, SOLUTION_LABEL,
    Section, SectionExample, SectionId, TIP_LABEL,
};
use crate::selection::Selection;
use crate::ui::theme::ThemeExt;

const COLLAPSED_MARKER: &str = "▸";
const EXPANDED_MARKER: &str = "▾";
const FOCUS_MARKER: &str = "›";
const BODY_INDENT: usize = 5;
const EXAMPLE_INDENT: usize = 7;
const MIN_WIDTH: usize = 20;

/// Display tree for the guide body.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GuideView {
    pub lines: Vec<Line<'static>>,
    /// `(row, id)` for every section title, in table order.
    pub title_rows: Vec<(usize, SectionId)>,
    /// First row after the last section.
    pub sections_end: usize,
}

impl GuideView {
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Section whose title sits on `row`.
    pub fn section_at(&self, row: usize) -> Option<SectionId> {
        self.title_rows
            .iter()
            .find(|(r, _)| *r == row)
            .map(|(_, id)| *id)
    }

    pub fn row_of(&self, id: SectionId) -> Option<usize> {
        self.title_rows
            .iter()
            .find(|(_, other)| *other == id)
            .map(|(row, _)| *row)
    }

    /// Rows `[start, end)` taken by a section, title and body.
    pub fn extent_of(&self, id: SectionId) -> Option<(usize, usize)> {
        let index = self.title_rows.iter().position(|(_, other)| *other == id)?;
        let start = self.title_rows[index].0;
        let end = self
            .title_rows
            .get(index + 1)
            .map_or(self.sections_end, |(row, _)| *row);
        Some((start, end))
    }

    /// Rendered text with styling dropped, one row per line.
    pub fn plain_text(&self) -> String {
        self.lines
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|span| span.content.as_ref())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Build the guide for `width` columns.
///
/// `focused` is the section under the keyboard cursor; it is highlighted but
/// does not affect what is expanded.
pub fn build_guide(
    sections: &[Section],
    selection: Selection,
    focused: Option<SectionId>,
    theme: &Theme,
    width: u16,
) -> GuideView {
    let mut out = Builder {
        lines: Vec::new(),
        width: usize::from(width).max(MIN_WIDTH),
    };

    out.wrapped(vec![Span::raw(" ")], PAGE_TITLE, theme.title(), 1);
    out.wrapped(vec![Span::raw(" ")], PAGE_SUBTITLE, theme.text_dim(), 1);
    out.blank();

    let mut title_rows = Vec::with_capacity(sections.len());
    for (index, section) in sections.iter().enumerate() {
        let expanded = selection.is_expanded(section.id);
        title_rows.push((out.lines.len(), section.id));
        out.title(index, section, expanded, focused == Some(section.id), theme);
        if expanded {
            out.section_body(section, theme);
            out.blank();
        }
    }
    let sections_end = out.lines.len();

    out.blank();
    out.line(Line::from(Span::styled(
        format!(" ★ {BONUS_TITLE}"),
        theme.label(theme.bonus),
    )));
    out.wrapped(vec![Span::raw(" ")], BONUS_INTRO, theme.text(), 1);
    for tip in BONUS_TIPS {
        out.wrapped(
            vec![Span::styled("   • ", theme.label(theme.bonus))],
            tip,
            theme.text(),
            5,
        );
    }
    out.blank();
    out.wrapped(
        vec![
            Span::raw(" "),
            Span::styled(CLOSING_LABEL, theme.label(theme.accent)),
            Span::raw(" "),
        ],
        CLOSING_MESSAGE,
        theme.text(),
        1,
    );

    GuideView {
        lines: out.lines,
        title_rows,
        sections_end,
    }
}

struct Builder {
    lines: Vec<Line<'static>>,
    width: usize,
}

impl Builder {
    fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    fn line(&mut self, line: Line<'static>) {
        self.lines.push(line);
    }

    fn title(
        &mut self,
        index: usize,
        section: &Section,
        expanded: bool,
        focused: bool,
        theme: &Theme,
    ) {
        let marker = if focused { FOCUS_MARKER } else { " " };
        let state = if expanded {
            EXPANDED_MARKER
        } else {
            COLLAPSED_MARKER
        };
        let mut text = format!(
            "{marker} {state} {} {}. {}",
            section.icon,
            index + 1,
            section.title
        );

        let style = if focused {
            // Pad so the highlight spans the whole row.
            let used = Span::raw(text.as_str()).width();
            text.push_str(&" ".repeat(self.width.saturating_sub(used)));
            theme.highlight()
        } else {
            theme.section(section.id)
        };
        self.line(Line::from(Span::styled(text, style)));
    }

    fn section_body(&mut self, section: &Section, theme: &Theme) {
        let indent = || Span::raw(" ".repeat(BODY_INDENT));
        let labeled = |label: &'static str, color: Color| {
            vec![
                indent(),
                Span::styled(label, theme.label(color)),
                Span::raw(" "),
            ]
        };

        self.wrapped(vec![indent()], section.definition, theme.text(), BODY_INDENT);

        if let Some(tip) = section.tip {
            self.blank();
            self.wrapped(labeled(TIP_LABEL, theme.tip), tip, theme.text(), BODY_INDENT);
        }

        if let Some(alternative) = section.alternative {
            self.blank();
            self.wrapped(
                labeled(ALTERNATIVE_LABEL, theme.alternative),
                alternative,
                theme.text(),
                BODY_INDENT,
            );
        }

        let example_indent = || vec![Span::raw(" ".repeat(EXAMPLE_INDENT))];
        match section.example {
            SectionExample::BasicVsImproved { basic, improved } => {
                self.blank();
                self.line(Line::from(vec![
                    indent(),
                    Span::styled(BASIC_LABEL, theme.label(theme.text_dim)),
                ]));
                self.wrapped(example_indent(), basic, theme.example(), EXAMPLE_INDENT);
                self.line(Line::from(vec![
                    indent(),
                    Span::styled(IMPROVED_LABEL, theme.label(theme.improved)),
                ]));
                self.wrapped(
                    example_indent(),
                    improved,
                    Style::default().fg(theme.improved),
                    EXAMPLE_INDENT,
                );
            }
            SectionExample::ProblemSolution { problem, solution } => {
                self.blank();
                self.wrapped(
                    labeled(PROBLEM_LABEL, theme.problem),
                    problem,
                    theme.text(),
                    BODY_INDENT,
                );
                self.wrapped(
                    labeled(SOLUTION_LABEL, theme.solution),
                    solution,
                    theme.text(),
                    BODY_INDENT,
                );
            }
            SectionExample::Single(text) => {
                self.blank();
                self.wrapped(vec![indent()], text, theme.example(), BODY_INDENT);
            }
            SectionExample::None => {}
        }
    }

    /// Word-wrap `text` after the `lead` spans, continuing at `indent`.
    ///
    /// A single word wider than the row is left to overflow and gets clipped.
    fn wrapped(&mut self, lead: Vec<Span<'static>>, text: &str, style: Style, indent: usize) {
        let mut spans = lead;
        let mut used: usize = spans.iter().map(Span::width).sum();
        let mut buf = String::new();

        for word in text.split_whitespace() {
            let word_width = Span::raw(word).width();
            let gap = usize::from(!buf.is_empty());

            if used + gap + word_width > self.width && used > indent {
                if !buf.is_empty() {
                    spans.push(Span::styled(std::mem::take(&mut buf), style));
                }
                self.lines.push(Line::from(std::mem::take(&mut spans)));
                spans.push(Span::raw(" ".repeat(indent)));
                used = indent;
            } else if gap == 1 {
                buf.push(' ');
                used += 1;
            }

            buf.push_str(word);
            used += word_width;
        }

        if !buf.is_empty() {
            spans.push(Span::styled(buf, style));
        }
        self.lines.push(Line::from(spans));
    }
}

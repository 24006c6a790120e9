//! Tabbed result card for a finished analysis
//!
//! Shows the detected language, a tab strip over the result sections, and
//! the active section. Code sections render through [`CodeBlock`].

use chrono::{DateTime, Local};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Tabs, Widget, Wrap},
};

use codefix_app::ResultTab;
use codefix_core::AnalysisResult;

use super::CodeBlock;
use crate::theme::{palette, styles};

pub const SUCCESS_TITLE: &str = "Great Job!";
pub const SUCCESS_BODY: &str = "No syntax errors were found in your code.";

pub struct ResultCard<'a> {
    result: &'a AnalysisResult,
    tab: ResultTab,
    scroll: u16,
    copied: bool,
    analyzed_at: Option<DateTime<Local>>,
    focused: bool,
}

impl<'a> ResultCard<'a> {
    pub fn new(result: &'a AnalysisResult, tab: ResultTab) -> Self {
        Self {
            result,
            tab,
            scroll: 0,
            copied: false,
            analyzed_at: None,
            focused: false,
        }
    }

    pub fn scroll(mut self, scroll: u16) -> Self {
        self.scroll = scroll;
        self
    }

    pub fn copied(mut self, copied: bool) -> Self {
        self.copied = copied;
        self
    }

    pub fn analyzed_at(mut self, at: Option<DateTime<Local>>) -> Self {
        self.analyzed_at = at;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn render_tabs(&self, area: Rect, buf: &mut Buffer) {
        let tabs = ResultTab::available(self.result);
        let selected = tabs.iter().position(|t| *t == self.tab).unwrap_or(0);
        let titles: Vec<Line> = tabs
            .iter()
            .map(|t| {
                let label = match t {
                    ResultTab::Errors if !self.result.errors.is_empty() => {
                        format!("{} ({})", t.label(), self.result.errors.len())
                    }
                    _ => t.label().to_string(),
                };
                Line::from(label)
            })
            .collect();

        Tabs::new(titles)
            .select(selected)
            .style(styles::text_secondary())
            .highlight_style(styles::focused_selected())
            .divider(Span::styled("│", styles::text_muted()))
            .render(area, buf);
    }

    fn render_section(&self, area: Rect, buf: &mut Buffer) {
        let result = self.result;
        let code = |code: &'a str| CodeBlock::new(code).copied(self.copied).scroll(self.scroll);

        match self.tab {
            ResultTab::Errors => self.render_text(errors_lines(result), area, buf),
            ResultTab::Fix => code(result.correct_syntax.as_str())
                .label("Correct Syntax")
                .render(area, buf),
            ResultTab::Explain => self.render_text(explanation_lines(result), area, buf),
            ResultTab::Simplified => {
                let simplified = result.simplified_logic.as_deref().unwrap_or_default();
                code(simplified)
                    .label("Better Logic")
                    .caption("A cleaner way to write the same logic.")
                    .render(area, buf)
            }
            ResultTab::Final => code(result.formatted_code.as_str())
                .label("Final Result")
                .language(&result.language)
                .render(area, buf),
            ResultTab::Output => {
                let output = result.output.as_deref().unwrap_or_default();
                code(output).label("Output of Fixed Code").render(area, buf)
            }
            ResultTab::Tips => self.render_text(tips_lines(result), area, buf),
        }
    }

    fn render_text(&self, lines: Vec<Line<'a>>, area: Rect, buf: &mut Buffer) {
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .render(area, buf);
    }
}

impl Widget for ResultCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut block = styles::glass_block(self.focused).title(Span::styled(
            format!(" Detected: {} ", self.result.language),
            Style::default()
                .fg(palette::STATUS_INDIGO)
                .add_modifier(Modifier::BOLD),
        ));
        if let Some(at) = self.analyzed_at {
            block = block.title_top(
                Line::from(Span::styled(
                    format!(" analyzed {} ", at.format("%H:%M:%S")),
                    styles::text_muted(),
                ))
                .right_aligned(),
            );
        }
        block = block.title_bottom(
            Line::from(vec![
                Span::styled(" x ", styles::keybinding()),
                Span::styled("Analyze New Code ", styles::text_muted()),
            ])
            .right_aligned(),
        );

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 3 || inner.width == 0 {
            return;
        }

        let [tabs_area, _gap, section_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .areas(inner);

        self.render_tabs(tabs_area, buf);
        self.render_section(section_area, buf);
    }
}

fn errors_lines(result: &AnalysisResult) -> Vec<Line<'_>> {
    if result.errors.is_empty() {
        return vec![
            Line::from(Span::styled(
                format!("✓ {}", SUCCESS_TITLE),
                styles::status_green().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(SUCCESS_BODY, styles::status_green())),
        ];
    }

    let error_style = styles::status_red().add_modifier(Modifier::BOLD);
    let mut lines = vec![
        Line::from(Span::styled("⚠ Errors Found", error_style)),
        Line::default(),
    ];

    for (idx, error) in result.errors.iter().enumerate() {
        let mut heading = vec![
            Span::styled(format!("{}. ", idx + 1), error_style),
            Span::styled(error.kind.as_str(), error_style),
        ];
        let location = error.location_label();
        if !location.is_empty() {
            heading.push(Span::styled(" • ", styles::text_muted()));
            heading.push(Span::styled(location, styles::status_red()));
        }
        lines.push(Line::from(heading));
        lines.push(Line::from(vec![
            Span::raw("   "),
            Span::styled(error.description.as_str(), styles::text_primary()),
        ]));
        if !error.fix.trim().is_empty() {
            lines.push(Line::from(vec![
                Span::raw("   "),
                Span::styled("Fix: ", error_style),
                Span::styled(error.fix.as_str(), styles::accent()),
            ]));
        }
        lines.push(Line::default());
    }
    lines
}

fn explanation_lines(result: &AnalysisResult) -> Vec<Line<'_>> {
    let mut lines = vec![
        Line::from(Span::styled(
            "Why This Error Happened",
            styles::status_yellow().add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];
    lines.extend(
        result
            .explanation
            .lines()
            .map(|l| Line::styled(l, styles::text_primary())),
    );
    lines
}

fn tips_lines(result: &AnalysisResult) -> Vec<Line<'_>> {
    let mut lines = vec![
        Line::from(Span::styled(
            "Quick Tips to Remember",
            styles::text_bright_bold(),
        )),
        Line::default(),
    ];
    for tip in &result.learning_tips {
        lines.push(Line::from(vec![
            Span::styled("• ", styles::accent()),
            Span::styled(tip.as_str(), styles::text_secondary()),
        ]));
    }
    lines
}

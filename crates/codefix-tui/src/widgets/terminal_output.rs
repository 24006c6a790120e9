//! Console output panel for simulated runs

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::{palette, styles};

/// Shown while no output has arrived
pub const PENDING_PLACEHOLDER: &str = "...";

pub struct TerminalOutput<'a> {
    output: Option<&'a str>,
}

impl<'a> TerminalOutput<'a> {
    pub fn new(output: Option<&'a str>) -> Self {
        Self { output }
    }
}

impl Widget for TerminalOutput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false)
            .style(Style::default().bg(palette::CODE_BG))
            .title(Span::styled(" ❯ Console Output ", styles::text_secondary()))
            .title_top(Line::from(Span::styled(" [w] close ", styles::text_muted())).right_aligned());
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        match self.output {
            None => {
                Paragraph::new(Span::styled(
                    PENDING_PLACEHOLDER,
                    styles::text_muted().add_modifier(Modifier::ITALIC),
                ))
                .render(inner, buf);
            }
            Some(output) => {
                let lines: Vec<Line> = output
                    .lines()
                    .map(|l| Line::styled(l, Style::default().fg(palette::CONSOLE_TEXT)))
                    .collect();
                // Keep the tail of long output in view
                let overflow = lines.len().saturating_sub(inner.height as usize) as u16;
                Paragraph::new(lines)
                    .wrap(Wrap { trim: false })
                    .scroll((overflow, 0))
                    .render(inner, buf);
            }
        }
    }
}

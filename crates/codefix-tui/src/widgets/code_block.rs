//! Titled code viewer with copy feedback

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::{palette, styles};

pub const COPY_HINT: &str = "[y] Copy";
pub const COPIED_LABEL: &str = "✓ Copied!";

pub struct CodeBlock<'a> {
    code: &'a str,
    label: Option<&'a str>,
    language: Option<&'a str>,
    caption: Option<&'a str>,
    copied: bool,
    scroll: u16,
}

impl<'a> CodeBlock<'a> {
    pub fn new(code: &'a str) -> Self {
        Self {
            code,
            label: None,
            language: None,
            caption: None,
            copied: false,
            scroll: 0,
        }
    }

    pub fn label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    pub fn language(mut self, language: &'a str) -> Self {
        self.language = Some(language);
        self
    }

    /// Muted line shown above the code
    pub fn caption(mut self, caption: &'a str) -> Self {
        self.caption = Some(caption);
        self
    }

    /// Show "Copied!" instead of the copy hint
    pub fn copied(mut self, copied: bool) -> Self {
        self.copied = copied;
        self
    }

    pub fn scroll(mut self, scroll: u16) -> Self {
        self.scroll = scroll;
        self
    }
}

impl Widget for CodeBlock<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut block = styles::glass_block(false).style(Style::default().bg(palette::CODE_BG));

        if let Some(label) = self.label {
            block = block.title(Span::styled(
                format!(" {} ", label.to_uppercase()),
                styles::text_secondary().add_modifier(Modifier::BOLD),
            ));
        }
        if let Some(language) = self.language {
            block = block.title_top(
                Line::from(Span::styled(format!(" {} ", language), styles::text_muted()))
                    .right_aligned(),
            );
        }

        let copy = if self.copied {
            Span::styled(
                format!(" {} ", COPIED_LABEL),
                styles::status_green().add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(format!(" {} ", COPY_HINT), styles::text_muted())
        };
        block = block.title_bottom(Line::from(copy).right_aligned());

        let mut text = Text::default();
        if let Some(caption) = self.caption {
            text.lines.push(Line::styled(caption, styles::text_muted()));
            text.lines.push(Line::default());
        }
        for line in self.code.lines() {
            text.lines.push(Line::styled(line, styles::text_primary()));
        }

        Paragraph::new(text)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .render(area, buf);
    }
}

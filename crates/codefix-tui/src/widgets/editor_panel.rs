//! Code editor panel
//!
//! Renders the code buffer with a line-number gutter, the line count, and a
//! badge for the attached document. The terminal cursor is placed by the view
//! via [`EditorPanel::cursor_position`].

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use codefix_app::CodeBuffer;
use codefix_core::Attachment;

use crate::theme::{palette, styles};

const EMPTY_HINT: &str =
    "Don't worry about errors. We'll find them, explain them, and fix them for you.";

pub struct EditorPanel<'a> {
    buffer: &'a CodeBuffer,
    attachment: Option<&'a Attachment>,
    focused: bool,
}

impl<'a> EditorPanel<'a> {
    pub fn new(buffer: &'a CodeBuffer, focused: bool) -> Self {
        Self {
            buffer,
            attachment: None,
            focused,
        }
    }

    pub fn attachment(mut self, attachment: Option<&'a Attachment>) -> Self {
        self.attachment = attachment;
        self
    }

    /// Rows available for code inside `area`
    pub fn visible_lines(area: Rect, has_attachment: bool) -> usize {
        let inner = styles::glass_block(false).inner(area);
        let badge = u16::from(has_attachment);
        inner.height.saturating_sub(badge) as usize
    }

    /// Screen position of the text cursor, if it falls inside the panel
    pub fn cursor_position(&self, area: Rect) -> Option<Position> {
        let text_area = self.text_area(area);
        let (row, col) = self.buffer.cursor();
        if row < self.buffer.scroll {
            return None;
        }
        let y_offset = (row - self.buffer.scroll) as u16;
        if y_offset >= text_area.height || text_area.width == 0 {
            return None;
        }

        let line = self.buffer.lines().get(row)?;
        let prefix: String = line.chars().take(col).collect();
        let x_offset = (prefix.width() as u16).min(text_area.width.saturating_sub(1));

        Some(Position::new(text_area.x + x_offset, text_area.y + y_offset))
    }

    fn block(&self) -> Block<'static> {
        let count = self.buffer.line_count();
        let noun = if count == 1 { "line" } else { "lines" };
        styles::glass_block(self.focused)
            .title(Span::styled(
                " Paste your broken code ",
                if self.focused {
                    styles::accent_bold()
                } else {
                    styles::text_secondary()
                },
            ))
            .title_top(
                Line::from(Span::styled(
                    format!(" {} {} ", count, noun),
                    styles::text_muted(),
                ))
                .right_aligned(),
            )
    }

    fn gutter_width(&self) -> u16 {
        let digits = self.buffer.line_count().to_string().len().max(2) as u16;
        digits + 1
    }

    /// Area the code text occupies (right of the gutter, above the badge)
    fn text_area(&self, area: Rect) -> Rect {
        let inner = self.block().inner(area);
        let gutter = self.gutter_width().min(inner.width);
        let badge = u16::from(self.attachment.is_some());
        Rect::new(
            inner.x + gutter,
            inner.y,
            inner.width - gutter,
            inner.height.saturating_sub(badge),
        )
    }
}

impl Widget for EditorPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = self.block();
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let text_area = self.text_area(area);

        if self.buffer.is_blank() && self.attachment.is_none() {
            Paragraph::new(EMPTY_HINT)
                .style(styles::text_muted())
                .wrap(Wrap { trim: true })
                .render(text_area, buf);
        } else {
            let gutter_width = self.gutter_width() as usize;
            let lines: Vec<Line> = self
                .buffer
                .lines()
                .iter()
                .enumerate()
                .skip(self.buffer.scroll)
                .take(text_area.height as usize)
                .map(|(i, text)| {
                    Line::from(vec![
                        Span::styled(
                            format!("{:>width$} ", i + 1, width = gutter_width - 1),
                            Style::default().fg(palette::LINE_NUMBER),
                        ),
                        Span::styled(text.as_str(), styles::text_primary()),
                    ])
                })
                .collect();
            let code_area = Rect::new(inner.x, inner.y, inner.width, text_area.height);
            Paragraph::new(lines).render(code_area, buf);
        }

        if let Some(attachment) = self.attachment {
            let badge_area = Rect::new(inner.x, inner.bottom() - 1, inner.width, 1);
            let badge = Line::from(vec![
                Span::styled(" + ", styles::accent_bold()),
                Span::styled(attachment.name.as_str(), styles::text_primary()),
                Span::styled(
                    format!(
                        " · {} · {} ",
                        attachment.mime_type,
                        format_size(attachment.decoded_len())
                    ),
                    styles::text_muted(),
                ),
                Span::styled("[Ctrl+X remove]", styles::keybinding()),
            ]);
            Paragraph::new(badge).render(badge_area, buf);
        }
    }
}

/// Human-readable byte count
pub fn format_size(bytes: usize) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    let b = bytes as f64;
    if b >= MB {
        format!("{:.1} MB", b / MB)
    } else if b >= KB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    fn png() -> Attachment {
        Attachment {
            name: "screenshot.png".into(),
            mime_type: "image/png".into(),
            data: "iVBORw0KGgo=".into(),
        }
    }

    #[test]
    fn test_renders_code_with_line_numbers() {
        let buffer = CodeBuffer::from_text("int a = 10\nif(a = 10) {}");
        let mut term = TestTerminal::new();
        term.render_widget(EditorPanel::new(&buffer, true), Rect::new(0, 0, 60, 10));

        assert!(term.buffer_contains(" 1 int a = 10"));
        assert!(term.buffer_contains(" 2 if(a = 10) {}"));
        assert!(term.buffer_contains("2 lines"));
    }

    #[test]
    fn test_blank_buffer_shows_hint() {
        let buffer = CodeBuffer::new();
        let mut term = TestTerminal::new();
        term.render_widget(EditorPanel::new(&buffer, false), Rect::new(0, 0, 100, 8));
        assert!(term.buffer_contains("Don't worry about errors."));
        assert!(term.buffer_contains("1 line"));
    }

    #[test]
    fn test_attachment_badge() {
        let buffer = CodeBuffer::new();
        let attachment = png();
        let mut term = TestTerminal::new();
        term.render_widget(
            EditorPanel::new(&buffer, false).attachment(Some(&attachment)),
            Rect::new(0, 0, 80, 8),
        );
        assert!(term.buffer_contains("screenshot.png"));
        assert!(term.buffer_contains("image/png"));
        assert!(term.line_contains(6, "Ctrl+X remove"));
    }

    #[test]
    fn test_cursor_position_after_text() {
        let buffer = CodeBuffer::from_text("abc");
        let panel = EditorPanel::new(&buffer, true);
        // Border (1) + gutter (" 1 " = 3)
        assert_eq!(
            panel.cursor_position(Rect::new(0, 0, 40, 10)),
            Some(Position::new(7, 1))
        );
    }

    #[test]
    fn test_cursor_hidden_when_scrolled_past() {
        let mut buffer = CodeBuffer::from_text("a\nb\nc");
        buffer.scroll = 5;
        let panel = EditorPanel::new(&buffer, true);
        assert_eq!(panel.cursor_position(Rect::new(0, 0, 40, 10)), None);
    }

    #[test]
    fn test_visible_lines_accounts_for_badge() {
        let area = Rect::new(0, 0, 40, 10);
        assert_eq!(EditorPanel::visible_lines(area, false), 8);
        assert_eq!(EditorPanel::visible_lines(area, true), 7);
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.0 MB");
    }
}

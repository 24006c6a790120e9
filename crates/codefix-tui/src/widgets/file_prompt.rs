//! File path prompt modal

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use codefix_app::state::FilePromptState;

use super::modal_overlay;
use crate::theme::styles;

const MODAL_WIDTH: u16 = 70;
const MODAL_HEIGHT: u16 = 7;

pub struct FilePrompt<'a> {
    state: &'a FilePromptState,
}

impl<'a> FilePrompt<'a> {
    pub fn new(state: &'a FilePromptState) -> Self {
        Self { state }
    }
}

impl Widget for FilePrompt<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal = modal_overlay::prepare_modal(buf, area, MODAL_WIDTH, MODAL_HEIGHT);
        let block = styles::modal_block(" Open File ");
        let inner = block.inner(modal);
        block.render(modal, buf);

        // Keep the end of long paths visible
        let room = inner.width.saturating_sub(4) as usize;
        let input = &self.state.input;
        let char_count = input.chars().count();
        let shown: String = if char_count > room {
            input.chars().skip(char_count - room).collect()
        } else {
            input.clone()
        };

        let lines = vec![
            Line::from(Span::styled(
                "Source files load into the editor; images and PDFs are attached.",
                styles::text_secondary(),
            )),
            Line::default(),
            Line::from(vec![
                Span::styled("❯ ", styles::accent_bold()),
                Span::styled(shown, styles::text_primary()),
                Span::styled("█", styles::accent()),
            ]),
            Line::default(),
            Line::from(vec![
                Span::styled("Enter", styles::keybinding()),
                Span::styled(" load · ", styles::text_muted()),
                Span::styled("Esc", styles::keybinding()),
                Span::styled(" cancel · ", styles::text_muted()),
                Span::styled("~/", styles::keybinding()),
                Span::styled(" expands to home", styles::text_muted()),
            ]),
        ];

        Paragraph::new(lines).render(inner, buf);
    }
}

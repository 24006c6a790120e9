//! Status bar widget
//!
//! Key hints for the focused surface on the left, transient notices on the
//! right.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use codefix_app::state::{AppState, UiMode};
use codefix_core::AppPhase;

use crate::theme::{palette, styles};

/// Status bar showing key hints and the current notice
pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Key/action pairs for the current mode
    fn hints(&self) -> Vec<(&'static str, &'static str)> {
        let mut hints = match self.state.ui_mode {
            UiMode::Onboarding => vec![("Enter", "close"), ("Ctrl+C", "quit")],
            UiMode::FilePrompt => vec![("Enter", "load"), ("Esc", "cancel")],
            UiMode::Editor => vec![
                ("F5", "analyze"),
                ("F6", "run"),
                ("Ctrl+O", "open"),
                ("Ctrl+Y", "copy"),
                ("Esc", "leave editor"),
                ("F1", "help"),
            ],
            UiMode::Normal if self.state.phase == AppPhase::Results => vec![
                ("Tab", "section"),
                ("↑↓", "scroll"),
                ("y", "copy"),
                ("x", "new code"),
                ("e", "edit"),
                ("q", "quit"),
            ],
            UiMode::Normal => vec![
                ("f", "analyze"),
                ("r", "run"),
                ("e", "edit"),
                ("o", "open"),
                ("?", "help"),
                ("q", "quit"),
            ],
        };
        if self.state.show_output && self.state.ui_mode == UiMode::Normal {
            hints.push(("w", "close output"));
        }
        hints
    }

    fn build_segments(&self) -> Vec<Span<'static>> {
        let separator = Span::styled(" │ ", Style::default().fg(palette::TEXT_MUTED));
        let mut segments = vec![Span::raw(" ")];
        for (i, (key, action)) in self.hints().into_iter().enumerate() {
            if i > 0 {
                segments.push(separator.clone());
            }
            segments.push(Span::styled(key, styles::keybinding()));
            segments.push(Span::styled(format!(" {}", action), styles::text_muted()));
        }
        segments
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Create block with top border (looks like separator)
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(styles::border_inactive());

        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(Line::from(self.build_segments())).render(inner, buf);

        if let Some(notice) = &self.state.notice {
            let line = Line::from(vec![
                Span::styled(notice.text.clone(), styles::notice(notice.level)),
                Span::raw(" "),
            ]);
            Paragraph::new(line)
                .alignment(Alignment::Right)
                .render(inner, buf);
        }
    }
}

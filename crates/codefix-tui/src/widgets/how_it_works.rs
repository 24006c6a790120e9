//! "How it works" onboarding modal, also used as the help screen

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Margin, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::modal_overlay;
use crate::theme::styles;

const MODAL_WIDTH: u16 = 64;
const MODAL_HEIGHT: u16 = 20;

pub const BUTTON_LABEL: &str = "Got it, let's debug!";

const STEPS: [(&str, &str); 3] = [
    (
        "1. Paste Code",
        "Paste your broken code into the editor. We support Java, Python, C++, C, and JavaScript.",
    ),
    (
        "2. Instant Analysis",
        "Our AI scans for syntax errors, logic flaws, and bad practices instantly.",
    ),
    (
        "3. Learn & Fix",
        "Get corrected code, clear explanations, and simplified logic suggestions.",
    ),
];

const KEY_HINTS: [(&str, &str); 4] = [
    ("F5", "analyze"),
    ("F6", "run"),
    ("Ctrl+O", "open file"),
    ("Esc", "leave editor"),
];

pub struct HowItWorksModal;

impl Widget for HowItWorksModal {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal = modal_overlay::prepare_modal(buf, area, MODAL_WIDTH, MODAL_HEIGHT);
        let block = styles::modal_block(" How it works ");
        let inner = block.inner(modal);
        block.render(modal, buf);

        let mut lines = vec![
            Line::from(Span::styled(
                "Debug your code in 3 simple steps.",
                styles::text_secondary(),
            )),
            Line::default(),
        ];

        for (title, body) in STEPS {
            lines.push(Line::from(Span::styled(title, styles::accent_bold())));
            lines.push(Line::from(Span::styled(body, styles::text_primary())));
            lines.push(Line::default());
        }

        let mut hints = Vec::new();
        for (i, (key, action)) in KEY_HINTS.iter().enumerate() {
            if i > 0 {
                hints.push(Span::styled(" · ", styles::text_muted()));
            }
            hints.push(Span::styled(*key, styles::keybinding()));
            hints.push(Span::styled(format!(" {}", action), styles::text_muted()));
        }
        lines.push(Line::from(hints));
        lines.push(Line::default());

        lines.push(
            Line::from(Span::styled(
                format!("  {}  ", BUTTON_LABEL),
                styles::focused_selected(),
            ))
            .alignment(Alignment::Center),
        );

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner.inner(Margin::new(1, 0)), buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_renders_three_steps_and_button() {
        let mut term = TestTerminal::new();
        term.render_widget(HowItWorksModal, term.area());

        assert!(term.buffer_contains("How it works"));
        assert!(term.buffer_contains("1. Paste Code"));
        assert!(term.buffer_contains("2. Instant Analysis"));
        assert!(term.buffer_contains("3. Learn & Fix"));
        assert!(term.buffer_contains(BUTTON_LABEL));
    }

    #[test]
    fn test_small_terminal_does_not_panic() {
        let mut term = TestTerminal::with_size(30, 8);
        term.render_widget(HowItWorksModal, term.area());
        assert!(term.buffer_contains("How it works"));
    }
}

//! Header bar widget
//!
//! App title, tagline and the current phase indicator.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use codefix_core::AppPhase;

use crate::theme::{palette, styles};

pub const APP_TITLE: &str = "Code Debug Helper";
pub const TAGLINE: &str = "For CS Students";

/// Main header showing the app title and what the app is doing
pub struct MainHeader {
    phase: AppPhase,
}

impl MainHeader {
    pub fn new(phase: AppPhase) -> Self {
        Self { phase }
    }
}

impl Widget for MainHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let title = Line::from(vec![
            Span::raw(" "),
            Span::styled(APP_TITLE, styles::accent_bold()),
            Span::styled(" · ", styles::text_muted()),
            Span::styled(TAGLINE, styles::text_secondary()),
        ]);
        Paragraph::new(title).render(inner, buf);

        let (icon, label, style) = styles::phase_indicator(&self.phase);
        let indicator = Line::from(vec![
            Span::styled(format!("{} {}", icon, label), style),
            Span::raw(" "),
        ]);
        Paragraph::new(indicator)
            .alignment(Alignment::Right)
            .render(inner, buf);
    }
}

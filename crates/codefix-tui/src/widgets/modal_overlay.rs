//! Shared modal overlay utilities.
//!
//! Centering, background dimming and drop shadows for the onboarding and
//! file prompt modals.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Clear, Widget};

use crate::theme::palette;

/// Center a fixed-size rect within an area.
///
/// If the requested size exceeds the area, clamps to the area dimensions.
///
/// # Examples
/// ```
/// use ratatui::layout::Rect;
/// use codefix_tui::widgets::modal_overlay::centered_rect;
///
/// let area = Rect::new(0, 0, 80, 24);
/// let modal = centered_rect(40, 10, area);
/// assert_eq!(modal, Rect::new(20, 7, 40, 10));
/// ```
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

/// Dim all cells in the given area, so a modal reads as floating above it.
pub fn dim_background(buf: &mut Buffer, area: Rect) {
    let dim_style = Style::default()
        .fg(palette::TEXT_MUTED)
        .bg(palette::DEEPEST_BG);

    let area = area.intersection(buf.area);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_style(dim_style);
            }
        }
    }
}

/// Render a 1-cell shadow offset to the right and bottom of a modal rect.
pub fn render_shadow(buf: &mut Buffer, modal_rect: Rect) {
    let shadow_style = Style::default().fg(palette::SHADOW).bg(palette::SHADOW);

    // Right edge shadow (1 cell wide, full height)
    let right_x = modal_rect.x.saturating_add(modal_rect.width);
    for y in modal_rect.y.saturating_add(1)
        ..modal_rect
            .y
            .saturating_add(modal_rect.height)
            .saturating_add(1)
    {
        if let Some(cell) = buf.cell_mut((right_x, y)) {
            cell.set_char(' ');
            cell.set_style(shadow_style);
        }
    }

    // Bottom edge shadow (full width, 1 cell tall)
    let bottom_y = modal_rect.y.saturating_add(modal_rect.height);
    for x in modal_rect.x.saturating_add(1)
        ..modal_rect
            .x
            .saturating_add(modal_rect.width)
            .saturating_add(1)
    {
        if let Some(cell) = buf.cell_mut((x, bottom_y)) {
            cell.set_char(' ');
            cell.set_style(shadow_style);
        }
    }
}

/// Dim the whole buffer, clear a centered `width` x `height` rect and give it
/// a shadow. Returns the rect for the modal's own content.
pub fn prepare_modal(buf: &mut Buffer, area: Rect, width: u16, height: u16) -> Rect {
    dim_background(buf, area);
    let modal = centered_rect(width, height, area);
    render_shadow(buf, modal);
    Clear.render(modal, buf);
    modal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_within_area() {
        let area = Rect::new(0, 0, 80, 24);
        let result = centered_rect(40, 10, area);
        assert_eq!(result, Rect::new(20, 7, 40, 10));
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 30, 10);
        let result = centered_rect(40, 10, area);
        assert_eq!(result.width, 30);
        assert_eq!(result.height, 10);
    }

    #[test]
    fn test_centered_rect_with_offset_area() {
        let area = Rect::new(10, 5, 80, 24);
        let result = centered_rect(40, 10, area);
        assert_eq!(result, Rect::new(30, 12, 40, 10));
    }

    #[test]
    fn test_dim_background_covers_area() {
        let area = Rect::new(0, 0, 10, 5);
        let mut buf = Buffer::empty(area);
        dim_background(&mut buf, area);
        for y in 0..5 {
            for x in 0..10 {
                let cell = &buf[(x, y)];
                assert_eq!(cell.fg, palette::TEXT_MUTED);
                assert_eq!(cell.bg, palette::DEEPEST_BG);
            }
        }
    }

    #[test]
    fn test_dim_background_offset_area() {
        let area = Rect::new(5, 3, 10, 5);
        let mut buf = Buffer::empty(Rect::new(0, 0, 20, 10));
        dim_background(&mut buf, area);
        for y in 3..8 {
            for x in 5..15 {
                assert_eq!(buf[(x, y)].fg, palette::TEXT_MUTED);
            }
        }
        // Outside the area is untouched
        assert_ne!(buf[(0, 0)].fg, palette::TEXT_MUTED);
    }

    #[test]
    fn test_render_shadow_offset() {
        let area = Rect::new(0, 0, 20, 10);
        let modal = Rect::new(5, 2, 10, 6);
        let mut buf = Buffer::empty(area);
        render_shadow(&mut buf, modal);

        let right_shadow = &buf[(15, 3)];
        assert_eq!(right_shadow.bg, palette::SHADOW);
        assert_eq!(right_shadow.symbol(), " ");

        let bottom_shadow = &buf[(6, 8)];
        assert_eq!(bottom_shadow.bg, palette::SHADOW);
        assert_eq!(bottom_shadow.symbol(), " ");
    }

    #[test]
    fn test_render_shadow_no_overflow() {
        let area = Rect::new(0, 0, 10, 10);
        let modal = Rect::new(8, 8, 2, 2);
        let mut buf = Buffer::empty(area);
        // Should not panic with out-of-bounds access
        render_shadow(&mut buf, modal);
    }

    #[test]
    fn test_prepare_modal_clears_content() {
        let area = Rect::new(0, 0, 20, 10);
        let mut buf = Buffer::empty(area);
        for y in 0..10 {
            for x in 0..20 {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_char('X');
                }
            }
        }

        let modal = prepare_modal(&mut buf, area, 10, 4);
        assert_eq!(modal, Rect::new(5, 3, 10, 4));
        assert_eq!(buf[(6, 4)].symbol(), " ");
        // Dimmed, not erased, outside the modal
        assert_eq!(buf[(0, 0)].symbol(), "X");
    }
}

//! Screen layout definitions for the TUI
//!
//! Header on top, status bar at the bottom, and a body split between the
//! editor and the main panel. The body stacks vertically on narrow terminals.
//! The console output panel takes a strip under the main panel while open.

use ratatui::layout::{Constraint, Layout, Rect};

/// Terminals narrower than this stack editor and main panel
pub const SIDE_BY_SIDE_MIN_WIDTH: u16 = 100;

/// Height of the console output panel when open
pub const OUTPUT_PANEL_HEIGHT: u16 = 9;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title bar with phase indicator
    pub header: Rect,

    /// Code editor panel
    pub editor: Rect,

    /// Idle placeholder, spinner, error screen or result card
    pub main: Rect,

    /// Console output panel, when shown
    pub output: Option<Rect>,

    /// Key hints and notices
    pub status: Rect,
}

/// Create the main screen layout
///
/// # Arguments
/// * `area` - Total screen area
/// * `show_output` - Whether the console output panel is open
pub fn create(area: Rect, show_output: bool) -> ScreenAreas {
    let rows = Layout::vertical([
        Constraint::Length(3), // Header (glass container)
        Constraint::Min(6),    // Body
        Constraint::Length(2), // Status bar (top border + one line)
    ])
    .split(area);

    let (editor, right) = if area.width >= SIDE_BY_SIDE_MIN_WIDTH {
        let cols = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[1]);
        (cols[0], cols[1])
    } else {
        let stacked = Layout::vertical([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(rows[1]);
        (stacked[0], stacked[1])
    };

    let (main, output) = if show_output {
        let height = OUTPUT_PANEL_HEIGHT.min(right.height / 2);
        let split = Layout::vertical([Constraint::Min(3), Constraint::Length(height)]).split(right);
        (split[0], Some(split[1]))
    } else {
        (right, None)
    };

    ScreenAreas {
        header: rows[0],
        editor,
        main,
        output,
        status: rows[2],
    }
}

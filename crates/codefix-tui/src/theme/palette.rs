//! Color palette for the glass theme.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black; // Terminal background
pub const CARD_BG: Color = Color::Black; // Panel/card backgrounds
pub const POPUP_BG: Color = Color::Rgb(28, 33, 43); // Modal/popup backgrounds
pub const CODE_BG: Color = Color::Rgb(22, 27, 34); // Code block background

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray; // Inactive borders
pub const BORDER_ACTIVE: Color = Color::Cyan; // Focused borders

// --- Accent ---
pub const ACCENT: Color = Color::Cyan; // Primary accent
pub const CONTRAST_FG: Color = Color::Black; // Text drawn on accent backgrounds

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;
pub const TEXT_BRIGHT: Color = Color::White;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green; // Success / clean code
pub const STATUS_RED: Color = Color::Red; // Errors
pub const STATUS_YELLOW: Color = Color::Yellow; // Busy
pub const STATUS_BLUE: Color = Color::Blue; // Running code
pub const STATUS_INDIGO: Color = Color::Magenta; // Language badge

// --- Effects ---
pub const SHADOW: Color = Color::Black;

// --- Console ---
pub const CONSOLE_TEXT: Color = Color::LightGreen;
pub const LINE_NUMBER: Color = Color::DarkGray;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_backgrounds_are_rgb() {
        assert!(matches!(POPUP_BG, Color::Rgb(_, _, _)));
        assert!(matches!(CODE_BG, Color::Rgb(_, _, _)));
    }

    #[test]
    fn test_contrast_differs_from_accent() {
        assert_ne!(CONTRAST_FG, ACCENT);
    }
}

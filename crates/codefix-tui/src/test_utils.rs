//! Test utilities for TUI rendering verification
//!
//! Provides helpers for testing widgets and full-screen rendering
//! using ratatui's TestBackend.
//!
//! # Example
//!
//! ```ignore
//! use crate::test_utils::TestTerminal;
//!
//! #[test]
//! fn test_header_renders_title() {
//!     let mut term = TestTerminal::new();
//!     term.render_widget(MainHeader::new(AppPhase::Idle), term.area());
//!     assert!(term.buffer_contains("Code Debug Helper"));
//! }
//! ```

use codefix_app::config::Settings;
use codefix_app::state::AppState;
use codefix_core::{AnalysisResult, CodeError};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::Frame;
use ratatui::Terminal;

/// Standard test terminal size (wide enough for side-by-side panels)
pub const TEST_WIDTH: u16 = 120;
pub const TEST_HEIGHT: u16 = 32;

/// Compact terminal for testing the stacked layout
pub const COMPACT_WIDTH: u16 = 60;
pub const COMPACT_HEIGHT: u16 = 20;

/// Test utility wrapper around ratatui's TestBackend terminal.
pub struct TestTerminal {
    /// The underlying ratatui terminal with TestBackend.
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    /// Create a new test terminal with standard dimensions (120x32)
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    /// Create a new test terminal with compact dimensions (60x20)
    pub fn compact() -> Self {
        Self::with_size(COMPACT_WIDTH, COMPACT_HEIGHT)
    }

    /// Create a new test terminal with custom dimensions
    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    /// Get the full terminal area
    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    /// Render a widget to the terminal
    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    /// Draws a frame using a custom rendering function, e.g. the full `view`
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    /// Get the underlying buffer for assertions
    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Check if the buffer contains a string anywhere
    pub fn buffer_contains(&self, text: &str) -> bool {
        buffer_to_string(self.buffer()).contains(text)
    }

    /// Check if a specific line contains text
    pub fn line_contains(&self, line: u16, text: &str) -> bool {
        get_line_content(self.buffer(), line).contains(text)
    }

    /// Get all content as a string (for debugging)
    pub fn content(&self) -> String {
        buffer_to_string(self.buffer())
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert buffer to string representation
fn buffer_to_string(buffer: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            result.push_str(buffer[(x, y)].symbol());
        }
        result.push('\n');
    }
    result
}

/// Get content of a specific line
fn get_line_content(buffer: &Buffer, line: u16) -> String {
    let mut result = String::new();
    if line < buffer.area.height {
        for x in 0..buffer.area.width {
            result.push_str(buffer[(x, line)].symbol());
        }
    }
    result
}

/// AppState past onboarding, with the editor focused
pub fn test_app_state() -> AppState {
    let mut settings = Settings::default();
    settings.ui.show_onboarding = false;
    AppState::with_settings(settings)
}

/// Analysis with two errors and every optional section filled in
pub fn sample_result() -> AnalysisResult {
    AnalysisResult {
        language: "Java".into(),
        errors: vec![
            CodeError {
                kind: "Syntax Error".into(),
                line: "3".into(),
                description: "Missing semicolon at the end of the statement.".into(),
                fix: "int a = 10;".into(),
            },
            CodeError {
                kind: "Logic Error".into(),
                line: "4".into(),
                description: "Single = assigns; use == to compare.".into(),
                fix: "if (a == 10) {".into(),
            },
        ],
        correct_syntax: "int a = 10;\nif (a == 10) {".into(),
        explanation: "Java statements end with a semicolon.".into(),
        simplified_logic: Some("System.out.println(\"Hello World\");".into()),
        formatted_code: "public class Main {\n    // fixed\n}".into(),
        learning_tips: vec!["Read compiler errors from the top.".into()],
        output: Some("Hello World".into()),
    }
}

/// Analysis that found nothing wrong
pub fn clean_result() -> AnalysisResult {
    AnalysisResult {
        errors: vec![],
        simplified_logic: None,
        learning_tips: vec![],
        output: None,
        ..sample_result()
    }
}

//! Main render/view function (View in TEA pattern)


use codefix_app::state::{AppState, LoadingState, UiMode};
use codefix_core::AppPhase;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::{palette, styles};

/// Braille spinner characters for smooth animation
const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub const IDLE_TITLE: &str = "Ready to Debug";
pub const IDLE_BODY: &str = "Paste your code on the left and press F5 to see what's wrong.";
pub const ANALYZING_DETAIL: &str = "Checking syntax, logic, and style.";

/// Render the complete UI (View function in TEA)
///
/// Takes `&mut` only to keep the editor scrolled to the cursor.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area, state.show_output);

    frame.render_widget(widgets::MainHeader::new(state.phase), areas.header);

    // Editor
    let editor_focused = state.ui_mode == UiMode::Editor;
    state.buffer.ensure_cursor_visible(widgets::EditorPanel::visible_lines(
        areas.editor,
        state.attachment.is_some(),
    ));
    let editor = widgets::EditorPanel::new(&state.buffer, editor_focused)
        .attachment(state.attachment.as_ref());
    let cursor = editor.cursor_position(areas.editor);
    frame.render_widget(editor, areas.editor);
    if editor_focused {
        if let Some(position) = cursor {
            frame.set_cursor_position(position);
        }
    }

    render_main_panel(frame, state, areas.main);

    if let Some(output_area) = areas.output {
        frame.render_widget(
            widgets::TerminalOutput::new(state.output.as_deref()),
            output_area,
        );
    }

    frame.render_widget(widgets::StatusBar::new(state), areas.status);

    // Render modal overlays based on UI mode
    match state.ui_mode {
        UiMode::Onboarding => frame.render_widget(widgets::HowItWorksModal, area),
        UiMode::FilePrompt => {
            frame.render_widget(widgets::FilePrompt::new(&state.file_prompt), area)
        }
        UiMode::Editor | UiMode::Normal => {}
    }
}

/// Right-hand panel: driven by the request phase
fn render_main_panel(frame: &mut Frame, state: &AppState, area: Rect) {
    match state.phase {
        AppPhase::Analyzing => render_loading(frame, &state.loading, area),
        AppPhase::Error => render_error(frame, state, area),
        AppPhase::Results | AppPhase::Executing if state.result.is_some() => {
            render_result(frame, state, area)
        }
        AppPhase::Idle | AppPhase::Executing | AppPhase::Results => render_idle(frame, area),
    }
}

fn render_result(frame: &mut Frame, state: &AppState, area: Rect) {
    if let Some(result) = &state.result {
        let card = widgets::ResultCard::new(result, state.result_tab)
            .scroll(state.result_scroll)
            .copied(state.copy_feedback_active())
            .analyzed_at(state.analyzed_at)
            .focused(state.ui_mode == UiMode::Normal);
        frame.render_widget(card, area);
    }
}

/// Vertically centered content inside a glass panel
fn render_centered(frame: &mut Frame, area: Rect, lines: Vec<Line>, height: u16) {
    let block = styles::glass_block(false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [_, center, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(inner);

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        center,
    );
}

fn render_idle(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled("</>", styles::accent_bold())),
        Line::default(),
        Line::from(Span::styled(IDLE_TITLE, styles::text_bright_bold())),
        Line::from(Span::styled(IDLE_BODY, styles::text_secondary())),
    ];
    render_centered(frame, area, lines, 5);
}

fn render_loading(frame: &mut Frame, loading: &LoadingState, area: Rect) {
    let spinner_idx = (loading.animation_frame as usize) % SPINNER.len();
    let spinner_char = SPINNER[spinner_idx];

    let lines = vec![
        Line::from(vec![
            Span::styled(
                spinner_char,
                Style::default()
                    .fg(palette::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(loading.message, styles::text_bright_bold()),
        ]),
        Line::default(),
        Line::from(Span::styled(ANALYZING_DETAIL, styles::text_muted())),
    ];
    render_centered(frame, area, lines, 3);
}

fn render_error(frame: &mut Frame, state: &AppState, area: Rect) {
    let message = state
        .error_message
        .as_deref()
        .unwrap_or("Something went wrong.");
    let lines = vec![
        Line::from(Span::styled(
            "✗ Analysis failed",
            styles::status_red().add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(message, styles::text_primary())),
        Line::default(),
        Line::from(vec![
            Span::styled("f", styles::keybinding()),
            Span::styled(" try again · ", styles::text_muted()),
            Span::styled("x", styles::keybinding()),
            Span::styled(" start over", styles::text_muted()),
        ]),
    ];
    render_centered(frame, area, lines, 7);
}

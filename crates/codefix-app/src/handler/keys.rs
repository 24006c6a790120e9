//! Key event handlers for different UI modes

use crate::code_buffer::EditorOp;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::Onboarding => handle_key_onboarding(key),
        UiMode::FilePrompt => handle_key_file_prompt(state, key),
        UiMode::Editor => handle_key_editor(key),
        UiMode::Normal => handle_key_normal(key),
    }
}

/// Handle key events while the "How it works" modal is open
fn handle_key_onboarding(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Esc | InputKey::Char(' ' | '?') | InputKey::F(1) => {
            Some(Message::DismissHelp)
        }
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

/// Handle key events in the file path prompt
fn handle_key_file_prompt(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::CancelFilePrompt),
        InputKey::Enter => Some(Message::SubmitFilePrompt),

        InputKey::Backspace => {
            let mut text = state.file_prompt.input.clone();
            text.pop();
            Some(Message::FilePromptInput { text })
        }

        // Clear all input
        InputKey::CharCtrl('u') => Some(Message::FilePromptInput {
            text: String::new(),
        }),

        InputKey::Char(c) => {
            let mut text = state.file_prompt.input.clone();
            text.push(c);
            Some(Message::FilePromptInput { text })
        }

        InputKey::CharCtrl('c') => Some(Message::Quit),

        _ => None,
    }
}

/// Handle key events while typing in the code editor.
///
/// Printable keys go into the buffer, so commands use Ctrl or function keys.
fn handle_key_editor(key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Esc => Some(Message::BlurEditor),

        // ─────────────────────────────────────────────────────────
        // Commands
        // ─────────────────────────────────────────────────────────
        InputKey::CharCtrl('f') | InputKey::F(5) => Some(Message::Analyze),
        InputKey::CharCtrl('r') | InputKey::F(6) => Some(Message::RunCode),
        InputKey::CharCtrl('o') => Some(Message::OpenFilePrompt),
        InputKey::CharCtrl('y') => Some(Message::CopyCode),
        InputKey::CharCtrl('x') => Some(Message::RemoveAttachment),
        InputKey::CharCtrl('l') => Some(Message::Edit(EditorOp::Clear)),
        InputKey::F(1) => Some(Message::ToggleHelp),

        // ─────────────────────────────────────────────────────────
        // Editing
        // ─────────────────────────────────────────────────────────
        InputKey::Char(c) => Some(Message::Edit(EditorOp::Insert(c))),
        InputKey::Enter => Some(Message::Edit(EditorOp::Newline)),
        InputKey::Tab => Some(Message::Edit(EditorOp::Indent)),
        InputKey::Backspace => Some(Message::Edit(EditorOp::Backspace)),
        InputKey::Delete => Some(Message::Edit(EditorOp::Delete)),
        InputKey::Left => Some(Message::Edit(EditorOp::Left)),
        InputKey::Right => Some(Message::Edit(EditorOp::Right)),
        InputKey::Up => Some(Message::Edit(EditorOp::Up)),
        InputKey::Down => Some(Message::Edit(EditorOp::Down)),
        InputKey::Home => Some(Message::Edit(EditorOp::Home)),
        InputKey::End => Some(Message::Edit(EditorOp::End)),
        InputKey::PageUp => Some(Message::Edit(EditorOp::PageUp)),
        InputKey::PageDown => Some(Message::Edit(EditorOp::PageDown)),

        _ => None,
    }
}

/// Handle key events in normal mode
fn handle_key_normal(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        InputKey::CharCtrl('c') => Some(Message::Quit),

        // ─────────────────────────────────────────────────────────
        // Requests
        // ─────────────────────────────────────────────────────────
        InputKey::Char('f') | InputKey::F(5) => Some(Message::Analyze),
        InputKey::Char('r') | InputKey::F(6) => Some(Message::RunCode),
        InputKey::Char('x') => Some(Message::Reset),

        // ─────────────────────────────────────────────────────────
        // Input
        // ─────────────────────────────────────────────────────────
        InputKey::Char('i' | 'e') | InputKey::Enter => Some(Message::FocusEditor),
        InputKey::Char('o') => Some(Message::OpenFilePrompt),
        InputKey::Char('d') => Some(Message::RemoveAttachment),

        // ─────────────────────────────────────────────────────────
        // Results
        // ─────────────────────────────────────────────────────────
        InputKey::Tab | InputKey::Right | InputKey::Char('l') => Some(Message::NextTab),
        InputKey::BackTab | InputKey::Left | InputKey::Char('h') => Some(Message::PreviousTab),
        InputKey::Up | InputKey::Char('k') => Some(Message::ScrollUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::ScrollDown),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown => Some(Message::PageDown),
        InputKey::Char('c' | 'y') => Some(Message::CopyCode),
        InputKey::Char('w') => Some(Message::CloseOutput),

        InputKey::Char('?') | InputKey::F(1) => Some(Message::ToggleHelp),

        _ => None,
    }
}

//! Main update function - handles state transitions (TEA pattern)

use std::time::Instant;

use crate::message::Message;
use crate::state::{AppState, NoticeLevel, UiMode};

use super::{editor, keys::handle_key, request, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Paste(text) => editor::handle_paste(state, &text),

        Message::Tick => {
            if state.phase.is_busy() {
                state.loading.tick();
            }
            let now = Instant::now();
            state.expire_copy_feedback(now);
            state.expire_notice(now);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Analysis / Execution
        // ─────────────────────────────────────────────────────────
        Message::Analyze => request::handle_analyze(state),
        Message::RunCode => request::handle_run(state),
        Message::AnalysisCompleted { result } => request::handle_analysis_completed(state, *result),
        Message::AnalysisFailed { error } => request::handle_analysis_failed(state, &error),
        Message::ExecutionCompleted { output } => request::handle_execution_completed(state, output),
        Message::Reset => request::handle_reset(state),

        Message::CloseOutput => {
            state.show_output = false;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Editor
        // ─────────────────────────────────────────────────────────
        Message::FocusEditor => {
            state.ui_mode = UiMode::Editor;
            UpdateResult::none()
        }

        Message::BlurEditor => {
            state.ui_mode = UiMode::Normal;
            UpdateResult::none()
        }

        Message::Edit(op) => {
            state.buffer.apply(op);
            UpdateResult::none()
        }

        Message::RemoveAttachment => editor::handle_remove_attachment(state),

        // ─────────────────────────────────────────────────────────
        // File Loading
        // ─────────────────────────────────────────────────────────
        Message::OpenFilePrompt => editor::handle_open_file_prompt(state),

        Message::FilePromptInput { text } => {
            state.file_prompt.input = text;
            UpdateResult::none()
        }

        Message::SubmitFilePrompt => editor::handle_submit_file_prompt(state),

        Message::CancelFilePrompt => {
            state.ui_mode = state.file_prompt.return_to;
            UpdateResult::none()
        }

        Message::LoadFile { path } => UpdateResult::action(UpdateAction::LoadFile { path }),

        Message::FileLoaded { path: _, file } => {
            state.apply_file(file);
            UpdateResult::none()
        }

        Message::FileLoadFailed { path, error } => {
            editor::handle_file_load_failed(state, &path, &error)
        }

        // ─────────────────────────────────────────────────────────
        // Results View
        // ─────────────────────────────────────────────────────────
        Message::NextTab => {
            state.cycle_tab(1);
            UpdateResult::none()
        }

        Message::PreviousTab => {
            state.cycle_tab(-1);
            UpdateResult::none()
        }

        Message::ScrollUp => {
            state.result_scroll = state.result_scroll.saturating_sub(1);
            UpdateResult::none()
        }

        Message::ScrollDown => {
            state.result_scroll = state.result_scroll.saturating_add(1);
            UpdateResult::none()
        }

        Message::PageUp => {
            state.result_scroll = state.result_scroll.saturating_sub(10);
            UpdateResult::none()
        }

        Message::PageDown => {
            state.result_scroll = state.result_scroll.saturating_add(10);
            UpdateResult::none()
        }

        Message::CopyCode => request::handle_copy(state),

        Message::CopyFinished => {
            state.copied_at = Some(Instant::now());
            UpdateResult::none()
        }

        Message::CopyFailed { error } => {
            state.set_notice(format!("Copy failed: {}", error), NoticeLevel::Error);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Help
        // ─────────────────────────────────────────────────────────
        Message::ToggleHelp => {
            if state.ui_mode == UiMode::Onboarding {
                state.ui_mode = state.help_return_to;
            } else {
                state.help_return_to = state.ui_mode;
                state.ui_mode = UiMode::Onboarding;
            }
            UpdateResult::none()
        }

        Message::DismissHelp => {
            if state.ui_mode == UiMode::Onboarding {
                state.ui_mode = state.help_return_to;
            }
            UpdateResult::none()
        }
    }
}

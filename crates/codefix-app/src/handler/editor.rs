//! Paste, file prompt and attachment handlers

use std::path::{Path, PathBuf};

use codefix_core::prelude::*;

use crate::state::{AppState, FilePromptState, NoticeLevel, UiMode};

use super::{UpdateAction, UpdateResult};

/// Bracketed paste goes to whichever text input has focus
pub fn handle_paste(state: &mut AppState, text: &str) -> UpdateResult {
    match state.ui_mode {
        UiMode::FilePrompt => {
            // Paths are single-line; keep the first line only
            let line = text.lines().next().unwrap_or_default();
            state.file_prompt.input.push_str(line.trim_matches(['"', '\'']));
        }
        UiMode::Editor => state.buffer.insert_str(text),
        UiMode::Normal => {
            state.ui_mode = UiMode::Editor;
            state.buffer.insert_str(text);
        }
        UiMode::Onboarding => {}
    }
    UpdateResult::none()
}

pub fn handle_open_file_prompt(state: &mut AppState) -> UpdateResult {
    if state.ui_mode != UiMode::FilePrompt {
        state.file_prompt = FilePromptState {
            input: String::new(),
            return_to: state.ui_mode,
        };
        state.ui_mode = UiMode::FilePrompt;
    }
    UpdateResult::none()
}

pub fn handle_submit_file_prompt(state: &mut AppState) -> UpdateResult {
    state.ui_mode = state.file_prompt.return_to;

    let input = state.file_prompt.input.trim().to_string();
    if input.is_empty() {
        return UpdateResult::none();
    }

    UpdateResult::action(UpdateAction::LoadFile {
        path: expand_home(&input),
    })
}

pub fn handle_file_load_failed(state: &mut AppState, path: &Path, error: &str) -> UpdateResult {
    warn!("Failed to load {:?}: {}", path, error);
    state.set_notice(
        format!("Could not read {}: {}", path.display(), error),
        NoticeLevel::Error,
    );
    UpdateResult::none()
}

pub fn handle_remove_attachment(state: &mut AppState) -> UpdateResult {
    if let Some(attachment) = state.attachment.take() {
        state.set_notice(format!("Removed {}", attachment.name), NoticeLevel::Info);
    }
    UpdateResult::none()
}

/// Expand a leading `~/` to the home directory
fn expand_home(input: &str) -> PathBuf {
    if let Some(rest) = input.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(input)
}

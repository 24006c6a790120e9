//! Analyze/run triggers, completion handling and reset

use chrono::Local;

use codefix_core::prelude::*;
use codefix_core::{AnalysisResult, AppPhase};

use crate::state::{
    AppState, LoadingState, NoticeLevel, ResultTab, UiMode, ANALYSIS_FAILED_MESSAGE,
    ANALYZING_MESSAGES, EXECUTING_MESSAGES,
};

use super::{UpdateAction, UpdateResult};

const EMPTY_SUBMISSION_NOTICE: &str = "Paste some code or attach a file first";

/// "Fix My Code". Ignored while a request is in flight or with nothing to send.
pub fn handle_analyze(state: &mut AppState) -> UpdateResult {
    if state.phase.is_busy() {
        debug!("Analyze ignored: {:?} in progress", state.phase);
        return UpdateResult::none();
    }

    let submission = state.submission();
    if submission.is_empty() {
        state.set_notice(EMPTY_SUBMISSION_NOTICE, NoticeLevel::Info);
        return UpdateResult::none();
    }

    state.phase = AppPhase::Analyzing;
    state.error_message = None;
    state.loading = LoadingState::new(ANALYZING_MESSAGES);
    state.ui_mode = UiMode::Normal;

    UpdateResult::action(UpdateAction::AnalyzeCode(submission))
}

/// Simulated run. Opens the output panel with a pending placeholder.
pub fn handle_run(state: &mut AppState) -> UpdateResult {
    if state.phase.is_busy() {
        debug!("Run ignored: {:?} in progress", state.phase);
        return UpdateResult::none();
    }

    let submission = state.submission();
    if submission.is_empty() {
        state.set_notice(EMPTY_SUBMISSION_NOTICE, NoticeLevel::Info);
        return UpdateResult::none();
    }

    state.phase = AppPhase::Executing;
    state.output = None;
    state.show_output = true;
    state.loading = LoadingState::shuffled(EXECUTING_MESSAGES);

    UpdateResult::action(UpdateAction::ExecuteCode(submission))
}

pub fn handle_analysis_completed(state: &mut AppState, result: AnalysisResult) -> UpdateResult {
    if state.phase != AppPhase::Analyzing {
        debug!("Analysis result arrived in {:?}; applying anyway", state.phase);
    }

    info!(
        "Showing analysis: {} with {} error(s)",
        result.language,
        result.errors.len()
    );

    state.phase = AppPhase::Results;
    state.result = Some(result);
    state.analyzed_at = Some(Local::now());
    state.error_message = None;
    state.result_tab = ResultTab::Errors;
    state.result_scroll = 0;
    UpdateResult::none()
}

pub fn handle_analysis_failed(state: &mut AppState, error: &str) -> UpdateResult {
    if state.phase != AppPhase::Analyzing {
        debug!("Analysis failure arrived in {:?}; applying anyway", state.phase);
    }

    warn!("Analysis failed: {}", error);
    state.phase = AppPhase::Error;
    state.error_message = Some(ANALYSIS_FAILED_MESSAGE.to_string());
    UpdateResult::none()
}

/// Execution always "completes"; failures arrive as fallback text.
pub fn handle_execution_completed(state: &mut AppState, output: String) -> UpdateResult {
    if state.phase == AppPhase::Executing {
        // A run started from the results view returns there
        state.phase = if state.result.is_some() {
            AppPhase::Results
        } else {
            AppPhase::Idle
        };
    } else {
        debug!("Execution output arrived in {:?}; applying anyway", state.phase);
    }

    state.output = Some(output);
    state.show_output = true;
    UpdateResult::none()
}

/// "Analyze New Code": back to a clean idle editor
pub fn handle_reset(state: &mut AppState) -> UpdateResult {
    if state.phase.is_busy() {
        debug!("Reset ignored: {:?} in progress", state.phase);
        return UpdateResult::none();
    }

    state.reset();
    state.ui_mode = UiMode::Editor;
    UpdateResult::none()
}

pub fn handle_copy(state: &mut AppState) -> UpdateResult {
    match state.copy_target() {
        Some(text) => UpdateResult::action(UpdateAction::CopyToClipboard { text }),
        None => {
            state.set_notice("Nothing to copy", NoticeLevel::Info);
            UpdateResult::none()
        }
    }
}

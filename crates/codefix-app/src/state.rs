//! Application state (Model in TEA pattern)

use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use rand::Rng;

use codefix_core::prelude::*;
use codefix_core::{AnalysisResult, AppPhase, Attachment, CodeSubmission, EncodedFile};

use crate::code_buffer::CodeBuffer;
use crate::config::Settings;

/// Sample shown in the editor on first start
pub const PLACEHOLDER_CODE: &str = r#"public class Main {
  public static void main(String[] args) {
    int a = 10
    if(a = 10) {
      System.out.println("Hello World")
    }
  }
}"#;

/// User-facing text for any analysis failure
pub const ANALYSIS_FAILED_MESSAGE: &str =
    "Oops! Something went wrong analyzing your code. Please check your internet or try again.";

/// How long a status-line notice stays up
const NOTICE_TTL: Duration = Duration::from_secs(5);

/// Which input surface receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// "How it works" modal
    Onboarding,
    /// Typing into the code buffer
    #[default]
    Editor,
    /// Browsing results; single-key shortcuts active
    Normal,
    /// Typing a file path
    FilePrompt,
}

/// Sections of the result card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultTab {
    #[default]
    Errors,
    Fix,
    Explain,
    Simplified,
    Final,
    Output,
    Tips,
}

impl ResultTab {
    pub fn label(&self) -> &'static str {
        match self {
            ResultTab::Errors => "Errors",
            ResultTab::Fix => "Correct Syntax",
            ResultTab::Explain => "Why",
            ResultTab::Simplified => "Simplified",
            ResultTab::Final => "Final Code",
            ResultTab::Output => "Output",
            ResultTab::Tips => "Tips",
        }
    }

    /// Tabs with content for `result`, in display order
    pub fn available(result: &AnalysisResult) -> Vec<ResultTab> {
        let mut tabs = vec![ResultTab::Errors, ResultTab::Fix, ResultTab::Explain];
        if result.simplified_logic.is_some() {
            tabs.push(ResultTab::Simplified);
        }
        tabs.push(ResultTab::Final);
        if result.output.is_some() {
            tabs.push(ResultTab::Output);
        }
        if !result.learning_tips.is_empty() {
            tabs.push(ResultTab::Tips);
        }
        tabs
    }
}

/// Messages cycled while an analysis is in flight
pub const ANALYZING_MESSAGES: &[&str] = &[
    "Scanning for bugs...",
    "Checking syntax, logic, and style.",
    "Counting semicolons...",
    "Matching every bracket...",
    "Tracing your variables...",
    "Reading it like a tutor would...",
    "Looking for sneaky = vs == mixups...",
];

/// Messages cycled while an execution is in flight
pub const EXECUTING_MESSAGES: &[&str] = &[
    "Running your code...",
    "Warming up the console...",
    "Printing to stdout...",
];

/// Spinner and message rotation for busy phases
#[derive(Debug, Clone)]
pub struct LoadingState {
    /// Current loading message
    pub message: &'static str,
    /// Animation frame counter for spinner
    pub animation_frame: u64,
    messages: &'static [&'static str],
    message_index: usize,
}

impl LoadingState {
    /// Start with the first message (the one that names the activity)
    pub fn new(messages: &'static [&'static str]) -> Self {
        Self {
            message: messages.first().copied().unwrap_or_default(),
            animation_frame: 0,
            messages,
            message_index: 0,
        }
    }

    /// Start at a random message, for variety on repeated runs
    pub fn shuffled(messages: &'static [&'static str]) -> Self {
        let mut state = Self::new(messages);
        if !messages.is_empty() {
            state.message_index = rand::thread_rng().gen_range(0..messages.len());
            state.message = messages[state.message_index];
        }
        state
    }

    /// Advance the spinner; rotate the message every 30 frames (~1.5s at 50ms)
    pub fn tick(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
        if !self.messages.is_empty() && self.animation_frame.is_multiple_of(30) {
            self.message_index = (self.message_index + 1) % self.messages.len();
            self.message = self.messages[self.message_index];
        }
    }
}

/// Path being typed into the file prompt
#[derive(Debug, Clone, Default)]
pub struct FilePromptState {
    pub input: String,
    /// Mode restored when the prompt closes
    pub return_to: UiMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// Transient status-line message
#[derive(Debug, Clone)]
pub struct Notice {
    pub text: String,
    pub level: NoticeLevel,
    pub created_at: Instant,
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    /// Which input surface has focus
    pub ui_mode: UiMode,

    /// Request lifecycle; drives the main view
    pub phase: AppPhase,

    /// Application settings from config file
    pub settings: Settings,

    /// Code being edited
    pub buffer: CodeBuffer,

    /// Image/PDF/other document sent alongside the code
    pub attachment: Option<Attachment>,

    /// Last successful analysis
    pub result: Option<AnalysisResult>,

    /// When `result` arrived
    pub analyzed_at: Option<DateTime<Local>>,

    /// User-facing error text while in [`AppPhase::Error`]
    pub error_message: Option<String>,

    /// Console output from the last execution; `None` while pending
    pub output: Option<String>,

    /// Whether the console output panel is open
    pub show_output: bool,

    /// Active section of the result card
    pub result_tab: ResultTab,

    /// Vertical scroll within the active result tab
    pub result_scroll: u16,

    /// Set when a copy succeeds; cleared on tick after the feedback window
    pub copied_at: Option<Instant>,

    pub file_prompt: FilePromptState,

    /// Mode restored when the help modal closes
    pub help_return_to: UiMode,

    pub notice: Option<Notice>,

    /// Spinner state while busy
    pub loading: LoadingState,

    should_quit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        let ui_mode = if settings.ui.show_onboarding {
            UiMode::Onboarding
        } else {
            UiMode::Editor
        };

        Self {
            ui_mode,
            phase: AppPhase::Idle,
            settings,
            buffer: CodeBuffer::from_text(PLACEHOLDER_CODE),
            attachment: None,
            result: None,
            analyzed_at: None,
            error_message: None,
            output: None,
            show_output: false,
            result_tab: ResultTab::default(),
            result_scroll: 0,
            copied_at: None,
            file_prompt: FilePromptState::default(),
            help_return_to: UiMode::Editor,
            notice: None,
            loading: LoadingState::new(ANALYZING_MESSAGES),
            should_quit: false,
        }
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Whether the editor still holds the untouched sample
    pub fn buffer_is_placeholder(&self) -> bool {
        self.buffer.text() == PLACEHOLDER_CODE
    }

    /// Snapshot of what would be sent to the model
    pub fn submission(&self) -> CodeSubmission {
        CodeSubmission::new(self.buffer.text(), self.attachment.clone())
    }

    /// Apply a loaded file.
    ///
    /// Source text replaces the buffer and drops any attachment. A binary
    /// file becomes the attachment; the buffer is kept as context unless it
    /// still holds the sample.
    pub fn apply_file(&mut self, file: EncodedFile) {
        match file {
            EncodedFile::Source { name, text } => {
                debug!("Loaded source file {} into editor", name);
                self.buffer.set_text(&text);
                self.attachment = None;
                self.set_notice(format!("Loaded {}", name), NoticeLevel::Info);
            }
            EncodedFile::Binary(attachment) => {
                debug!(
                    "Attached {} ({}, ~{} bytes)",
                    attachment.name,
                    attachment.mime_type,
                    attachment.decoded_len()
                );
                if self.buffer_is_placeholder() {
                    self.buffer.clear();
                }
                self.set_notice(format!("Attached {}", attachment.name), NoticeLevel::Info);
                self.attachment = Some(attachment);
            }
        }
    }

    /// Tabs available for the current result (empty without one)
    pub fn available_tabs(&self) -> Vec<ResultTab> {
        self.result
            .as_ref()
            .map(ResultTab::available)
            .unwrap_or_default()
    }

    /// Move `delta` tabs, wrapping around
    pub fn cycle_tab(&mut self, delta: isize) {
        let tabs = self.available_tabs();
        if tabs.is_empty() {
            return;
        }
        let current = tabs.iter().position(|t| *t == self.result_tab).unwrap_or(0) as isize;
        let len = tabs.len() as isize;
        let next = (current + delta).rem_euclid(len) as usize;
        self.result_tab = tabs[next];
        self.result_scroll = 0;
    }

    /// Code for the clipboard: the active tab's code when results are on
    /// screen, otherwise the editor content.
    pub fn copy_target(&self) -> Option<String> {
        if self.phase == AppPhase::Results {
            if let Some(result) = &self.result {
                let text = match self.result_tab {
                    ResultTab::Fix => Some(result.correct_syntax.clone()),
                    ResultTab::Simplified => result.simplified_logic.clone(),
                    ResultTab::Final => Some(result.formatted_code.clone()),
                    ResultTab::Output => result.output.clone(),
                    ResultTab::Errors | ResultTab::Explain | ResultTab::Tips => None,
                };
                if text.is_some() {
                    return text;
                }
            }
        }
        if self.buffer.is_blank() {
            None
        } else {
            Some(self.buffer.text())
        }
    }

    /// Whether the "Copied!" indicator is showing
    pub fn copy_feedback_active(&self) -> bool {
        self.copied_at.is_some()
    }

    /// Clear the copy indicator once its window has passed
    pub fn expire_copy_feedback(&mut self, now: Instant) {
        let window = Duration::from_millis(self.settings.ui.copy_feedback_ms);
        if let Some(at) = self.copied_at {
            if now.saturating_duration_since(at) >= window {
                self.copied_at = None;
            }
        }
    }

    pub fn set_notice(&mut self, text: impl Into<String>, level: NoticeLevel) {
        self.notice = Some(Notice {
            text: text.into(),
            level,
            created_at: Instant::now(),
        });
    }

    pub fn expire_notice(&mut self, now: Instant) {
        if let Some(notice) = &self.notice {
            if now.saturating_duration_since(notice.created_at) >= NOTICE_TTL {
                self.notice = None;
            }
        }
    }

    /// Clear everything produced by previous requests
    pub fn reset(&mut self) {
        self.phase = AppPhase::Idle;
        self.result = None;
        self.analyzed_at = None;
        self.error_message = None;
        self.attachment = None;
        self.output = None;
        self.show_output = false;
        self.result_tab = ResultTab::default();
        self.result_scroll = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> AnalysisResult {
        AnalysisResult {
            language: "Java".into(),
            errors: vec![],
            correct_syntax: "int a = 10;".into(),
            explanation: "ok".into(),
            simplified_logic: None,
            formatted_code: "int a = 10;\n".into(),
            learning_tips: vec![],
            output: None,
        }
    }

    #[test]
    fn test_new_state_holds_placeholder() {
        let state = AppState::new();
        assert_eq!(state.phase, AppPhase::Idle);
        assert!(state.buffer_is_placeholder());
        assert_eq!(state.ui_mode, UiMode::Onboarding);
        assert!(!state.should_quit());
    }

    #[test]
    fn test_onboarding_disabled_starts_in_editor() {
        let mut settings = Settings::default();
        settings.ui.show_onboarding = false;
        let state = AppState::with_settings(settings);
        assert_eq!(state.ui_mode, UiMode::Editor);
    }

    #[test]
    fn test_available_tabs_minimal() {
        let tabs = ResultTab::available(&sample_result());
        assert_eq!(
            tabs,
            vec![
                ResultTab::Errors,
                ResultTab::Fix,
                ResultTab::Explain,
                ResultTab::Final
            ]
        );
    }

    #[test]
    fn test_available_tabs_full() {
        let mut result = sample_result();
        result.simplified_logic = Some("x".into());
        result.output = Some("Hello".into());
        result.learning_tips = vec!["tip".into()];
        assert_eq!(ResultTab::available(&result).len(), 7);
    }

    #[test]
    fn test_cycle_tab_wraps() {
        let mut state = AppState::new();
        state.result = Some(sample_result());
        state.cycle_tab(-1);
        assert_eq!(state.result_tab, ResultTab::Final);
        state.cycle_tab(1);
        assert_eq!(state.result_tab, ResultTab::Errors);
    }

    #[test]
    fn test_copy_target_prefers_result_code() {
        let mut state = AppState::new();
        state.phase = AppPhase::Results;
        state.result = Some(sample_result());
        state.result_tab = ResultTab::Final;
        assert_eq!(state.copy_target().as_deref(), Some("int a = 10;\n"));

        state.result_tab = ResultTab::Explain;
        assert_eq!(state.copy_target(), Some(PLACEHOLDER_CODE.to_string()));
    }

    #[test]
    fn test_copy_target_blank_buffer() {
        let mut state = AppState::new();
        state.buffer.clear();
        assert_eq!(state.copy_target(), None);
    }

    #[test]
    fn test_expire_copy_feedback() {
        let mut state = AppState::new();
        let start = Instant::now();
        state.copied_at = Some(start);

        state.expire_copy_feedback(start + Duration::from_millis(1999));
        assert!(state.copy_feedback_active());

        state.expire_copy_feedback(start + Duration::from_millis(2000));
        assert!(!state.copy_feedback_active());
    }

    #[test]
    fn test_loading_state_rotates_messages() {
        let mut loading = LoadingState::new(ANALYZING_MESSAGES);
        assert_eq!(loading.message, "Scanning for bugs...");
        for _ in 0..30 {
            loading.tick();
        }
        assert_eq!(loading.message, ANALYZING_MESSAGES[1]);
    }

    #[test]
    fn test_loading_state_shuffled_picks_known_message() {
        let loading = LoadingState::shuffled(EXECUTING_MESSAGES);
        assert!(EXECUTING_MESSAGES.contains(&loading.message));
    }
}

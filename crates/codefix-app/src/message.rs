//! Message types for the application (TEA pattern)

use std::path::PathBuf;

use codefix_core::{AnalysisResult, EncodedFile};

use crate::code_buffer::EditorOp;
use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Bracketed paste from terminal
    Paste(String),

    /// Tick event for periodic updates
    Tick,

    /// Request application quit
    Quit,

    // ─────────────────────────────────────────────────────────
    // Analysis / Execution
    // ─────────────────────────────────────────────────────────
    /// "Fix My Code": analyze the current buffer and attachment
    Analyze,

    /// Simulate running the current buffer and attachment
    RunCode,

    /// Analysis reply parsed and validated
    AnalysisCompleted { result: Box<AnalysisResult> },

    /// Analysis failed; `error` is the internal description, for logging
    AnalysisFailed { error: String },

    /// Execution finished (real output or a fallback string)
    ExecutionCompleted { output: String },

    /// Clear results, error, attachment and output; back to idle
    Reset,

    /// Hide the console output panel
    CloseOutput,

    // ─────────────────────────────────────────────────────────
    // Editor
    // ─────────────────────────────────────────────────────────
    FocusEditor,
    BlurEditor,
    Edit(EditorOp),

    /// Drop the current attachment
    RemoveAttachment,

    // ─────────────────────────────────────────────────────────
    // File Loading
    // ─────────────────────────────────────────────────────────
    OpenFilePrompt,
    FilePromptInput { text: String },
    SubmitFilePrompt,
    CancelFilePrompt,

    /// Read and encode a file in the background
    LoadFile { path: PathBuf },

    FileLoaded { path: PathBuf, file: EncodedFile },
    FileLoadFailed { path: PathBuf, error: String },

    // ─────────────────────────────────────────────────────────
    // Results View
    // ─────────────────────────────────────────────────────────
    NextTab,
    PreviousTab,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,

    /// Copy the code shown in the active tab (or the buffer)
    CopyCode,
    CopyFinished,
    CopyFailed { error: String },

    // ─────────────────────────────────────────────────────────
    // Help
    // ─────────────────────────────────────────────────────────
    ToggleHelp,
    DismissHelp,
}

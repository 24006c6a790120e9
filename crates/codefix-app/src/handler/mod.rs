//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `request`: Analyze/run triggers, completions and reset
//! - `editor`: Code buffer, paste, file prompt and attachment handlers
//! - `keys`: Key event handlers for UI modes

pub(crate) mod editor;
pub(crate) mod keys;
pub(crate) mod request;
pub(crate) mod update;


use std::path::PathBuf;

use codefix_core::CodeSubmission;

use crate::message::Message;

// Re-export main entry point
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// Send the submission for structured analysis
    AnalyzeCode(CodeSubmission),

    /// Send the submission for simulated execution
    ExecuteCode(CodeSubmission),

    /// Read and encode a file off the UI thread
    LoadFile { path: PathBuf },

    /// Put text on the system clipboard
    CopyToClipboard { text: String },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}

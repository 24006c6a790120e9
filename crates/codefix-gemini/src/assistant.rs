//! Code assistant service trait
//!
//! The application layer talks to the model through [`CodeAssistant`] so it
//! can be driven by a stub in tests.

use codefix_core::prelude::*;
use codefix_core::{AnalysisResult, CodeSubmission};

use crate::client::GeminiClient;

/// Analysis and simulated execution of code submissions
#[trait_variant::make(CodeAssistant: Send)]
pub trait LocalCodeAssistant {
    /// Structured analysis. Failures propagate.
    async fn analyze(&self, submission: &CodeSubmission) -> Result<AnalysisResult>;

    /// Simulated console output. Never fails; errors become placeholder text.
    async fn execute(&self, submission: &CodeSubmission) -> String;
}

impl CodeAssistant for GeminiClient {
    async fn analyze(&self, submission: &CodeSubmission) -> Result<AnalysisResult> {
        GeminiClient::analyze(self, submission).await
    }

    async fn execute(&self, submission: &CodeSubmission) -> String {
        GeminiClient::execute(self, submission).await
    }
}

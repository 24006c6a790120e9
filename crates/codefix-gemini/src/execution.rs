//! Simulated execution
//!
//! Unlike analysis, execution never fails from the caller's point of view:
//! every error becomes [`EXECUTION_ERROR_FALLBACK`].

use codefix_core::prelude::*;
use codefix_core::CodeSubmission;

use crate::analysis::submission_parts;
use crate::client::GeminiClient;
use crate::prompts::execution_prompt;
use crate::protocol::{Content, GenerateContentRequest, GenerationConfig};

/// Shown when the model replied with nothing
pub const NO_OUTPUT_FALLBACK: &str = "No output generated.";

/// Shown when the request failed for any reason
pub const EXECUTION_ERROR_FALLBACK: &str =
    "Error: Could not execute code. Please check your connection and try again.";

/// Plain-text request asking for console output only
pub fn build_execution_request(submission: &CodeSubmission) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content::user(submission_parts(
            execution_prompt(&submission.code),
            submission,
        ))],
        system_instruction: None,
        generation_config: Some(GenerationConfig {
            response_mime_type: Some("text/plain".to_string()),
            response_schema: None,
        }),
    }
}

impl GeminiClient {
    /// Simulate running a submission and return its console output.
    pub async fn execute(&self, submission: &CodeSubmission) -> String {
        info!("Simulating execution of {} bytes", submission.code.len());

        let request = build_execution_request(submission);
        match self.generate(&request).await {
            Ok(text) if text.trim().is_empty() => NO_OUTPUT_FALLBACK.to_string(),
            Ok(text) => text,
            Err(Error::EmptyResponse) => NO_OUTPUT_FALLBACK.to_string(),
            Err(e) => {
                error!("Gemini execution error: {}", e);
                EXECUTION_ERROR_FALLBACK.to_string()
            }
        }
    }
}

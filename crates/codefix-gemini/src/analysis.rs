//! Structured code analysis

use std::sync::LazyLock;

use regex::Regex;

use codefix_core::prelude::*;
use codefix_core::{AnalysisResult, CodeSubmission};

use crate::client::GeminiClient;
use crate::prompts::{analysis_prompt, TUTOR_SYSTEM_INSTRUCTION};
use crate::protocol::{Content, GenerateContentRequest, GenerationConfig, Part};
use crate::schema::analysis_schema;

/// A reply wrapped in a single markdown fence, e.g. "```json\n{...}\n```"
static FENCED_REPLY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^\s*```[A-Za-z0-9_-]*[ \t]*\r?\n(.*?)\r?\n?\s*```\s*$")
        .expect("Invalid fenced reply regex")
});

/// User content parts: prompt plus code, then the attachment if any
pub fn submission_parts(prompt: String, submission: &CodeSubmission) -> Vec<Part> {
    let mut parts = vec![Part::text(prompt)];
    if let Some(attachment) = &submission.attachment {
        parts.push(Part::attachment(attachment));
    }
    parts
}

/// JSON-mode request with the analysis schema
pub fn build_analysis_request(submission: &CodeSubmission) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content::user(submission_parts(
            analysis_prompt(&submission.code),
            submission,
        ))],
        system_instruction: Some(Content::instruction(TUTOR_SYSTEM_INSTRUCTION)),
        generation_config: Some(GenerationConfig {
            response_mime_type: Some("application/json".to_string()),
            response_schema: Some(analysis_schema()),
        }),
    }
}

/// Remove a surrounding markdown code fence, if present
pub fn strip_code_fence(text: &str) -> &str {
    match FENCED_REPLY.captures(text).and_then(|c| c.get(1)) {
        Some(inner) => inner.as_str(),
        None => text.trim(),
    }
}

/// Parse a raw reply into a validated [`AnalysisResult`]
pub fn parse_analysis(text: &str) -> Result<AnalysisResult> {
    AnalysisResult::from_json(strip_code_fence(text))
}

impl GeminiClient {
    /// Analyze a submission.
    ///
    /// Every failure is returned to the caller; nothing is retried.
    pub async fn analyze(&self, submission: &CodeSubmission) -> Result<AnalysisResult> {
        info!(
            "Analyzing {} bytes of code (attachment: {})",
            submission.code.len(),
            submission
                .attachment
                .as_ref()
                .map(|a| a.mime_type.as_str())
                .unwrap_or("none")
        );

        let request = build_analysis_request(submission);
        let text = self.generate(&request).await?;
        let result = parse_analysis(&text).context("Gemini analysis reply rejected")?;

        info!(
            "Analysis complete: {} ({} errors)",
            result.language,
            result.errors.len()
        );
        Ok(result)
    }
}

//! Core domain types for the analysis and execution flows

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Which request (if any) is in flight, and what the main view shows.
///
/// Exactly one phase is active at a time. The phase drives rendering only; it
/// is never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AppPhase {
    /// Waiting for input
    #[default]
    Idle,
    /// Analysis request in flight
    Analyzing,
    /// Execution request in flight
    Executing,
    /// Analysis result on screen
    Results,
    /// Last analysis failed
    Error,
}

impl AppPhase {
    /// Whether a request is in flight (triggers are disabled)
    pub fn is_busy(&self) -> bool {
        matches!(self, AppPhase::Analyzing | AppPhase::Executing)
    }

    /// Whether an explicit reset returns this phase to idle
    pub fn is_resettable(&self) -> bool {
        matches!(self, AppPhase::Results | AppPhase::Error)
    }
}

/// A single problem reported by the model.
///
/// `line` is free text ("3", "3-4", "near the if statement") and is never
/// parsed as an integer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeError {
    /// Short error label (e.g. "Syntax Error")
    #[serde(rename = "type")]
    pub kind: String,

    /// Line number or location, as reported
    #[serde(default)]
    pub line: String,

    /// Beginner-friendly explanation of what is wrong
    pub description: String,

    /// The corrected code line
    pub fix: String,
}

impl CodeError {
    /// Fields every error item must carry, by wire name
    pub const REQUIRED_FIELDS: [&'static str; 3] = ["type", "description", "fix"];

    fn required_values(&self) -> [&str; 3] {
        [&self.kind, &self.description, &self.fix]
    }

    /// First required field that is blank, by wire name
    fn blank_required_field(&self) -> Option<&'static str> {
        Self::REQUIRED_FIELDS
            .into_iter()
            .zip(self.required_values())
            .find(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| name)
    }

    /// Location label for display, e.g. "Line 3". Empty when no line was given.
    pub fn location_label(&self) -> String {
        let line = self.line.trim();
        if line.is_empty() {
            String::new()
        } else {
            format!("Line {line}")
        }
    }
}

/// The structured reply from an analysis request.
///
/// Produced wholesale by the model and never edited locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Detected programming language (free-text label)
    pub language: String,

    /// Problems found, in the order the model returned them
    pub errors: Vec<CodeError>,

    /// Corrected snippet focusing on syntax
    pub correct_syntax: String,

    /// Short tutor-style explanation of why the errors happened
    pub explanation: String,

    /// Cleaner, simpler version of the logic
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simplified_logic: Option<String>,

    /// Full, properly indented final code
    pub formatted_code: String,

    /// One-line memory shortcuts
    #[serde(default)]
    pub learning_tips: Vec<String>,

    /// Simulated console output of the corrected code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

impl AnalysisResult {
    /// Top-level fields every reply must carry, by wire name
    pub const REQUIRED_FIELDS: [&'static str; 5] = [
        "language",
        "errors",
        "correctSyntax",
        "explanation",
        "formattedCode",
    ];

    /// Parse a raw model reply into a validated result.
    pub fn from_json(text: &str) -> Result<Self> {
        let result: AnalysisResult = serde_json::from_str(text)
            .map_err(|e| Error::malformed(format!("reply does not match schema: {e}")))?;
        result.validate()?;
        Ok(result.normalized())
    }

    /// Check the fields the response schema marks as required.
    ///
    /// The model is only best-effort bound to the schema, so presence is
    /// checked again after parsing.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("language", &self.language),
            ("correctSyntax", &self.correct_syntax),
            ("explanation", &self.explanation),
            ("formattedCode", &self.formatted_code),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(Error::malformed(format!("required field `{name}` is empty")));
            }
        }
        for (idx, err) in self.errors.iter().enumerate() {
            if let Some(name) = err.blank_required_field() {
                return Err(Error::malformed(format!(
                    "error #{} has an empty `{name}`",
                    idx + 1
                )));
            }
        }
        Ok(())
    }

    /// Drop optional sections that are present but blank.
    fn normalized(mut self) -> Self {
        if self
            .simplified_logic
            .as_deref()
            .is_some_and(|s| s.trim().is_empty())
        {
            self.simplified_logic = None;
        }
        if self.output.as_deref().is_some_and(|s| s.trim().is_empty()) {
            self.output = None;
        }
        self.learning_tips.retain(|tip| !tip.trim().is_empty());
        self
    }

    /// Whether the model found nothing wrong
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// A non-text file (image, PDF, ...) encoded for transmission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    /// Original file name
    pub name: String,

    /// MIME type sent alongside the payload
    pub mime_type: String,

    /// Base64 payload (standard alphabet, padded)
    pub data: String,
}

impl Attachment {
    /// Approximate decoded size in bytes
    pub fn decoded_len(&self) -> usize {
        let padding = self.data.chars().rev().take_while(|c| *c == '=').count();
        ((self.data.len() / 4) * 3).saturating_sub(padding.min(2))
    }
}

/// What gets sent to the model: code text and/or one attachment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeSubmission {
    /// Code or free-form context typed by the user
    pub code: String,

    /// Optional attached document
    pub attachment: Option<Attachment>,
}

impl CodeSubmission {
    pub fn new(code: impl Into<String>, attachment: Option<Attachment>) -> Self {
        Self {
            code: code.into(),
            attachment,
        }
    }

    /// True when there is neither code nor an attachment to send
    pub fn is_empty(&self) -> bool {
        self.code.trim().is_empty() && self.attachment.is_none()
    }

    /// Fail with [`Error::EmptySubmission`] when there is nothing to send
    pub fn ensure_not_empty(&self) -> Result<()> {
        if self.is_empty() {
            Err(Error::EmptySubmission)
        } else {
            Ok(())
        }
    }
}

//! codefix-gemini - Model service clients for Code Debug Helper
//!
//! Talks to the Gemini `generateContent` REST endpoint. Two request flavours
//! share one [`GeminiClient`]:
//!
//! - [`analysis`] - JSON-mode request with a declared response schema, parsed
//!   into an [`AnalysisResult`](codefix_core::AnalysisResult). Failures are
//!   returned to the caller.
//! - [`execution`] - plain-text request asking the model to simulate running
//!   the code. Failures are converted into a placeholder output string.
//!
//! The [`CodeAssistant`] trait is the seam used by the application layer, so
//! the state controller can be exercised without a network.

pub mod analysis;
pub mod assistant;
pub mod client;
pub mod config;
pub mod execution;
pub mod prompts;
pub mod protocol;
pub mod schema;

pub use assistant::{CodeAssistant, LocalCodeAssistant};
pub use client::GeminiClient;
pub use config::{GeminiConfig, DEFAULT_API_KEY_ENV, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use execution::{EXECUTION_ERROR_FALLBACK, NO_OUTPUT_FALLBACK};

//! # codefix-core - Core Domain Types
//!
//! Foundation crate for Code Debug Helper. Provides the analysis result model,
//! the attachment encoder, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing, base64, mime_guess).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`AnalysisResult`] - Structured reply describing language, errors and fixes
//! - [`CodeError`] - A single problem found in the submitted code
//! - [`Attachment`] - A non-text file encoded as base64 for transmission
//! - [`AppPhase`] - Which request (if any) is in flight and what the view shows
//! - [`CodeSubmission`] - Code text and/or attachment sent to the model
//!
//! ### Attachment Encoder (`attachment`)
//! - [`classify()`] - Decide whether a file is source text or a binary document
//! - [`encode_file()`] - Read a file into an [`EncodedFile`]
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum grouped by layer (service, attachment, terminal, ...)
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use codefix_core::prelude::*;
//! ```

pub mod attachment;
pub mod error;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all Code Debug Helper crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use attachment::{classify, encode_bytes, encode_file, EncodedFile, FileKind};
pub use error::{Error, Result, ResultExt};
pub use types::{AnalysisResult, AppPhase, Attachment, CodeError, CodeSubmission};

//! Application error types with rich context

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    // ─────────────────────────────────────────────────────────────
    // Model Service Errors
    // ─────────────────────────────────────────────────────────────
    #[error("API key is missing. Set {env_var} in your environment.")]
    MissingApiKey { env_var: String },

    #[error("Model service error: {message}")]
    Service { message: String },

    #[error("No response from the model service")]
    EmptyResponse,

    #[error("Malformed model response: {message}")]
    MalformedResponse { message: String },

    #[error("Nothing to submit: code and attachment are both empty")]
    EmptySubmission,

    // ─────────────────────────────────────────────────────────────
    // Attachment Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read {path}: {reason}")]
    FileRead { path: PathBuf, reason: String },

    // ─────────────────────────────────────────────────────────────
    // Clipboard Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Clipboard unavailable: {message}")]
    Clipboard { message: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ─────────────────────────────────────────────────────────────
    // Channel/Communication Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Channel send error: {message}")]
    ChannelSend { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn missing_api_key(env_var: impl Into<String>) -> Self {
        Self::MissingApiKey {
            env_var: env_var.into(),
        }
    }

    pub fn service(message: impl Into<String>) -> Self {
        Self::Service {
            message: message.into(),
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }

    pub fn file_read(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::FileRead {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn clipboard(message: impl Into<String>) -> Self {
        Self::Clipboard {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn channel_send(message: impl Into<String>) -> Self {
        Self::ChannelSend {
            message: message.into(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions (for use with color-eyre)
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::service("HTTP 503");
        assert_eq!(err.to_string(), "Model service error: HTTP 503");

        let err = Error::missing_api_key("GEMINI_API_KEY");
        assert!(err.to_string().contains("GEMINI_API_KEY"));
        assert!(err.to_string().contains("API key is missing"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_context_keeps_original_error() {
        let res: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let err = res.context("Failed to create log directory").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_with_context_passes_ok_through() {
        let res: Result<u8> = Ok(7);
        assert_eq!(res.with_context(|| "unused".to_string()).unwrap(), 7);
    }

    #[test]
    fn test_file_read_error_mentions_path() {
        let err = Error::file_read("/home/student/Main.java", "permission denied");
        assert!(err.to_string().contains("/home/student/Main.java"));
        assert!(err.to_string().contains("permission denied"));
    }

    #[test]
    fn test_error_constructors() {
        let _ = Error::terminal("test");
        let _ = Error::config("test");
        let _ = Error::channel_send("test");
        let _ = Error::clipboard("test");
    }
}

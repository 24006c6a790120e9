//! Client configuration and credential lookup

use codefix_core::prelude::*;

/// Default Gemini REST base URL
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model name
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Environment variable holding the API key
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Secondary variable checked when the primary one is unset
pub const LEGACY_API_KEY_ENV: &str = "API_KEY";

/// Connection settings for [`GeminiClient`](crate::GeminiClient)
#[derive(Clone)]
pub struct GeminiConfig {
    /// API key; `None` means every request fails before touching the network
    pub api_key: Option<String>,

    /// Name of the variable the key was expected in (for error messages)
    pub api_key_env: String,

    /// Model name, e.g. `gemini-2.5-flash`
    pub model: String,

    /// REST base URL (no trailing `/models`)
    pub base_url: String,
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("api_key_env", &self.api_key_env)
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl GeminiConfig {
    /// Build a config, reading the key from `api_key_env` (then `API_KEY`).
    pub fn from_env(
        api_key_env: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        let api_key_env = api_key_env.into();
        let api_key = read_key(&api_key_env).or_else(|| read_key(LEGACY_API_KEY_ENV));

        if api_key.is_none() {
            warn!(
                "No API key found in {} or {}; requests will fail",
                api_key_env, LEGACY_API_KEY_ENV
            );
        }

        Self {
            api_key,
            api_key_env,
            model: model.into(),
            base_url: base_url.into(),
        }
    }

    /// Explicit key, mostly for tests and headless callers
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// The API key, or [`Error::MissingApiKey`]
    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .ok_or_else(|| Error::missing_api_key(&self.api_key_env))
    }
}

fn read_key(var: &str) -> Option<String> {
    std::env::var(var)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

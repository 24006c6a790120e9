//! Configuration types for Code Debug Helper
//!
//! Defines:
//! - `Settings` - Top-level settings file
//! - `GeminiSettings` - Model service connection
//! - `UiSettings` - Terminal UI behavior

use serde::{Deserialize, Serialize};

use codefix_gemini::{DEFAULT_API_KEY_ENV, DEFAULT_BASE_URL, DEFAULT_MODEL};

/// Global application settings from `config.toml`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub gemini: GeminiSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Model service settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeminiSettings {
    /// Model name passed in the request path
    #[serde(default = "default_model")]
    pub model: String,

    /// REST base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Environment variable holding the API key. The key itself is never
    /// read from the settings file.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: default_base_url(),
            api_key_env: default_api_key_env(),
        }
    }
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_api_key_env() -> String {
    DEFAULT_API_KEY_ENV.to_string()
}

/// UI settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// Show the "How it works" modal on startup
    #[serde(default = "default_true")]
    pub show_onboarding: bool,

    /// How long the "Copied!" indicator stays visible
    #[serde(default = "default_copy_feedback_ms")]
    pub copy_feedback_ms: u64,

    /// Event poll interval; drives spinner animation
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            show_onboarding: true,
            copy_feedback_ms: default_copy_feedback_ms(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_copy_feedback_ms() -> u64 {
    2000
}

fn default_tick_rate_ms() -> u64 {
    50
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.gemini.model, "gemini-2.5-flash");
        assert_eq!(settings.gemini.api_key_env, "GEMINI_API_KEY");
        assert!(settings.ui.show_onboarding);
        assert_eq!(settings.ui.copy_feedback_ms, 2000);
        assert_eq!(settings.ui.tick_rate_ms, 50);
    }

    #[test]
    fn test_partial_section_fills_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            [ui]
            show_onboarding = false
            "#,
        )
        .unwrap();
        assert!(!settings.ui.show_onboarding);
        assert_eq!(settings.ui.copy_feedback_ms, 2000);
        assert_eq!(settings.gemini.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_settings_roundtrip_toml() {
        let mut settings = Settings::default();
        settings.gemini.model = "gemini-2.0-flash".to_string();
        let text = toml::to_string(&settings).unwrap();
        let parsed: Settings = toml::from_str(&text).unwrap();
        assert_eq!(parsed.gemini.model, "gemini-2.0-flash");
    }
}

//! Settings parser for `config.toml`

use std::path::{Path, PathBuf};

use codefix_core::prelude::*;

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "code-debug-helper";

/// Default settings file location: `<config_dir>/code-debug-helper/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `path`, or the default location when `None`.
///
/// Never fails: a missing file yields defaults silently, an unreadable or
/// invalid one yields defaults with a warning.
pub fn load_settings(path: Option<&Path>) -> Settings {
    let config_path = match path {
        Some(p) => p.to_path_buf(),
        None => match default_config_path() {
            Some(p) => p,
            None => {
                debug!("No config directory on this platform, using defaults");
                return Settings::default();
            }
        },
    };

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let temp = tempdir().unwrap();
        let settings = load_settings(Some(&temp.path().join("nope.toml")));
        assert!(settings.ui.show_onboarding);
    }

    #[test]
    fn test_load_custom_settings() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        std::fs::write(
            &path,
            r#"
[gemini]
model = "gemini-2.0-flash"
api_key_env = "MY_KEY"

[ui]
show_onboarding = false
copy_feedback_ms = 500
"#,
        )
        .unwrap();

        let settings = load_settings(Some(&path));
        assert_eq!(settings.gemini.model, "gemini-2.0-flash");
        assert_eq!(settings.gemini.api_key_env, "MY_KEY");
        assert!(!settings.ui.show_onboarding);
        assert_eq!(settings.ui.copy_feedback_ms, 500);
        assert_eq!(settings.ui.tick_rate_ms, 50);
    }

    #[test]
    fn test_load_invalid_toml_uses_defaults() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "this is [not valid toml").unwrap();

        let settings = load_settings(Some(&path));
        assert_eq!(settings.gemini.model, "gemini-2.5-flash");
    }
}

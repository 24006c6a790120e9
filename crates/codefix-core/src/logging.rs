//! File logging via tracing
//!
//! The terminal belongs to ratatui, so every event goes to a daily-rolling
//! file instead. `CODEFIX_LOG` sets the filter and `CODEFIX_LOG_DIR` moves
//! the log directory.
//!
//! ```bash
//! CODEFIX_LOG=debug codefix
//! CODEFIX_LOG=codefix_gemini=trace codefix Main.java
//! ```

use std::ffi::OsString;
use std::path::PathBuf;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{Result, ResultExt};

/// Filter directive variable
pub const LOG_FILTER_ENV: &str = "CODEFIX_LOG";

/// Log directory override variable
pub const LOG_DIR_ENV: &str = "CODEFIX_LOG_DIR";

const LOG_FILE_PREFIX: &str = "codefix.log";

const DEFAULT_FILTER: &str =
    "codefix=info,codefix_core=info,codefix_gemini=info,codefix_app=info,codefix_tui=info,warn";

/// Where log files are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogTarget {
    pub directory: PathBuf,
}

impl LogTarget {
    /// Resolve from `CODEFIX_LOG_DIR`, falling back to the per-user data dir
    pub fn from_env() -> Self {
        Self::resolve(std::env::var_os(LOG_DIR_ENV))
    }

    fn resolve(dir_override: Option<OsString>) -> Self {
        let directory = match dir_override {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("code-debug-helper")
                .join("logs"),
        };
        Self { directory }
    }

    /// Today's file carries a date suffix after this path
    pub fn file_prefix(&self) -> PathBuf {
        self.directory.join(LOG_FILE_PREFIX)
    }
}

/// Install the global subscriber and return where it writes
pub fn init() -> Result<LogTarget> {
    let target = LogTarget::from_env();
    std::fs::create_dir_all(&target.directory).with_context(|| {
        format!(
            "Failed to create log directory {}",
            target.directory.display()
        )
    })?;

    let appender = tracing_appender::rolling::daily(&target.directory, LOG_FILE_PREFIX);
    let filter =
        EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!(
        "Code Debug Helper {} started, logging to {}",
        env!("CARGO_PKG_VERSION"),
        target.directory.display()
    );
    Ok(target)
}

//! Configuration file parsing for Code Debug Helper
//!
//! Settings live in `<config_dir>/code-debug-helper/config.toml` unless a
//! path is given on the command line.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, load_settings};
pub use types::*;

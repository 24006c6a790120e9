//! codefix-tui - Terminal UI for Code Debug Helper
//!
//! This crate provides the ratatui-based terminal interface. It owns the
//! [`AppState`](codefix_app::AppState) for the lifetime of the UI loop and adds
//! terminal rendering, event polling, and widget display on top of
//! `codefix-app`.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;

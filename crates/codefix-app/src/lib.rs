//! # codefix-app - Application State and Orchestration
//!
//! The application layer for Code Debug Helper, built on the Elm Architecture
//! (TEA):
//!
//! - **Model** ([`AppState`]): request phase, code buffer, attachment, result, UI state
//! - **Message** ([`Message`]): every event the app reacts to
//! - **Update** ([`handler::update`]): pure state transitions returning an [`UpdateAction`]
//! - **Actions** ([`actions`]): tokio tasks that call the model service and
//!   report back over an mpsc channel
//!
//! Rendering lives in `codefix-tui`; this crate never touches the terminal.

pub mod actions;
pub mod code_buffer;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;

pub use code_buffer::{CodeBuffer, EditorOp};
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use process::process_message;
pub use state::{AppState, NoticeLevel, ResultTab, UiMode, PLACEHOLDER_CODE};

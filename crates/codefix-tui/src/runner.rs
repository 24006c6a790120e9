//! Main TUI runner - entry point and event loop
//!
//! Contains the application lifecycle:
//! - `run`: set up the terminal, start the signal handler, run the loop, restore
//! - `run_loop`: drain background results, render, then poll terminal input

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use codefix_app::config::Settings;
use codefix_app::message::Message;
use codefix_app::state::AppState;
use codefix_app::{process_message, signals};
use codefix_core::prelude::*;
use codefix_gemini::CodeAssistant;

use super::{event, render, terminal};

/// Run the TUI application.
///
/// `initial_file` is loaded into the editor (or attached) as if it had been
/// typed into the file prompt.
pub async fn run<A>(settings: Settings, assistant: A, initial_file: Option<PathBuf>) -> Result<()>
where
    A: CodeAssistant + Sync + 'static,
{
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let tick_rate = Duration::from_millis(settings.ui.tick_rate_ms.max(1));
    info!(
        "Starting TUI: model={}, tick={}ms",
        settings.gemini.model,
        tick_rate.as_millis()
    );

    // Initialize terminal
    let mut term = ratatui::init();
    terminal::enable_paste();

    let mut state = AppState::with_settings(settings);
    let assistant = Arc::new(assistant);

    // Unified message channel for background tasks and the signal handler
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    // Spawn signal handler (sends Message::Quit on SIGINT/SIGTERM)
    signals::spawn_signal_handler(msg_tx.clone());

    if let Some(path) = initial_file {
        process_message(&mut state, Message::LoadFile { path }, &msg_tx, &assistant);
    }

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, &assistant, tick_rate);

    // Restore terminal
    terminal::disable_paste();
    ratatui::restore();

    result
}

/// Main event loop
fn run_loop<A>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    assistant: &Arc<A>,
    tick_rate: Duration,
) -> Result<()>
where
    A: CodeAssistant + Sync + 'static,
{
    while !state.should_quit() {
        // Process results from background tasks and the signal handler
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, assistant);
        }

        // Render
        terminal.draw(|frame| render::view(frame, state))?;

        // Handle terminal events
        if let Some(message) = event::poll(tick_rate)? {
            process_message(state, message, &msg_tx, assistant);
        }
    }

    info!("UI loop finished");
    Ok(())
}

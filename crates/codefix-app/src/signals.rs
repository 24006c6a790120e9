//! Quit on SIGINT/SIGTERM (Ctrl+C on Windows)
//!
//! Raw mode swallows Ctrl+C as a key event, so this mostly matters for
//! `kill` and for the window between startup and `ratatui::init`.

use std::fmt;

use tokio::sync::mpsc;

use codefix_core::prelude::*;

use crate::message::Message;

/// Which signal ended the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    Interrupt,
    Terminate,
}

impl fmt::Display for ShutdownSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShutdownSignal::Interrupt => write!(f, "interrupt"),
            ShutdownSignal::Terminate => write!(f, "terminate"),
        }
    }
}

/// Forward the first shutdown signal to the event loop as [`Message::Quit`]
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        match next_shutdown_signal().await {
            Ok(signal) => {
                info!("Quitting on {} signal", signal);
                if tx.send(Message::Quit).await.is_err() {
                    debug!("Event loop already gone when {} arrived", signal);
                }
            }
            Err(e) => warn!("Signal handling unavailable: {}", e),
        }
    });
}

#[cfg(unix)]
async fn next_shutdown_signal() -> Result<ShutdownSignal> {
    use tokio::signal::unix::{signal, SignalKind};

    let listen = |kind: SignalKind, name: &str| {
        signal(kind).map_err(|e| Error::terminal(format!("cannot listen for {name}: {e}")))
    };
    let mut interrupt = listen(SignalKind::interrupt(), "SIGINT")?;
    let mut terminate = listen(SignalKind::terminate(), "SIGTERM")?;

    Ok(tokio::select! {
        _ = interrupt.recv() => ShutdownSignal::Interrupt,
        _ = terminate.recv() => ShutdownSignal::Terminate,
    })
}

#[cfg(windows)]
async fn next_shutdown_signal() -> Result<ShutdownSignal> {
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| Error::terminal(format!("cannot listen for Ctrl+C: {e}")))?;
    Ok(ShutdownSignal::Interrupt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_names() {
        assert_eq!(ShutdownSignal::Interrupt.to_string(), "interrupt");
        assert_eq!(ShutdownSignal::Terminate.to_string(), "terminate");
    }

    #[tokio::test]
    async fn test_no_quit_without_signal() {
        let (tx, mut rx) = mpsc::channel::<Message>(1);
        spawn_signal_handler(tx);

        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        assert!(rx.try_recv().is_err());
    }
}

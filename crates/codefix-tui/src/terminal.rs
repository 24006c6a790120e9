//! Terminal setup and restoration

use std::io;

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use codefix_core::prelude::*;

/// Install a panic hook that restores the terminal
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = execute!(io::stdout(), DisableBracketedPaste);
        ratatui::restore();
        original_hook(panic_info);
    }));
}

/// Turn on bracketed paste so pasted code arrives as one event
pub fn enable_paste() {
    if let Err(e) = execute!(io::stdout(), EnableBracketedPaste) {
        warn!("Failed to enable bracketed paste: {}", e);
    }
}

pub fn disable_paste() {
    if let Err(e) = execute!(io::stdout(), DisableBracketedPaste) {
        warn!("Failed to disable bracketed paste: {}", e);
    }
}

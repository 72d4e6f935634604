//! Terminal setup and restoration

use std::io::stdout;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use nwish_core::prelude::*;

/// Install a panic hook that restores the terminal
pub fn install_panic_hook(mouse_capture: bool) {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        if mouse_capture {
            let _ = execute!(stdout(), DisableMouseCapture);
        }
        ratatui::restore();
        original_hook(panic_info);
    }));
}

/// Report mouse wheel events to the application
pub fn enable_mouse_capture() -> Result<()> {
    execute!(stdout(), EnableMouseCapture)
        .map_err(|e| Error::terminal(format!("Failed to enable mouse capture: {}", e)))
}

pub fn disable_mouse_capture() -> Result<()> {
    execute!(stdout(), DisableMouseCapture)
        .map_err(|e| Error::terminal(format!("Failed to disable mouse capture: {}", e)))
}

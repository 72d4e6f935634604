//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use crate::pages::Pages;

/// Mouse wheel direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseScroll {
    Up,
    Down,
}

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Terminal size (columns, rows)
    Resize { width: u16, height: u16 },

    /// Mouse wheel over the terminal
    Mouse(MouseScroll),

    /// Spinner animation tick
    Tick,

    /// Leave the application (quit key, SIGINT/SIGTERM)
    Quit,

    /// Hand off from the spinner to the document screen
    EnterScreen,

    // ─────────────────────────────────────────────────────────
    // Page Loading Messages
    // ─────────────────────────────────────────────────────────
    /// Background page loading finished
    PagesLoaded(Pages),
    /// Background page loading failed
    LoadFailed { message: String },

    // ─────────────────────────────────────────────────────────
    // Scroll Messages
    // ─────────────────────────────────────────────────────────
    /// Scroll viewport up one line
    ScrollUp,
    /// Scroll viewport down one line
    ScrollDown,
    /// Page up in viewport
    PageUp,
    /// Page down in viewport
    PageDown,
    /// Half page up in viewport
    HalfPageUp,
    /// Half page down in viewport
    HalfPageDown,
    /// Scroll to top of content
    ScrollToTop,
    /// Scroll to bottom of content
    ScrollToBottom,

    // ─────────────────────────────────────────────────────────
    // Navigation Messages
    // ─────────────────────────────────────────────────────────
    /// Show the nav page bound to this key
    ShowPage(char),
    /// Return to the main document
    ShowDocument,
}

//! Abstract input key event, independent of terminal library.
//!
//! `InputKey` keeps crossterm types out of the state machine so the handlers
//! can be driven directly from tests.

/// Abstract input key event, independent of terminal library.
/// Converted from crossterm::event::KeyEvent at the TUI boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    // Character keys
    /// Regular character key (a-z, 0-9, symbols, space)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+c, Ctrl+d, etc.)
    CharCtrl(char),

    // Navigation
    /// Up arrow key
    Up,
    /// Down arrow key
    Down,
    /// Home key
    Home,
    /// End key
    End,
    /// Page Up key
    PageUp,
    /// Page Down key
    PageDown,

    // Action keys
    /// Enter/Return key
    Enter,
    /// Escape key
    Esc,
}

impl InputKey {
    /// `q`, `esc` and `ctrl+c` quit from every phase
    pub fn is_quit(&self) -> bool {
        matches!(
            self,
            InputKey::Char('q') | InputKey::Esc | InputKey::CharCtrl('c')
        )
    }
}

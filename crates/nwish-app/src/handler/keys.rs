//! Key event handlers for each phase

use crate::input_key::InputKey;
use crate::message::Message;
use crate::screen::ScreenState;
use crate::spinner::SpinnerState;
use crate::state::{AppState, Phase};

/// Convert key events to messages based on the active phase
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if key.is_quit() {
        return Some(Message::Quit);
    }

    match state.phase {
        Phase::Loading(ref spinner) => handle_key_loading(spinner, key),
        Phase::Screen(ref screen) if screen.is_ready() => handle_key_ready(state, screen, key),
        // Nothing but a terminal size moves the screen out of Uninitialized
        Phase::Screen(_) => None,
    }
}

/// Handle key events while the spinner is shown
fn handle_key_loading(spinner: &SpinnerState, key: InputKey) -> Option<Message> {
    match key {
        // A failed load can only be quit
        InputKey::Char('c' | 'C') if !spinner.is_failed() => Some(Message::EnterScreen),
        _ => None,
    }
}

/// Handle key events on the ready screen
fn handle_key_ready(state: &AppState, screen: &ScreenState, key: InputKey) -> Option<Message> {
    if let InputKey::Char(c) = key {
        // Nav shortcuts accept either case
        if let Some(link) = state
            .style
            .nav
            .iter()
            .find(|link| link.key.eq_ignore_ascii_case(&c))
        {
            return Some(Message::ShowPage(link.key));
        }
        if c == 'h' && screen.active_page().is_some() {
            return Some(Message::ShowDocument);
        }
    }

    match key {
        // Line scrolling
        InputKey::Char('j') | InputKey::Down => Some(Message::ScrollDown),
        InputKey::Char('k') | InputKey::Up => Some(Message::ScrollUp),

        // Page scrolling
        InputKey::Char(' ' | 'f') | InputKey::PageDown => Some(Message::PageDown),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::Char('d') | InputKey::CharCtrl('d') => Some(Message::HalfPageDown),
        InputKey::Char('u') | InputKey::CharCtrl('u') => Some(Message::HalfPageUp),

        // Jump
        InputKey::Home => Some(Message::ScrollToTop),
        InputKey::End => Some(Message::ScrollToBottom),

        _ => None,
    }
}

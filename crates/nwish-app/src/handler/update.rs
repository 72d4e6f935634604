//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppState, Phase};

use super::{keys::handle_key, loading, scroll, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Resize { width, height } => scroll::handle_resize(state, width, height),

        Message::Mouse(direction) => scroll::handle_mouse(state, direction),

        // ─────────────────────────────────────────────────────────
        // Loading Messages
        // ─────────────────────────────────────────────────────────
        Message::Tick => loading::handle_tick(state),
        Message::EnterScreen => loading::handle_enter_screen(state),
        Message::PagesLoaded(pages) => loading::handle_pages_loaded(state, pages),
        Message::LoadFailed { message } => loading::handle_load_failed(state, message),

        // ─────────────────────────────────────────────────────────
        // Scroll Messages
        // ─────────────────────────────────────────────────────────
        Message::ScrollUp => scroll::with_viewport(state, |vp| vp.line_up(1)),
        Message::ScrollDown => scroll::with_viewport(state, |vp| vp.line_down(1)),
        Message::PageUp => scroll::with_viewport(state, |vp| vp.page_up()),
        Message::PageDown => scroll::with_viewport(state, |vp| vp.page_down()),
        Message::HalfPageUp => scroll::with_viewport(state, |vp| vp.half_page_up()),
        Message::HalfPageDown => scroll::with_viewport(state, |vp| vp.half_page_down()),
        Message::ScrollToTop => scroll::with_viewport(state, |vp| vp.goto_top()),
        Message::ScrollToBottom => scroll::with_viewport(state, |vp| vp.goto_bottom()),

        // ─────────────────────────────────────────────────────────
        // Navigation Messages
        // ─────────────────────────────────────────────────────────
        Message::ShowPage(key) => scroll::handle_show_page(state, key),
        Message::ShowDocument => scroll::handle_show_document(state),
    }
}

/// Phase name for logging
pub(super) fn phase_name(state: &AppState) -> &'static str {
    match state.phase {
        Phase::Loading(_) => "loading",
        Phase::Screen(ref screen) if screen.is_ready() => "ready",
        Phase::Screen(_) => "uninitialized",
    }
}

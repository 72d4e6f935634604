//! Viewport handlers: resize, scrolling and page switching

use tracing::debug;

use crate::message::MouseScroll;
use crate::state::{AppState, Phase};
use crate::viewport::{Viewport, MOUSE_WHEEL_DELTA};

use super::{UpdateAction, UpdateResult};

/// Apply a terminal size to the screen.
///
/// The spinner has no geometry, so a resize before the handoff is dropped;
/// the handoff requests a fresh size.
pub fn handle_resize(state: &mut AppState, width: u16, height: u16) -> UpdateResult {
    let Phase::Screen(ref mut screen) = state.phase else {
        return UpdateResult::none();
    };

    let was_ready = screen.is_ready();
    screen.handle_resize(&state.style, width, height);
    if !was_ready {
        debug!("Screen ready at {}x{}", width, height);
    }

    resync_if_high_performance(state)
}

/// Run `f` against the viewport of a ready screen
pub fn with_viewport(state: &mut AppState, f: impl FnOnce(&mut Viewport)) -> UpdateResult {
    if let Some(viewport) = state.screen_mut().and_then(|s| s.viewport_mut()) {
        f(viewport);
    }
    UpdateResult::none()
}

pub fn handle_mouse(state: &mut AppState, direction: MouseScroll) -> UpdateResult {
    with_viewport(state, |vp| match direction {
        MouseScroll::Up => vp.line_up(MOUSE_WHEEL_DELTA),
        MouseScroll::Down => vp.line_down(MOUSE_WHEEL_DELTA),
    })
}

/// Replace the viewport content with a loaded nav page.
/// Keys whose page never loaded are ignored.
pub fn handle_show_page(state: &mut AppState, key: char) -> UpdateResult {
    let Phase::Screen(ref mut screen) = state.phase else {
        return UpdateResult::none();
    };
    let Some(page) = state.pages.get(key) else {
        debug!("No page loaded for '{}'", key);
        return UpdateResult::none();
    };

    if screen.show_page(key, page) {
        resync_if_high_performance(state)
    } else {
        UpdateResult::none()
    }
}

pub fn handle_show_document(state: &mut AppState) -> UpdateResult {
    let changed = state
        .screen_mut()
        .is_some_and(|screen| screen.show_document());
    if changed {
        resync_if_high_performance(state)
    } else {
        UpdateResult::none()
    }
}

fn resync_if_high_performance(state: &AppState) -> UpdateResult {
    match state.screen() {
        Some(screen) if screen.render_mode().is_high_performance() => {
            UpdateResult::action(UpdateAction::Resync)
        }
        _ => UpdateResult::none(),
    }
}

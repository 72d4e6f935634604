//! Spinner handlers: animation ticks, background page results and the
//! handoff to the screen.

use tracing::{debug, info, warn};

use crate::pages::Pages;
use crate::state::{AppState, Phase};

use super::{update::phase_name, UpdateAction, UpdateResult};

/// Advance the spinner and request the next tick.
///
/// Outside the spinner, or once it shows an error, no tick is requested and
/// the animation stops.
pub fn handle_tick(state: &mut AppState) -> UpdateResult {
    let interval = state.settings.ui.tick_interval();
    let animating = match state.phase {
        Phase::Loading(ref mut spinner) => spinner.tick(),
        Phase::Screen(_) => false,
    };

    if animating {
        UpdateResult::action(UpdateAction::ScheduleTick(interval))
    } else {
        debug!("Tick not rescheduled in {} phase", phase_name(state));
        UpdateResult::none()
    }
}

/// Swap the spinner for an uninitialized screen and ask for the terminal size
pub fn handle_enter_screen(state: &mut AppState) -> UpdateResult {
    if state.enter_screen() {
        UpdateResult::action(UpdateAction::RequestSize)
    } else {
        UpdateResult::none()
    }
}

pub fn handle_pages_loaded(state: &mut AppState, pages: Pages) -> UpdateResult {
    info!("{} nav page(s) available", pages.len());
    state.pages = pages;
    if let Phase::Loading(ref mut spinner) = state.phase {
        spinner.mark_loaded();
    }
    UpdateResult::none()
}

/// A load error is terminal for the spinner. After the handoff it is only
/// logged: the pages stay unavailable and their nav keys do nothing.
pub fn handle_load_failed(state: &mut AppState, message: String) -> UpdateResult {
    match state.phase {
        Phase::Loading(ref mut spinner) => {
            warn!("Loading failed: {}", message);
            spinner.fail(message);
        }
        Phase::Screen(_) => {
            warn!("Loading failed after screen was entered: {}", message);
        }
    }
    UpdateResult::none()
}

//! Application state (Model in TEA pattern)

use nwish_core::Document;
use tracing::info;

use crate::config::Settings;
use crate::decorations::DecorationStyle;
use crate::handler::UpdateAction;
use crate::pages::Pages;
use crate::screen::ScreenState;
use crate::spinner::SpinnerState;

/// Which top-level state is receiving events
#[derive(Debug, Clone)]
pub enum Phase {
    /// Spinner shown before the screen; owns no viewport
    Loading(SpinnerState),
    /// Interactive document screen
    Screen(ScreenState),
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    /// Active phase
    pub phase: Phase,

    /// Loaded configuration
    pub settings: Settings,

    /// Decoration settings derived once from `settings`
    pub style: DecorationStyle,

    /// Nav pages delivered by the background loader
    pub pages: Pages,

    /// Main document, handed to the screen when it is entered
    document: Document,

    quitting: bool,
}

impl AppState {
    /// Start in the loading phase
    pub fn new(document: Document, settings: Settings) -> Self {
        Self {
            phase: Phase::Loading(SpinnerState::new()),
            style: DecorationStyle::from_settings(&settings),
            settings,
            pages: Pages::new(),
            document,
            quitting: false,
        }
    }

    /// Effect to run before the first event: the spinner's first tick
    pub fn init(&self) -> Option<UpdateAction> {
        match self.phase {
            Phase::Loading(_) => Some(UpdateAction::ScheduleTick(
                self.settings.ui.tick_interval(),
            )),
            Phase::Screen(_) => None,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn should_quit(&self) -> bool {
        self.quitting
    }

    pub fn request_quit(&mut self) {
        if let Phase::Loading(ref mut spinner) = self.phase {
            spinner.set_quitting();
        }
        self.quitting = true;
    }

    pub fn spinner(&self) -> Option<&SpinnerState> {
        match self.phase {
            Phase::Loading(ref spinner) => Some(spinner),
            Phase::Screen(_) => None,
        }
    }

    pub fn screen(&self) -> Option<&ScreenState> {
        match self.phase {
            Phase::Screen(ref screen) => Some(screen),
            Phase::Loading(_) => None,
        }
    }

    pub fn screen_mut(&mut self) -> Option<&mut ScreenState> {
        match self.phase {
            Phase::Screen(ref mut screen) => Some(screen),
            Phase::Loading(_) => None,
        }
    }

    /// Replace the spinner with an uninitialized screen.
    ///
    /// Returns `false` if the screen is already active.
    pub fn enter_screen(&mut self) -> bool {
        if let Phase::Screen(_) = self.phase {
            return false;
        }
        info!("Entering document screen");
        self.phase = Phase::Screen(ScreenState::new(
            self.document.clone(),
            self.settings.ui.render_mode,
        ));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new(Document::from_text("hello"), Settings::default())
    }

    #[test]
    fn test_new_state_is_loading() {
        let state = state();
        assert!(state.spinner().is_some());
        assert!(state.screen().is_none());
        assert!(!state.should_quit());
    }

    #[test]
    fn test_init_schedules_first_tick() {
        let state = state();
        assert!(matches!(
            state.init(),
            Some(UpdateAction::ScheduleTick(d)) if d == state.settings.ui.tick_interval()
        ));
    }

    #[test]
    fn test_enter_screen_once() {
        let mut state = state();
        assert!(state.enter_screen());
        assert!(!state.enter_screen());
        let screen = state.screen().unwrap();
        assert!(!screen.is_ready());
        assert_eq!(screen.document().text(), "hello");
        assert!(state.init().is_none());
    }

    #[test]
    fn test_request_quit_marks_spinner() {
        let mut state = state();
        state.request_quit();
        assert!(state.should_quit());
        assert!(state.spinner().unwrap().is_quitting());
    }
}

//! Loading spinner shown before the document screen.
//!
//! The spinner animates only while it keeps asking for ticks: [`SpinnerState::tick`]
//! reports whether another tick should be scheduled, and once a load error is
//! recorded it stops asking.

/// Braille "dot" spinner frames
pub const SPINNER_FRAMES: &[&str] = &["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

const LOADING_MESSAGE: &str = "Loading content...";
const LOADED_MESSAGE: &str = "Content loaded...";

/// State of the loading indicator
#[derive(Debug, Clone, Default)]
pub struct SpinnerState {
    /// Animation frame counter
    animation_frame: u64,
    /// Set once a quit key was pressed
    quitting: bool,
    /// Load error, if any. Terminal: the spinner stops animating.
    last_error: Option<String>,
    /// Background page loading finished
    content_loaded: bool,
}

impl SpinnerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn animation_frame(&self) -> u64 {
        self.animation_frame
    }

    pub fn is_quitting(&self) -> bool {
        self.quitting
    }

    pub fn is_failed(&self) -> bool {
        self.last_error.is_some()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn is_loaded(&self) -> bool {
        self.content_loaded
    }

    /// Advance the animation.
    ///
    /// Returns `true` when the caller should schedule the next tick. After a
    /// load error the frame is frozen and no further tick is requested.
    pub fn tick(&mut self) -> bool {
        if self.is_failed() {
            return false;
        }
        self.animation_frame = self.animation_frame.wrapping_add(1);
        true
    }

    /// Record a load error. The first error wins.
    pub fn fail(&mut self, message: impl Into<String>) {
        if self.last_error.is_none() {
            self.last_error = Some(message.into());
        }
    }

    pub fn mark_loaded(&mut self) {
        self.content_loaded = true;
    }

    pub fn set_quitting(&mut self) {
        self.quitting = true;
    }

    /// Current spinner glyph
    pub fn glyph(&self) -> &'static str {
        SPINNER_FRAMES[(self.animation_frame as usize) % SPINNER_FRAMES.len()]
    }

    /// Text of the loading screen
    pub fn view(&self) -> String {
        if let Some(ref err) = self.last_error {
            return format!("\n\n{}\n\npress q to quit\n\n", err);
        }

        let status = if self.content_loaded {
            LOADED_MESSAGE
        } else {
            LOADING_MESSAGE
        };

        let text = format!(
            "\n\n{} {}\n\npress c to continue \npress q to quit\n\n",
            self.glyph(),
            status
        );

        if self.quitting {
            text + "\n"
        } else {
            text
        }
    }
}

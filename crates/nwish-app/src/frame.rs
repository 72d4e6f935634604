//! Frame composition (View in TEA pattern)
//!
//! [`view`] turns the current [`AppState`] into a [`FrameView`]: plain text
//! tagged by section so the TUI can style each part without re-deriving the
//! layout. `FrameView` also implements `Display`, which is the canonical frame
//! string.

use std::fmt;

use crate::decorations;
use crate::screen::ScreenState;
use crate::state::{AppState, Phase};
use crate::text::display_width;

/// Shown until the first terminal size arrives
pub const PLACEHOLDER: &str = "Initializing, Please wait!";

/// One navigation entry, already cut to fit the frame width
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavSegment {
    pub key: char,
    /// `"(a)"`
    pub key_text: String,
    /// `" About"`
    pub label: String,
    /// Trailing spaces before the next entry
    pub gap: usize,
    /// The page for this key is the one on screen
    pub active: bool,
}

impl NavSegment {
    pub fn width(&self) -> usize {
        display_width(&self.key_text) + display_width(&self.label) + self.gap
    }
}

impl fmt::Display for NavSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{:gap$}", self.key_text, self.label, "", gap = self.gap)
    }
}

/// A single row of the screen frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameLine {
    Header(String),
    Nav(Vec<NavSegment>),
    Blank,
    Body(String),
    Footer(String),
}

impl fmt::Display for FrameLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameLine::Header(text) | FrameLine::Body(text) | FrameLine::Footer(text) => {
                f.write_str(text)
            }
            FrameLine::Nav(segments) => segments.iter().try_for_each(|s| write!(f, "{}", s)),
            FrameLine::Blank => Ok(()),
        }
    }
}

/// Everything needed to paint one frame
#[derive(Debug, Clone, PartialEq)]
pub enum FrameView {
    /// Spinner (or its error) before the screen is entered
    Loading { text: String, failed: bool },
    /// Screen entered but no terminal size yet
    Placeholder,
    /// Header, nav bar, visible document lines and footer
    Screen(Vec<FrameLine>),
}

impl FrameView {
    /// Number of rows the frame occupies
    pub fn height(&self) -> usize {
        match self {
            FrameView::Loading { text, .. } => text.lines().count(),
            FrameView::Placeholder => 1,
            FrameView::Screen(lines) => lines.len(),
        }
    }
}

impl fmt::Display for FrameView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameView::Loading { text, .. } => f.write_str(text),
            FrameView::Placeholder => f.write_str(PLACEHOLDER),
            FrameView::Screen(lines) => {
                for (i, line) in lines.iter().enumerate() {
                    if i > 0 {
                        f.write_str("\n")?;
                    }
                    write!(f, "{}", line)?;
                }
                Ok(())
            }
        }
    }
}

/// Compose the frame for the active phase
pub fn view(state: &AppState) -> FrameView {
    match &state.phase {
        Phase::Loading(spinner) => FrameView::Loading {
            text: spinner.view(),
            failed: spinner.is_failed(),
        },
        Phase::Screen(screen) => screen_view(screen, &state.style),
    }
}

/// Compose the screen frame: decorations around the viewport's visible lines.
///
/// The body is padded to the viewport height so the footer keeps its row
/// when the content ends early.
pub fn screen_view(screen: &ScreenState, style: &decorations::DecorationStyle) -> FrameView {
    let Some(viewport) = screen.viewport() else {
        return FrameView::Placeholder;
    };

    let width = viewport.width();
    let mut lines = decorations::top_lines(style, width, screen.active_page());

    let body = viewport.visible_slice();
    let padding = viewport.height().saturating_sub(body.len());
    lines.extend(body.into_iter().map(FrameLine::Body));
    lines.extend(std::iter::repeat(FrameLine::Body(String::new())).take(padding));

    lines.extend(decorations::bottom_lines(width, viewport.scroll_percent()));

    FrameView::Screen(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use nwish_core::Document;

    fn numbered(n: usize) -> String {
        (0..n)
            .map(|i| format!("line {}", i))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn ready_screen(lines: usize, width: u16, height: u16) -> (ScreenState, decorations::DecorationStyle) {
        let style = decorations::DecorationStyle::default();
        let mut screen = ScreenState::new(Document::from_text(numbered(lines)), Default::default());
        screen.handle_resize(&style, width, height);
        (screen, style)
    }

    #[test]
    fn test_placeholder_before_resize() {
        let style = decorations::DecorationStyle::default();
        let screen = ScreenState::new(Document::from_text("hello"), Default::default());
        let frame = screen_view(&screen, &style);
        assert_eq!(frame, FrameView::Placeholder);
        assert_eq!(frame.to_string(), PLACEHOLDER);
    }

    #[test]
    fn test_screen_frame_fills_terminal_height() {
        let (screen, style) = ready_screen(100, 80, 24);
        let frame = screen_view(&screen, &style);
        assert_eq!(frame.height(), 24);
        assert_eq!(frame.to_string().lines().count(), 24);
    }

    #[test]
    fn test_short_content_is_padded() {
        let (screen, style) = ready_screen(2, 80, 24);
        let FrameView::Screen(lines) = screen_view(&screen, &style) else {
            panic!("expected screen frame");
        };
        assert_eq!(lines.len(), 24);
        assert!(matches!(lines.last(), Some(FrameLine::Footer(_))));
        assert!(lines.iter().any(|l| *l == FrameLine::Body("line 1".into())));
    }

    #[test]
    fn test_frame_sections_in_order() {
        let (screen, style) = ready_screen(100, 80, 24);
        let FrameView::Screen(lines) = screen_view(&screen, &style) else {
            panic!("expected screen frame");
        };
        assert!(matches!(lines[0], FrameLine::Header(_)));
        assert_eq!(lines[3], FrameLine::Blank);
        assert!(matches!(lines[4], FrameLine::Nav(_)));
        assert_eq!(lines[7], FrameLine::Body("line 0".into()));
        assert!(lines[21..].iter().all(|l| matches!(l, FrameLine::Footer(_))));
    }

    #[test]
    fn test_frame_text_contains_title_and_percent() {
        let (screen, style) = ready_screen(100, 80, 24);
        let text = screen_view(&screen, &style).to_string();
        assert!(text.contains("Nimai C. (Dev)"));
        assert!(text.contains("(a) About"));
        assert!(text.contains("  0%"));
    }

    #[test]
    fn test_frame_is_stable_between_calls() {
        let (screen, style) = ready_screen(100, 80, 24);
        assert_eq!(screen_view(&screen, &style), screen_view(&screen, &style));
    }

    #[test]
    fn test_tiny_terminal_frame() {
        let (screen, style) = ready_screen(100, 5, 3);
        let frame = screen_view(&screen, &style);
        for line in frame.to_string().lines() {
            assert!(display_width(line) <= 5);
        }
    }

    #[test]
    fn test_nav_segment_display() {
        let segment = NavSegment {
            key: 'a',
            key_text: "(a)".into(),
            label: " About".into(),
            gap: 2,
            active: false,
        };
        assert_eq!(segment.to_string(), "(a) About  ");
        assert_eq!(segment.width(), 11);
    }

    #[test]
    fn test_view_follows_phase() {
        let mut state = AppState::new(Document::from_text("doc"), Settings::default());
        assert!(matches!(view(&state), FrameView::Loading { failed: false, .. }));

        state.enter_screen();
        assert_eq!(view(&state), FrameView::Placeholder);
    }
}

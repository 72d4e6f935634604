//! Document screen: `Uninitialized` until the first terminal size, then
//! `Ready` for good.

use nwish_core::Document;
use tracing::debug;

use crate::config::RenderMode;
use crate::decorations::{self, DecorationStyle};
use crate::viewport::Viewport;

/// The interactive screen.
///
/// `viewport` is `None` while uninitialized; geometry-dependent rendering is
/// undefined until a resize arrives.
#[derive(Debug, Clone)]
pub struct ScreenState {
    document: Document,
    render_mode: RenderMode,
    viewport: Option<Viewport>,
    /// Nav key of the page on screen; `None` shows the main document
    active_page: Option<char>,
}

impl ScreenState {
    pub fn new(document: Document, render_mode: RenderMode) -> Self {
        Self {
            document,
            render_mode,
            viewport: None,
            active_page: None,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.viewport.is_some()
    }

    pub fn viewport(&self) -> Option<&Viewport> {
        self.viewport.as_ref()
    }

    pub fn viewport_mut(&mut self) -> Option<&mut Viewport> {
        self.viewport.as_mut()
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn active_page(&self) -> Option<char> {
        self.active_page
    }

    pub fn render_mode(&self) -> RenderMode {
        self.render_mode
    }

    /// Apply a terminal size.
    ///
    /// The first call creates the viewport below the header and above the
    /// footer and loads the content; later calls only resize it. Content
    /// lines are cut at render time, so a width change needs no reload.
    pub fn handle_resize(&mut self, style: &DecorationStyle, width: u16, height: u16) {
        let header_height = decorations::header_height(style);
        let footer_height = decorations::footer_height();
        let width = usize::from(width);
        let height = usize::from(height).saturating_sub(header_height + footer_height);

        match self.viewport {
            Some(ref mut viewport) => {
                debug!("Resizing viewport to {}x{}", width, height);
                viewport.resize(width, height);
            }
            None => {
                debug!("Creating viewport {}x{}", width, height);
                let mut viewport = Viewport::new(width, height).with_render_mode(self.render_mode);
                viewport.set_content(self.document.text());
                self.viewport = Some(viewport);
            }
        }
    }

    /// Show a nav page. Returns `false` while uninitialized.
    pub fn show_page(&mut self, key: char, page: &Document) -> bool {
        let Some(ref mut viewport) = self.viewport else {
            return false;
        };
        viewport.set_content(page.text());
        self.active_page = Some(key);
        true
    }

    /// Go back to the main document. Returns `false` while uninitialized.
    pub fn show_document(&mut self) -> bool {
        let Some(ref mut viewport) = self.viewport else {
            return false;
        };
        viewport.set_content(self.document.text());
        self.active_page = None;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(n: usize) -> Document {
        Document::from_text(
            (0..n)
                .map(|i| format!("line {}", i))
                .collect::<Vec<_>>()
                .join("\n"),
        )
    }

    #[test]
    fn test_new_screen_is_uninitialized() {
        let screen = ScreenState::new(numbered(10), RenderMode::Standard);
        assert!(!screen.is_ready());
        assert!(screen.viewport().is_none());
    }

    #[test]
    fn test_first_resize_creates_viewport() {
        let style = DecorationStyle::default();
        let mut screen = ScreenState::new(numbered(100), RenderMode::Standard);
        screen.handle_resize(&style, 80, 24);

        let vp = screen.viewport().unwrap();
        let expected = 24 - decorations::header_height(&style) - decorations::footer_height();
        assert_eq!(vp.width(), 80);
        assert_eq!(vp.height(), expected);
        assert_eq!(vp.offset(), 0);
        assert_eq!(vp.line_count(), 100);
        assert_eq!(vp.scroll_percent(), 0.0);
    }

    #[test]
    fn test_resize_smaller_than_decorations() {
        let style = DecorationStyle::default();
        let mut screen = ScreenState::new(numbered(100), RenderMode::Standard);
        screen.handle_resize(&style, 0, 2);

        let vp = screen.viewport().unwrap();
        assert_eq!(vp.height(), 0);
        assert_eq!(vp.width(), 0);
        assert!(vp.visible_slice().is_empty());
    }

    #[test]
    fn test_later_resize_keeps_offset_when_valid() {
        let style = DecorationStyle::default();
        let mut screen = ScreenState::new(numbered(100), RenderMode::Standard);
        screen.handle_resize(&style, 80, 24);
        screen.viewport_mut().unwrap().scroll(20);

        screen.handle_resize(&style, 120, 40);
        let vp = screen.viewport().unwrap();
        assert_eq!(vp.width(), 120);
        assert_eq!(vp.offset(), 20);
        assert_eq!(vp.line_count(), 100);
    }

    #[test]
    fn test_render_mode_reaches_viewport() {
        let style = DecorationStyle::default();
        let mut screen = ScreenState::new(numbered(1), RenderMode::HighPerformance);
        screen.handle_resize(&style, 80, 24);
        assert!(screen.viewport().unwrap().render_mode().is_high_performance());
    }

    #[test]
    fn test_show_page_requires_viewport() {
        let mut screen = ScreenState::new(numbered(1), RenderMode::Standard);
        assert!(!screen.show_page('a', &Document::from_text("About")));
        assert_eq!(screen.active_page(), None);
    }

    #[test]
    fn test_show_page_and_back() {
        let style = DecorationStyle::default();
        let mut screen = ScreenState::new(numbered(50), RenderMode::Standard);
        screen.handle_resize(&style, 80, 24);
        screen.viewport_mut().unwrap().scroll(30);

        assert!(screen.show_page('a', &Document::from_text("About\nme")));
        assert_eq!(screen.active_page(), Some('a'));
        let vp = screen.viewport().unwrap();
        assert_eq!(vp.line_count(), 2);
        assert_eq!(vp.offset(), 0);

        assert!(screen.show_document());
        assert_eq!(screen.active_page(), None);
        assert_eq!(screen.viewport().unwrap().line_count(), 50);
    }

    #[test]
    fn test_resize_after_page_switch_keeps_page() {
        let style = DecorationStyle::default();
        let mut screen = ScreenState::new(numbered(50), RenderMode::Standard);
        screen.handle_resize(&style, 80, 24);
        screen.show_page('a', &Document::from_text("About\nme"));

        screen.handle_resize(&style, 100, 30);
        assert_eq!(screen.viewport().unwrap().line_count(), 2);
        assert_eq!(screen.document().line_count(), 50);
    }

    #[test]
    fn test_narrow_resize_cuts_lines() {
        let style = DecorationStyle::default();
        let mut screen = ScreenState::new(numbered(5), RenderMode::Standard);
        screen.handle_resize(&style, 4, 20);
        assert_eq!(screen.viewport().unwrap().visible_slice()[0], "line");
    }
}

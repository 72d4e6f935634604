//! Viewport - scroll position, geometry and visible slice of the content.
//!
//! The viewport never fails: geometry is clamped, scrolling past either end is
//! a no-op, and an empty buffer simply renders no lines.

use crate::config::RenderMode;
use crate::text::truncate_to_width;

/// Lines scrolled per mouse wheel notch
pub const MOUSE_WHEEL_DELTA: usize = 3;

/// Columns a tab expands to
const TAB_WIDTH: usize = 4;

// ─────────────────────────────────────────────────────────────────────────────
// Viewport
// ─────────────────────────────────────────────────────────────────────────────

/// A scrollable window over a buffer of lines.
///
/// Invariant: `offset <= max_offset()` after every operation.
#[derive(Debug, Clone, Default)]
pub struct Viewport {
    width: usize,
    height: usize,
    offset: usize,
    lines: Vec<String>,
    render_mode: RenderMode,
}

impl Viewport {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    pub fn with_render_mode(mut self, render_mode: RenderMode) -> Self {
        self.render_mode = render_mode;
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Index of the first visible line
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn render_mode(&self) -> RenderMode {
        self.render_mode
    }

    /// Largest valid offset: zero when everything fits
    pub fn max_offset(&self) -> usize {
        self.lines.len().saturating_sub(self.height)
    }

    pub fn at_top(&self) -> bool {
        self.offset == 0
    }

    pub fn at_bottom(&self) -> bool {
        self.offset >= self.max_offset()
    }

    /// Set geometry. Content is kept; the offset is clamped.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.clamp_offset();
    }

    /// Replace the content buffer. The offset is kept but clamped against
    /// the new line count.
    pub fn set_content(&mut self, text: &str) {
        self.lines = text.lines().map(expand_tabs).collect();
        self.clamp_offset();
    }

    /// Move the offset by a signed number of lines, clamped to
    /// `[0, max_offset]`.
    pub fn scroll(&mut self, delta: isize) {
        let target = if delta < 0 {
            self.offset.saturating_sub(delta.unsigned_abs())
        } else {
            self.offset.saturating_add(delta.unsigned_abs())
        };
        self.offset = target.min(self.max_offset());
    }

    pub fn line_up(&mut self, n: usize) {
        self.scroll(-isize::try_from(n).unwrap_or(isize::MAX));
    }

    pub fn line_down(&mut self, n: usize) {
        self.scroll(isize::try_from(n).unwrap_or(isize::MAX));
    }

    pub fn page_up(&mut self) {
        self.line_up(self.height.max(1));
    }

    pub fn page_down(&mut self) {
        self.line_down(self.height.max(1));
    }

    pub fn half_page_up(&mut self) {
        self.line_up((self.height / 2).max(1));
    }

    pub fn half_page_down(&mut self) {
        self.line_down((self.height / 2).max(1));
    }

    pub fn goto_top(&mut self) {
        self.offset = 0;
    }

    pub fn goto_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    /// Lines currently in view, each cut to the viewport width.
    ///
    /// Returns fewer than `height` lines only when the content ends first.
    pub fn visible_slice(&self) -> Vec<String> {
        let start = self.offset.min(self.lines.len());
        let end = (start + self.height).min(self.lines.len());
        self.lines[start..end]
            .iter()
            .map(|line| truncate_to_width(line, self.width))
            .collect()
    }

    /// How far down the content the view is, in `[0.0, 1.0]`.
    ///
    /// Content that fits entirely reports `1.0`.
    pub fn scroll_percent(&self) -> f64 {
        let max = self.max_offset();
        if max == 0 {
            return 1.0;
        }
        (self.offset as f64 / max as f64).clamp(0.0, 1.0)
    }

    fn clamp_offset(&mut self) {
        self.offset = self.offset.min(self.max_offset());
    }
}

fn expand_tabs(line: &str) -> String {
    if line.contains('\t') {
        line.replace('\t', &" ".repeat(TAB_WIDTH))
    } else {
        line.to_string()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

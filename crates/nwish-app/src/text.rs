//! Display-width helpers shared by the viewport and the decorations

use unicode_width::UnicodeWidthChar;

/// Columns a string occupies in the terminal
pub(crate) fn display_width(s: &str) -> usize {
    s.chars().map(|c| c.width().unwrap_or(0)).sum()
}

/// Cut `s` so it occupies at most `max` columns.
///
/// A wide character that would straddle the limit is dropped entirely.
pub(crate) fn truncate_to_width(s: &str, max: usize) -> String {
    let mut used = 0;
    let mut out = String::with_capacity(s.len().min(max * 4));
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max {
            break;
        }
        used += w;
        out.push(c);
    }
    out
}

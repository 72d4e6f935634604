//! Header, navigation bar and footer composition.
//!
//! Everything here is a pure function of the viewport width (and the scroll
//! percentage for the footer). Width zero is valid and produces lines of zero
//! width, so the decoration heights can be measured before the viewport
//! exists.

use crate::config::Settings;
use crate::frame::{FrameLine, NavSegment};
use crate::text::{display_width, truncate_to_width};

/// Columns between two navigation entries
pub const NAV_GAP: usize = 10;

const RULE: &str = "─";

/// A navigation shortcut as shown in the nav bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub key: char,
    pub label: String,
}

/// Immutable decoration settings, built once at startup and passed by
/// reference into every composition call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecorationStyle {
    pub title: String,
    pub show_nav: bool,
    pub nav: Vec<NavLink>,
}

impl DecorationStyle {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            title: settings.ui.title.clone(),
            show_nav: settings.ui.show_nav,
            nav: settings
                .nav
                .iter()
                .map(|entry| NavLink {
                    key: entry.key,
                    label: entry.label.clone(),
                })
                .collect(),
        }
    }

    fn has_nav_bar(&self) -> bool {
        self.show_nav && !self.nav.is_empty()
    }
}

impl Default for DecorationStyle {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Boxes and rules
// ─────────────────────────────────────────────────────────────────────────────

/// Rounded box around `inner`, one column of padding on each side.
/// `left_join`/`right_join` swap that side of the middle row for a tee so the
/// box connects to a rule.
fn boxed(inner: &str, left_join: bool, right_join: bool) -> [String; 3] {
    let bar = RULE.repeat(display_width(inner) + 2);
    let left = if left_join { '┤' } else { '│' };
    let right = if right_join { '├' } else { '│' };
    [
        format!("╭{}╮", bar),
        format!("{} {} {}", left, inner, right),
        format!("╰{}╯", bar),
    ]
}

fn rule(len: usize) -> String {
    RULE.repeat(len)
}

/// Title box with a rule filling the rest of its middle row
pub fn header(style: &DecorationStyle, width: usize) -> Vec<String> {
    let [top, mid, bottom] = boxed(&style.title, false, true);
    let fill = width.saturating_sub(display_width(&mid));

    vec![
        truncate_to_width(&format!("{}{}", top, " ".repeat(fill)), width),
        truncate_to_width(&format!("{}{}", mid, rule(fill)), width),
        truncate_to_width(&format!("{}{}", bottom, " ".repeat(fill)), width),
    ]
}

/// Percentage box preceded by a rule from the left edge
pub fn footer(width: usize, scroll_percent: f64) -> Vec<String> {
    let [top, mid, bottom] = boxed(&percent_label(scroll_percent), true, false);
    let fill = width.saturating_sub(display_width(&mid));

    vec![
        truncate_to_width(&format!("{}{}", " ".repeat(fill), top), width),
        truncate_to_width(&format!("{}{}", rule(fill), mid), width),
        truncate_to_width(&format!("{}{}", " ".repeat(fill), bottom), width),
    ]
}

/// `0.42` → `" 42%"`
pub fn percent_label(scroll_percent: f64) -> String {
    format!("{:3.0}%", scroll_percent.clamp(0.0, 1.0) * 100.0)
}

/// Nav entries laid out left to right and cut off at `width`.
pub fn nav_segments(style: &DecorationStyle, width: usize, active: Option<char>) -> Vec<NavSegment> {
    let mut remaining = width;
    let mut segments = Vec::with_capacity(style.nav.len());

    for (i, link) in style.nav.iter().enumerate() {
        if remaining == 0 {
            break;
        }

        let key_text = truncate_to_width(&format!("({})", link.key), remaining);
        remaining -= display_width(&key_text);

        let label = truncate_to_width(&format!(" {}", link.label), remaining);
        remaining -= display_width(&label);

        let gap = if i + 1 < style.nav.len() {
            NAV_GAP.min(remaining)
        } else {
            0
        };
        remaining -= gap;

        segments.push(NavSegment {
            key: link.key,
            key_text,
            label,
            gap,
            active: active == Some(link.key),
        });
    }

    segments
}

// ─────────────────────────────────────────────────────────────────────────────
// Sections
// ─────────────────────────────────────────────────────────────────────────────

/// Every line drawn above the viewport: header box, spacing and nav bar.
pub fn top_lines(style: &DecorationStyle, width: usize, active: Option<char>) -> Vec<FrameLine> {
    let mut lines: Vec<FrameLine> = header(style, width)
        .into_iter()
        .map(FrameLine::Header)
        .collect();
    lines.push(FrameLine::Blank);

    if style.has_nav_bar() {
        lines.push(FrameLine::Nav(nav_segments(style, width, active)));
        lines.push(FrameLine::Blank);
        lines.push(FrameLine::Blank);
    }

    lines
}

/// Every line drawn below the viewport
pub fn bottom_lines(width: usize, scroll_percent: f64) -> Vec<FrameLine> {
    footer(width, scroll_percent)
        .into_iter()
        .map(FrameLine::Footer)
        .collect()
}

/// Rows consumed above the viewport, measured from a zero-width composition
pub fn header_height(style: &DecorationStyle) -> usize {
    top_lines(style, 0, None).len()
}

/// Rows consumed below the viewport
pub fn footer_height() -> usize {
    bottom_lines(0, 1.0).len()
}

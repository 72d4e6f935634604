//! Fallback colors, used when a configured color does not parse.
//!
//! They match the defaults written by `ThemeSettings::default()`.

use ratatui::style::Color;

pub const TITLE: Color = Color::White;
pub const RULE: Color = Color::Gray;
pub const NAV_TEXT: Color = Color::Rgb(0xB2, 0xBE, 0xB5);
pub const NAV_KEY: Color = Color::Rgb(0xFF, 0x57, 0x33);
pub const SPINNER: Color = Color::Indexed(205);
pub const ERROR: Color = Color::Red;

/// Key hints under the spinner
pub const HINT: Color = Color::DarkGray;

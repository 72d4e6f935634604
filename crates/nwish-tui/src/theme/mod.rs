//! Color theme for the rendered frame.
//!
//! - `palette`: fallback colors
//!
//! [`Theme`] is resolved once from `[theme]` in the config file and passed by
//! reference into every render call.

pub mod palette;

use std::str::FromStr;

use nwish_app::config::ThemeSettings;
use ratatui::style::{Color, Modifier, Style};
use tracing::warn;

/// Styles for each part of the frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub title: Style,
    pub rule: Style,
    pub nav_text: Style,
    pub nav_key: Style,
    pub spinner: Style,
    pub error: Style,
    pub hint: Style,
}

impl Theme {
    pub fn from_settings(settings: &ThemeSettings) -> Self {
        Self {
            title: Style::default()
                .fg(parse_color("title", &settings.title, palette::TITLE))
                .add_modifier(Modifier::BOLD),
            rule: Style::default().fg(parse_color("rule", &settings.rule, palette::RULE)),
            nav_text: Style::default().fg(parse_color(
                "nav_text",
                &settings.nav_text,
                palette::NAV_TEXT,
            )),
            nav_key: Style::default().fg(parse_color(
                "nav_key",
                &settings.nav_key,
                palette::NAV_KEY,
            )),
            spinner: Style::default().fg(parse_color(
                "spinner",
                &settings.spinner,
                palette::SPINNER,
            )),
            error: Style::default().fg(parse_color("error", &settings.error, palette::ERROR)),
            hint: Style::default().fg(palette::HINT),
        }
    }

    /// Label of the nav entry whose page is on screen
    pub fn nav_active(&self) -> Style {
        self.nav_text
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_settings(&ThemeSettings::default())
    }
}

/// Parse a color name, `#rrggbb` or 256-color index
fn parse_color(field: &str, value: &str, fallback: Color) -> Color {
    Color::from_str(value.trim()).unwrap_or_else(|_| {
        warn!("Invalid theme.{} color {:?}, using default", field, value);
        fallback
    })
}

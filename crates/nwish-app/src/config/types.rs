//! Configuration types for nwish
//!
//! Defines:
//! - `Settings` - Global application settings
//! - `RenderMode` - Standard vs high-performance redraw
//! - `NavEntry` - A navigation bar shortcut

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Fastest allowed animation tick
pub const MIN_TICK_MS: u64 = 16;

/// Application settings (config.toml)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub theme: ThemeSettings,

    #[serde(default)]
    pub document: DocumentSettings,

    /// Navigation bar shortcuts, in display order
    #[serde(default = "default_nav")]
    pub nav: Vec<NavEntry>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ui: UiSettings::default(),
            theme: ThemeSettings::default(),
            document: DocumentSettings::default(),
            nav: default_nav(),
        }
    }
}

/// How the screen is redrawn after geometry or content changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    /// Every frame is fully redrawn
    #[default]
    Standard,
    /// Resize and content changes also request an out-of-band resync
    HighPerformance,
}

impl RenderMode {
    pub fn is_high_performance(&self) -> bool {
        matches!(self, RenderMode::HighPerformance)
    }
}

impl std::fmt::Display for RenderMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderMode::Standard => write!(f, "standard"),
            RenderMode::HighPerformance => write!(f, "high_performance"),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// Title shown in the header box
    #[serde(default = "default_title")]
    pub title: String,

    /// Show the navigation bar under the header
    #[serde(default = "default_true")]
    pub show_nav: bool,

    #[serde(default)]
    pub render_mode: RenderMode,

    /// Capture the mouse so the wheel scrolls the viewport
    #[serde(default = "default_true")]
    pub mouse: bool,

    /// Spinner animation interval in milliseconds
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            title: default_title(),
            show_nav: true,
            render_mode: RenderMode::default(),
            mouse: true,
            tick_ms: default_tick_ms(),
        }
    }
}

impl UiSettings {
    /// Spinner tick interval, never faster than [`MIN_TICK_MS`]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(MIN_TICK_MS))
    }
}

fn default_title() -> String {
    "Nimai C. (Dev)".to_string()
}

fn default_tick_ms() -> u64 {
    100
}

fn default_true() -> bool {
    true
}

/// Color names or hex strings, resolved by the TUI layer.
///
/// Anything ratatui can parse is accepted: `"red"`, `"#B2BEB5"`, `"205"`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeSettings {
    #[serde(default = "default_title_color")]
    pub title: String,
    #[serde(default = "default_rule_color")]
    pub rule: String,
    #[serde(default = "default_nav_text_color")]
    pub nav_text: String,
    #[serde(default = "default_nav_key_color")]
    pub nav_key: String,
    #[serde(default = "default_spinner_color")]
    pub spinner: String,
    #[serde(default = "default_error_color")]
    pub error: String,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            title: default_title_color(),
            rule: default_rule_color(),
            nav_text: default_nav_text_color(),
            nav_key: default_nav_key_color(),
            spinner: default_spinner_color(),
            error: default_error_color(),
        }
    }
}

fn default_title_color() -> String {
    "white".to_string()
}

fn default_rule_color() -> String {
    "gray".to_string()
}

fn default_nav_text_color() -> String {
    "#B2BEB5".to_string()
}

fn default_nav_key_color() -> String {
    "#FF5733".to_string()
}

fn default_spinner_color() -> String {
    "205".to_string()
}

fn default_error_color() -> String {
    "red".to_string()
}

/// Document settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DocumentSettings {
    /// Document shown when no path is given on the command line
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// A navigation bar shortcut
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NavEntry {
    /// Key that selects this entry
    pub key: char,
    /// Label shown after the key
    pub label: String,
    /// Page file shown when the key is pressed. Entries without a page are
    /// displayed but do nothing.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl NavEntry {
    pub fn new(key: char, label: impl Into<String>) -> Self {
        Self {
            key,
            label: label.into(),
            path: None,
        }
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }
}

fn default_nav() -> Vec<NavEntry> {
    vec![
        NavEntry::new('a', "About"),
        NavEntry::new('b', "Blogs"),
        NavEntry::new('p', "Projects"),
        NavEntry::new('g', "Active Repos"),
    ]
}

//! Settings parser for config.toml

use super::types::Settings;
use nwish_core::prelude::*;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "nwish";

/// Default location of the config file (`~/.config/nwish/config.toml` on Linux)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `config_path`.
///
/// A missing, unreadable or invalid file falls back to defaults; the problem
/// is logged, never surfaced as an error.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                resolve_relative_paths(settings, config_path)
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Relative page and document paths are resolved against the config file's
/// directory, not the working directory.
fn resolve_relative_paths(mut settings: Settings, config_path: &Path) -> Settings {
    let Some(base) = config_path.parent() else {
        return settings;
    };

    let resolve = |path: &mut PathBuf| {
        if path.is_relative() {
            *path = base.join(&*path);
        }
    };

    if let Some(path) = settings.document.path.as_mut() {
        resolve(path);
    }
    for entry in &mut settings.nav {
        if let Some(path) = entry.path.as_mut() {
            resolve(path);
        }
    }

    settings
}

//! Configuration file parsing for nwish
//!
//! Supports `~/.config/nwish/config.toml` (or any path given with `--config`).

pub mod settings;
pub mod types;

pub use settings::{default_config_path, load_settings, CONFIG_FILENAME};
pub use types::*;

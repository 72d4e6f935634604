//! nwish Library
//!
//! Startup glue between the command line and the workspace crates: error
//! reporting, logging, configuration and the document to show.

use std::path::PathBuf;

pub use nwish_app as app;
pub use nwish_core as core;
pub use nwish_tui as tui;

use nwish_app::config::{self, Settings};
use nwish_core::prelude::*;
use nwish_core::Document;

/// Install error reporting and file logging
pub fn init() -> Result<()> {
    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since TUI owns stdout)
    nwish_core::logging::init()
}

/// Load settings from an explicit config path or the default location.
///
/// Recoverable errors (an explicit path that does not exist) are reported
/// and replaced by defaults; anything else is returned.
pub fn load_config(explicit: Option<PathBuf>) -> Result<Settings> {
    match read_config(explicit) {
        Err(e) if e.is_recoverable() => {
            warn!("{}, using defaults", e);
            Ok(Settings::default())
        }
        result => result,
    }
}

fn read_config(explicit: Option<PathBuf>) -> Result<Settings> {
    let path = match explicit {
        Some(path) if !path.exists() => return Err(Error::ConfigNotFound { path }),
        Some(path) => path,
        None => match config::default_config_path() {
            Some(path) => path,
            None => {
                debug!("No config directory on this platform, using defaults");
                return Ok(Settings::default());
            }
        },
    };

    info!("Config: {}", path.display());
    Ok(config::load_settings(&path))
}

/// Load the document named on the command line, or else the one named in
/// `[document]`.
pub fn load_document(cli_path: Option<PathBuf>, settings: &Settings) -> Result<Document> {
    let path = cli_path
        .or_else(|| settings.document.path.clone())
        .ok_or(Error::NoDocument)?;

    info!("Document: {}", path.display());
    Document::load(&path)
}

/// Run the TUI until the user quits
pub async fn run(document: Document, settings: Settings) -> Result<()> {
    let result = nwish_tui::run(document, settings).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("nwish exiting");
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_explicit_config_is_recoverable() {
        let temp = tempdir().unwrap();
        let err = read_config(Some(temp.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound { .. }));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_missing_explicit_config_uses_defaults() {
        let temp = tempdir().unwrap();
        let settings = load_config(Some(temp.path().join("nope.toml"))).unwrap();
        assert_eq!(settings.ui.title, Settings::default().ui.title);
    }

    #[test]
    fn test_explicit_config_is_read() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[ui]\ntitle = \"Docs\"\n").unwrap();
        assert_eq!(load_config(Some(path)).unwrap().ui.title, "Docs");
    }

    #[test]
    fn test_cli_path_wins_over_config() {
        let temp = tempdir().unwrap();
        let cli = temp.path().join("cli.md");
        std::fs::write(&cli, "from cli").unwrap();

        let mut settings = Settings::default();
        settings.document.path = Some(temp.path().join("config.md"));

        let document = load_document(Some(cli), &settings).unwrap();
        assert_eq!(document.text(), "from cli");
    }

    #[test]
    fn test_config_document_used_without_cli_path() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("info.md");
        std::fs::write(&path, "from config").unwrap();

        let mut settings = Settings::default();
        settings.document.path = Some(path);

        assert_eq!(load_document(None, &settings).unwrap().text(), "from config");
    }

    #[test]
    fn test_no_document_is_fatal() {
        let err = load_document(None, &Settings::default()).unwrap_err();
        assert!(matches!(err, Error::NoDocument));
        assert!(err.is_fatal());
    }
}

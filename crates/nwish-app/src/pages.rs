//! Navigation pages loaded in the background while the spinner runs

use std::collections::HashMap;

use nwish_core::prelude::*;
use nwish_core::Document;
use tokio::sync::mpsc;

use crate::config::NavEntry;
use crate::message::Message;

/// Page documents keyed by their nav shortcut
#[derive(Debug, Clone, Default)]
pub struct Pages {
    pages: HashMap<char, Document>,
}

impl Pages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: char, document: Document) {
        self.pages.insert(key, document);
    }

    pub fn get(&self, key: char) -> Option<&Document> {
        self.pages.get(&key)
    }

    pub fn contains(&self, key: char) -> bool {
        self.pages.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

/// Read every nav entry that names a page file.
///
/// Stops at the first failure; any failure is reported as
/// [`Error::PageLoad`].
pub fn load_pages(entries: &[NavEntry]) -> Result<Pages> {
    let mut pages = Pages::new();

    for entry in entries {
        let Some(ref path) = entry.path else {
            continue;
        };
        let document =
            Document::load(path).map_err(|e| Error::page_load(path, page_error_reason(e)))?;
        pages.insert(entry.key, document);
    }

    Ok(pages)
}

fn page_error_reason(err: Error) -> String {
    match err {
        Error::DocumentNotFound { .. } => "file not found".to_string(),
        Error::DocumentRead { message, .. } => message,
        other => other.to_string(),
    }
}

/// Load pages on the blocking pool and report the outcome as a message.
pub fn spawn_page_loader(entries: Vec<NavEntry>, tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        let result = tokio::task::spawn_blocking(move || load_pages(&entries)).await;

        let message = match result {
            Ok(Ok(pages)) => {
                info!("Loaded {} nav page(s)", pages.len());
                Message::PagesLoaded(pages)
            }
            Ok(Err(e)) => {
                warn!("Page loading failed: {}", e);
                Message::LoadFailed {
                    message: e.to_string(),
                }
            }
            Err(e) => {
                error!("Page loader task panicked: {}", e);
                Message::LoadFailed {
                    message: format!("Page loader stopped: {}", e),
                }
            }
        };

        if tx.send(message).await.is_err() {
            debug!("Event loop gone before pages were delivered");
        }
    });
}

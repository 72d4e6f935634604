//! OS signals turned into `Message::Quit`
//!
//! The terminal runs in raw mode, so Ctrl+C normally arrives as a key event.
//! The handler covers signals sent from outside (`kill`, a closing terminal).

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::message::Message;
use nwish_core::prelude::*;

/// Spawn a task that forwards the first termination signal as a quit message
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let signal = match wait_for_signal().await {
            Ok(name) => name,
            Err(e) => {
                error!("Signal handler error: {}", e);
                return;
            }
        };

        info!("Received {}, shutting down", signal);
        if tx.send(Message::Quit).await.is_err() {
            debug!("Event loop already stopped");
        }
    })
}

/// Wait for a termination signal and return its name
async fn wait_for_signal() -> Result<&'static str> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let listen = |kind: SignalKind, name: &str| {
            signal(kind)
                .map_err(|e| Error::terminal(format!("Failed to listen for {}: {}", name, e)))
        };
        let mut sigint = listen(SignalKind::interrupt(), "SIGINT")?;
        let mut sigterm = listen(SignalKind::terminate(), "SIGTERM")?;
        let mut sighup = listen(SignalKind::hangup(), "SIGHUP")?;

        let name = tokio::select! {
            _ = sigint.recv() => "SIGINT",
            _ = sigterm.recv() => "SIGTERM",
            _ = sighup.recv() => "SIGHUP",
        };
        Ok(name)
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c()
            .await
            .map_err(|e| Error::terminal(format!("Failed to listen for Ctrl+C: {}", e)))?;
        Ok("Ctrl+C")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_no_quit_without_signal() {
        let (tx, mut rx) = mpsc::channel::<Message>(1);
        let handle = spawn_signal_handler(tx);

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(rx.try_recv().is_err());

        handle.abort();
    }
}

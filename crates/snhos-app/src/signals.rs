//! OS signal handling for graceful shutdown

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::message::Message;
use snhos_core::prelude::*;

/// Spawn a task that turns SIGINT/SIGTERM into [`Message::Quit`]
///
/// In raw mode Ctrl+C arrives as a key, so this mostly catches `kill`.
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) -> JoinHandle<()> {
    tokio::spawn(async move {
        if let Err(e) = wait_for_signal().await {
            error!("Signal handler error: {}", e);
            return;
        }

        info!("Shutdown signal received");
        if let Err(e) = tx.send(Message::Quit).await.map_err(|_| Error::ChannelClosed) {
            debug!("Quit not delivered: {}", e);
        }
    })
}

async fn wait_for_signal() -> Result<()> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigint = signal(SignalKind::interrupt())
            .map_err(|e| Error::terminal(format!("Failed to create SIGINT handler: {}", e)))?;
        let mut sigterm = signal(SignalKind::terminate())
            .map_err(|e| Error::terminal(format!("Failed to create SIGTERM handler: {}", e)))?;

        tokio::select! {
            _ = sigint.recv() => debug!("Received SIGINT"),
            _ = sigterm.recv() => debug!("Received SIGTERM"),
        }
        Ok(())
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c()
            .await
            .map_err(|e| Error::terminal(format!("Failed to listen for Ctrl+C: {}", e)))?;
        debug!("Received Ctrl+C");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn test_signal_handler_waits_quietly() {
        let (tx, mut rx) = mpsc::channel::<Message>(1);
        let handle = spawn_signal_handler(tx);

        tokio::time::sleep(Duration::from_millis(10)).await;

        // no signal was sent
        assert!(rx.try_recv().is_err());
        handle.abort();
    }
}

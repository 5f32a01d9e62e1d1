use std::sync::Arc;
use tokio::{sync::mpsc, task::JoinHandle};

use super::lore::{LoreAppend, LoreStore};

/// Queues lore appends so responses never wait on the store
#[derive(Clone)]
pub struct LoreWriter {
    write_tx: mpsc::UnboundedSender<LoreAppend>,
}

/// Handle for gracefully shutting down the lore writer
pub struct LoreWriterHandle {
    shutdown_tx: mpsc::Sender<()>,
    task: JoinHandle<()>,
}

impl LoreWriterHandle {
    /// Stops the writer after every queued append has been applied
    pub async fn shutdown(self) {
        let _ = self.shutdown_tx.send(()).await;
        tracing::info!("Lore writer shutdown signal sent");
        if let Err(e) = self.task.await {
            if e.is_panic() {
                std::panic::resume_unwind(e.into_panic());
            }
            tracing::error!(error = %e, "Lore writer task failed during shutdown");
        }
    }
}

impl LoreWriter {
    /// Spawns the background task that applies appends to `store`
    pub fn new(store: Arc<dyn LoreStore>) -> (Self, LoreWriterHandle) {
        let (write_tx, write_rx) = mpsc::unbounded_channel();
        let (shutdown_tx, shutdown_rx) = mpsc::channel(1);

        let task = tokio::spawn(async move {
            Self::writer_task(store, write_rx, shutdown_rx).await;
        });

        (Self { write_tx }, LoreWriterHandle { shutdown_tx, task })
    }

    /// Background task that applies queued appends in order
    ///
    /// On shutdown, drains whatever is still queued before exiting. Dropping
    /// the handle without calling `shutdown` leaves the writer running until
    /// every `LoreWriter` is gone.
    async fn writer_task(
        store: Arc<dyn LoreStore>,
        mut write_rx: mpsc::UnboundedReceiver<LoreAppend>,
        mut shutdown_rx: mpsc::Receiver<()>,
    ) {
        tracing::info!(store = store.name(), "Lore writer task started");

        loop {
            tokio::select! {
                msg = write_rx.recv() => match msg {
                    Some(entry) => Self::apply(store.as_ref(), entry).await,
                    None => break,
                },
                Some(()) = shutdown_rx.recv() => {
                    write_rx.close();
                    let mut flushed = 0;
                    while let Some(entry) = write_rx.recv().await {
                        Self::apply(store.as_ref(), entry).await;
                        flushed += 1;
                    }
                    tracing::info!(flushed, "Lore writer flushed pending appends");
                    break;
                }
            }
        }

        tracing::info!("Lore writer task stopped");
    }

    async fn apply(store: &dyn LoreStore, entry: LoreAppend) {
        if let Err(e) = store.append(&entry).await {
            tracing::error!(error = %e, "Failed to append lore");
        }
    }

    /// Queues an append without waiting for it to land
    pub fn record_in_background(&self, entry: LoreAppend) {
        if entry.is_empty() {
            return;
        }
        if let Err(e) = self.write_tx.send(entry) {
            tracing::error!(error = %e, "Failed to queue lore append");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        db::lore::{InMemoryLoreStore, MockLoreStore},
        error::AppError,
    };

    fn entry(tag: &str, whisper: &str) -> LoreAppend {
        LoreAppend {
            tags: vec![tag.to_string()],
            whisper: Some(whisper.to_string()),
        }
    }

    #[tokio::test]
    async fn test_shutdown_flushes_queued_appends() {
        let store = Arc::new(InMemoryLoreStore::new());
        let (writer, handle) = LoreWriter::new(store.clone());

        writer.record_in_background(entry("ice_war", "The ice hums."));
        writer.record_in_background(entry("garnish_conflict", "The garnish moved."));
        handle.shutdown().await;

        let lore = store.fetch().await.unwrap();
        assert_eq!(lore.tags, vec!["ice_war", "garnish_conflict"]);
        assert_eq!(lore.whispers.len(), 2);
    }

    #[tokio::test]
    async fn test_empty_appends_are_not_queued() {
        let mut mock = MockLoreStore::new();
        mock.expect_name().return_const("mock");
        mock.expect_append().never();

        let (writer, handle) = LoreWriter::new(Arc::new(mock));
        writer.record_in_background(LoreAppend::default());
        handle.shutdown().await;
    }

    #[tokio::test]
    async fn test_store_errors_do_not_stop_the_writer() {
        let mut mock = MockLoreStore::new();
        mock.expect_name().return_const("mock");
        mock.expect_append()
            .times(2)
            .returning(|_| Err(AppError::Internal("store down".to_string())));

        let (writer, handle) = LoreWriter::new(Arc::new(mock));
        writer.record_in_background(entry("a", "first"));
        writer.record_in_background(entry("b", "second"));
        handle.shutdown().await;
    }
}

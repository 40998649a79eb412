//! Supervised revocation ingestion worker

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::domain::entities::revocation::{RevocationEvent, RevokedToken};
use crate::errors::{DomainError, IngestionError};
use crate::repositories::RevocationRepository;

use super::config::IngestionConfig;
use super::subscriber::{RevocationMessage, RevocationSource, RevocationSubscription};

/// Outcome of draining one subscription
enum DrainOutcome {
    Shutdown,
    TransportLost,
}

/// Always-on worker feeding the revocation store from an event channel.
///
/// The worker owns one subscription at a time. A bad message is logged and
/// nacked, never fatal; a dead subscription is replaced after a fixed delay,
/// indefinitely. The only way the worker stops is the cooperative shutdown
/// signal: it stops pulling new events, finishes the in-flight one, and
/// returns.
pub struct RevocationIngestor<S, R>
where
    S: RevocationSource,
    R: RevocationRepository,
{
    source: S,
    repository: Arc<R>,
    config: IngestionConfig,
}

impl<S, R> RevocationIngestor<S, R>
where
    S: RevocationSource + 'static,
    R: RevocationRepository + 'static,
{
    /// Creates a new ingestion worker
    ///
    /// # Arguments
    ///
    /// * `source` - Revocation event channel
    /// * `repository` - Revocation store written on every event
    /// * `config` - Supervision settings
    pub fn new(source: S, repository: Arc<R>, config: IngestionConfig) -> Self {
        Self {
            source,
            repository,
            config,
        }
    }

    /// Starts the worker on its own task.
    ///
    /// Call at service startup; keep the handle and join it through
    /// [`IngestorHandle::shutdown`] at teardown.
    pub fn spawn(self) -> IngestorHandle {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let task = tokio::spawn(self.run(shutdown_rx));

        IngestorHandle {
            shutdown: shutdown_tx,
            task,
        }
    }

    /// Runs the supervisory loop until shutdown is signalled
    pub async fn run(self, mut shutdown: watch::Receiver<bool>) {
        info!("revocation ingestion started");

        loop {
            if *shutdown.borrow() {
                break;
            }

            let subscription = tokio::select! {
                _ = shutdown_signalled(&mut shutdown) => break,
                result = self.source.subscribe() => match result {
                    Ok(subscription) => subscription,
                    Err(error) => {
                        warn!(%error, "failed to establish revocation subscription");
                        if self.wait_before_retry(&mut shutdown).await {
                            break;
                        }
                        continue;
                    }
                },
            };

            info!("revocation subscription established");

            match self.drain(subscription, &mut shutdown).await {
                DrainOutcome::Shutdown => break,
                DrainOutcome::TransportLost => {
                    if self.wait_before_retry(&mut shutdown).await {
                        break;
                    }
                }
            }
        }

        info!("revocation ingestion stopped");
    }

    /// Sleeps the fixed retry delay; returns true when shutdown was
    /// signalled during the wait
    async fn wait_before_retry(&self, shutdown: &mut watch::Receiver<bool>) -> bool {
        let delay = self.config.retry_delay;
        warn!(
            delay_secs = delay.as_secs(),
            "retrying revocation subscription"
        );

        tokio::select! {
            _ = shutdown_signalled(shutdown) => true,
            _ = tokio::time::sleep(delay) => false,
        }
    }

    /// Processes deliveries until the subscription dies or shutdown is
    /// signalled. The in-flight message is always settled before returning.
    async fn drain(
        &self,
        mut subscription: S::Subscription,
        shutdown: &mut watch::Receiver<bool>,
    ) -> DrainOutcome {
        loop {
            let message = tokio::select! {
                _ = shutdown_signalled(shutdown) => return DrainOutcome::Shutdown,
                delivery = subscription.next_message() => match delivery {
                    Ok(Some(message)) => message,
                    Ok(None) => {
                        warn!("revocation subscription stream ended");
                        return DrainOutcome::TransportLost;
                    }
                    Err(error) => {
                        warn!(%error, "revocation subscription transport failure");
                        return DrainOutcome::TransportLost;
                    }
                },
            };

            self.handle_message(message).await;
        }
    }

    /// Applies one delivery and settles it: ack on success, nack on any
    /// parse or store failure
    async fn handle_message(&self, message: <S::Subscription as RevocationSubscription>::Message) {
        let payload = message.payload().to_vec();

        match self.apply(&payload).await {
            Ok(entry) => {
                debug!(revoked_at = %entry.revoked_at, "revocation recorded");
                if let Err(error) = message.ack().await {
                    warn!(%error, "failed to acknowledge revocation event");
                }
            }
            Err(error) => {
                warn!(%error, "failed to process revocation event");
                if let Err(error) = message.nack().await {
                    warn!(%error, "failed to negatively acknowledge revocation event");
                }
            }
        }
    }

    /// Parses an event payload and records the revocation.
    ///
    /// The insert is idempotent, so channel redelivery of the same event is
    /// harmless.
    async fn apply(&self, payload: &[u8]) -> Result<RevokedToken, DomainError> {
        let event: RevocationEvent = serde_json::from_slice(payload).map_err(|e| {
            DomainError::Ingestion(IngestionError::MalformedEvent {
                reason: e.to_string(),
            })
        })?;

        self.repository.insert_if_absent(&event.token).await
    }
}

/// Handle to a running ingestion worker
pub struct IngestorHandle {
    shutdown: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl IngestorHandle {
    /// Signals the worker to stop and waits for it to finish.
    ///
    /// In-flight event handling completes before the task returns.
    pub async fn shutdown(self) {
        let _ = self.shutdown.send(true);
        if let Err(error) = self.task.await {
            error!(%error, "revocation ingestion task failed to join");
        }
    }
}

/// Resolves when the stop flag is raised or the handle side is gone
async fn shutdown_signalled(shutdown: &mut watch::Receiver<bool>) {
    loop {
        if shutdown.changed().await.is_err() {
            return;
        }
        if *shutdown.borrow() {
            return;
        }
    }
}

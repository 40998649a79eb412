//! Integration tests for the full token lifecycle: issuance, validation,
//! and revocation driven through the ingestion pipeline.

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};
    use std::sync::Arc;
    use std::time::Duration;

    use async_trait::async_trait;
    use tokio::sync::{mpsc, RwLock};
    use tokio::time::timeout;

    use ag_core::domain::entities::revocation::RevokedToken;
    use ag_core::errors::DomainError;
    use ag_core::repositories::RevocationRepository;
    use ag_core::services::ingestion::{
        IngestionConfig, RevocationIngestor, RevocationMessage, RevocationSource,
        RevocationSubscription,
    };
    use ag_core::services::token::{TokenConfig, TokenService};

    // In-memory revocation store shared between the request path and the
    // ingestion worker
    struct InMemoryRevocationStore {
        entries: RwLock<HashMap<String, RevokedToken>>,
    }

    impl InMemoryRevocationStore {
        fn new() -> Self {
            Self {
                entries: RwLock::new(HashMap::new()),
            }
        }
    }

    #[async_trait]
    impl RevocationRepository for InMemoryRevocationStore {
        async fn insert_if_absent(&self, token: &str) -> Result<RevokedToken, DomainError> {
            let mut entries = self.entries.write().await;
            if let Some(existing) = entries.get(token) {
                return Ok(existing.clone());
            }
            let entry = RevokedToken::new(token)?;
            entries.insert(token.to_string(), entry.clone());
            Ok(entry)
        }

        async fn list_all(&self) -> Result<HashSet<String>, DomainError> {
            Ok(self.entries.read().await.keys().cloned().collect())
        }

        async fn find(&self, token: &str) -> Result<Option<RevokedToken>, DomainError> {
            Ok(self.entries.read().await.get(token).cloned())
        }
    }

    // Channel-backed revocation feed
    struct ChannelMessage {
        payload: Vec<u8>,
    }

    #[async_trait]
    impl RevocationMessage for ChannelMessage {
        fn payload(&self) -> &[u8] {
            &self.payload
        }

        async fn ack(self) -> Result<(), DomainError> {
            Ok(())
        }

        async fn nack(self) -> Result<(), DomainError> {
            Ok(())
        }
    }

    struct ChannelSubscription {
        receiver: mpsc::UnboundedReceiver<ChannelMessage>,
    }

    #[async_trait]
    impl RevocationSubscription for ChannelSubscription {
        type Message = ChannelMessage;

        async fn next_message(&mut self) -> Result<Option<Self::Message>, DomainError> {
            Ok(self.receiver.recv().await)
        }
    }

    struct ChannelSource {
        receiver: std::sync::Mutex<Option<mpsc::UnboundedReceiver<ChannelMessage>>>,
    }

    impl ChannelSource {
        fn new() -> (Self, mpsc::UnboundedSender<ChannelMessage>) {
            let (sender, receiver) = mpsc::unbounded_channel();
            (
                Self {
                    receiver: std::sync::Mutex::new(Some(receiver)),
                },
                sender,
            )
        }
    }

    #[async_trait]
    impl RevocationSource for ChannelSource {
        type Subscription = ChannelSubscription;

        async fn subscribe(&self) -> Result<Self::Subscription, DomainError> {
            let receiver = self
                .receiver
                .lock()
                .unwrap()
                .take()
                .ok_or(DomainError::Internal {
                    message: String::from("feed already subscribed"),
                })?;
            Ok(ChannelSubscription { receiver })
        }
    }

    async fn wait_for_revocation(store: &Arc<InMemoryRevocationStore>, token: &str) {
        timeout(Duration::from_secs(2), async {
            loop {
                if store.is_revoked(token).await.unwrap() {
                    return;
                }
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        })
        .await
        .expect("revocation event was not ingested in time");
    }

    #[tokio::test]
    async fn test_issued_token_stays_valid_until_revocation_event_arrives() {
        let store = Arc::new(InMemoryRevocationStore::new());
        let (source, sender) = ChannelSource::new();
        let tokens = TokenService::new(TokenConfig::new("integration-secret"));

        let handle = RevocationIngestor::new(
            source,
            Arc::clone(&store),
            IngestionConfig::default().with_retry_delay(Duration::from_millis(20)),
        )
        .spawn();

        // Issue and validate through the request path
        let token = tokens
            .issue(vec!["svc-a".to_string(), "svc-b".to_string()])
            .unwrap();
        let revoked = store.list_all().await.unwrap();
        assert!(tokens.check(&token, "svc-a", &revoked));
        assert!(!tokens.check(&token, "svc-c", &revoked));

        // Revoke through the event feed
        sender
            .send(ChannelMessage {
                payload: format!(r#"{{"token":"{}"}}"#, token).into_bytes(),
            })
            .unwrap();
        wait_for_revocation(&store, &token).await;

        let revoked = store.list_all().await.unwrap();
        assert!(!tokens.check(&token, "svc-a", &revoked));

        handle.shutdown().await;
    }

    #[tokio::test]
    async fn test_duplicate_revocation_events_are_idempotent() {
        let store = Arc::new(InMemoryRevocationStore::new());
        let (source, sender) = ChannelSource::new();

        let handle = RevocationIngestor::new(
            source,
            Arc::clone(&store),
            IngestionConfig::default().with_retry_delay(Duration::from_millis(20)),
        )
        .spawn();

        for _ in 0..3 {
            sender
                .send(ChannelMessage {
                    payload: br#"{"token":"tok1"}"#.to_vec(),
                })
                .unwrap();
        }
        wait_for_revocation(&store, "tok1").await;
        handle.shutdown().await;

        assert_eq!(store.list_all().await.unwrap().len(), 1);
        let entry = store.find("tok1").await.unwrap().unwrap();
        assert_eq!(entry, store.insert_if_absent("tok1").await.unwrap());
    }
}

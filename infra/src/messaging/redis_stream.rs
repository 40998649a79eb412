//! Redis Streams implementation of the revocation event feed.
//!
//! Events are XADDed to a stream with the JSON body in a `payload` field.
//! Each service instance reads through a shared consumer group under its
//! own consumer name:
//! - ack maps to XACK
//! - nack leaves the entry in the pending list; the subscription rescans
//!   its backlog after an idle read and on every resubscribe, so nacked
//!   entries come back without being re-published
//!
//! Entries pending under a different consumer name are not claimed here;
//! each instance owns its backlog for its process lifetime.

use std::collections::VecDeque;

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::streams::{StreamReadOptions, StreamReadReply};
use redis::AsyncCommands;
use tracing::{debug, info};
use uuid::Uuid;

use ag_core::errors::{DomainError, IngestionError};
use ag_core::services::ingestion::{RevocationMessage, RevocationSource, RevocationSubscription};
use ag_shared::config::MessagingConfig;

use crate::InfrastructureError;

/// Stream field holding the event body
const PAYLOAD_FIELD: &str = "payload";

/// Milliseconds a read blocks waiting for new entries
const BLOCK_MS: usize = 5_000;

fn transport_error(error: redis::RedisError) -> DomainError {
    DomainError::Ingestion(IngestionError::Transport {
        message: error.to_string(),
    })
}

/// Redis Streams revocation source.
///
/// Long-lived; hands out one subscription at a time to the ingestion
/// worker. The consumer name is fixed at construction so resubscribes pick
/// the same pending backlog back up.
pub struct RedisRevocationSource {
    client: redis::Client,
    config: MessagingConfig,
    consumer: String,
}

impl RedisRevocationSource {
    /// Create a source for the configured stream and group
    ///
    /// # Arguments
    /// * `config` - Redis URL, stream key, group, and batch settings
    pub fn new(config: &MessagingConfig) -> Result<Self, InfrastructureError> {
        let client = redis::Client::open(config.url.as_str())?;
        let consumer = format!("authgate-{}", Uuid::new_v4());

        Ok(Self {
            client,
            config: config.clone(),
            consumer,
        })
    }
}

#[async_trait]
impl RevocationSource for RedisRevocationSource {
    type Subscription = RedisRevocationSubscription;

    async fn subscribe(&self) -> Result<Self::Subscription, DomainError> {
        let mut connection = self
            .client
            .get_multiplexed_tokio_connection()
            .await
            .map_err(transport_error)?;

        // Create the consumer group at the stream tail; an already-existing
        // group is fine
        let created: Result<String, redis::RedisError> = connection
            .xgroup_create_mkstream(&self.config.stream, &self.config.group, "$")
            .await;
        if let Err(error) = created {
            if error.code() != Some("BUSYGROUP") {
                return Err(transport_error(error));
            }
        }

        info!(
            stream = %self.config.stream,
            group = %self.config.group,
            consumer = %self.consumer,
            "subscribed to revocation stream"
        );

        Ok(RedisRevocationSubscription {
            connection,
            stream: self.config.stream.clone(),
            group: self.config.group.clone(),
            consumer: self.consumer.clone(),
            batch_size: self.config.batch_size,
            buffered: VecDeque::new(),
            scan_backlog: true,
        })
    }
}

/// An open consumer-group read loop over the revocation stream
pub struct RedisRevocationSubscription {
    connection: MultiplexedConnection,
    stream: String,
    group: String,
    consumer: String,
    batch_size: usize,
    buffered: VecDeque<(String, Vec<u8>)>,
    scan_backlog: bool,
}

impl RedisRevocationSubscription {
    fn queue_entries(&mut self, reply: &StreamReadReply) {
        for key in &reply.keys {
            for entry in &key.ids {
                let payload = entry
                    .map
                    .get(PAYLOAD_FIELD)
                    .and_then(|value| redis::from_redis_value::<Vec<u8>>(value).ok())
                    .unwrap_or_default();
                self.buffered.push_back((entry.id.clone(), payload));
            }
        }
    }

    /// Read the next batch into the buffer.
    ///
    /// The pending backlog (`0`) is drained before new entries (`>`); after
    /// an idle blocking read the next round rescans the backlog so nacked
    /// entries are redelivered.
    async fn fetch(&mut self) -> Result<(), DomainError> {
        if self.scan_backlog {
            let options = StreamReadOptions::default()
                .group(&self.group, &self.consumer)
                .count(self.batch_size);
            let reply: StreamReadReply = self
                .connection
                .xread_options(&[&self.stream], &["0"], &options)
                .await
                .map_err(transport_error)?;
            self.scan_backlog = false;
            self.queue_entries(&reply);
            if !self.buffered.is_empty() {
                debug!(count = self.buffered.len(), "redelivering pending revocation events");
                return Ok(());
            }
        }

        let options = StreamReadOptions::default()
            .group(&self.group, &self.consumer)
            .count(self.batch_size)
            .block(BLOCK_MS);
        let reply: StreamReadReply = self
            .connection
            .xread_options(&[&self.stream], &[">"], &options)
            .await
            .map_err(transport_error)?;

        if reply.keys.is_empty() {
            // Idle read; check for nacked entries next time around
            self.scan_backlog = true;
        }
        self.queue_entries(&reply);
        Ok(())
    }
}

#[async_trait]
impl RevocationSubscription for RedisRevocationSubscription {
    type Message = RedisRevocationMessage;

    async fn next_message(&mut self) -> Result<Option<Self::Message>, DomainError> {
        loop {
            if let Some((id, payload)) = self.buffered.pop_front() {
                return Ok(Some(RedisRevocationMessage {
                    connection: self.connection.clone(),
                    stream: self.stream.clone(),
                    group: self.group.clone(),
                    id,
                    payload,
                }));
            }

            self.fetch().await?;
        }
    }
}

/// One delivered stream entry
pub struct RedisRevocationMessage {
    connection: MultiplexedConnection,
    stream: String,
    group: String,
    id: String,
    payload: Vec<u8>,
}

#[async_trait]
impl RevocationMessage for RedisRevocationMessage {
    fn payload(&self) -> &[u8] {
        &self.payload
    }

    async fn ack(mut self) -> Result<(), DomainError> {
        let _: i64 = self
            .connection
            .xack(&self.stream, &self.group, &[&self.id])
            .await
            .map_err(transport_error)?;
        Ok(())
    }

    async fn nack(self) -> Result<(), DomainError> {
        // Not acked: the entry stays in the pending list and is redelivered
        // on the next backlog scan
        debug!(entry = %self.id, "revocation event left pending for redelivery");
        Ok(())
    }
}

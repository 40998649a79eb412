//! Traits abstracting the inbound revocation-event channel

use async_trait::async_trait;

use crate::errors::DomainError;

/// A channel that can hand out revocation-event subscriptions.
///
/// The source is long-lived; subscriptions are not. When a subscription's
/// transport drops, the ingestion worker asks the source for a fresh one.
#[async_trait]
pub trait RevocationSource: Send + Sync {
    /// Subscription type handed out by this source
    type Subscription: RevocationSubscription + 'static;

    /// Establish a subscription to the revocation feed
    ///
    /// # Returns
    /// * `Ok(Subscription)` - Ready to deliver messages
    /// * `Err(DomainError)` - Transport-level failure; the caller retries
    async fn subscribe(&self) -> Result<Self::Subscription, DomainError>;
}

/// An established subscription delivering revocation messages.
#[async_trait]
pub trait RevocationSubscription: Send {
    /// Message type delivered by this subscription
    type Message: RevocationMessage + 'static;

    /// Wait for the next message.
    ///
    /// # Returns
    /// * `Ok(Some(Message))` - A delivery to process and then ack or nack
    /// * `Ok(None)` - The stream ended; the subscription is dead
    /// * `Err(DomainError)` - Transport failure; the subscription is dead
    async fn next_message(&mut self) -> Result<Option<Self::Message>, DomainError>;
}

/// A single delivered revocation message.
///
/// Every delivery must be settled exactly once: `ack` on success, `nack`
/// on failure. A nacked message is expected to be redelivered by the
/// channel; consumers must therefore tolerate duplicates.
#[async_trait]
pub trait RevocationMessage: Send {
    /// Raw event payload
    fn payload(&self) -> &[u8];

    /// Acknowledge successful processing
    async fn ack(self) -> Result<(), DomainError>;

    /// Negatively acknowledge; the channel will redeliver
    async fn nack(self) -> Result<(), DomainError>;
}

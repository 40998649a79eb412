//! Messaging module - inbound revocation event feed
//!
//! The revocation channel is a Redis Stream read through a consumer group,
//! which gives the at-least-once, ack/nack delivery the ingestion worker
//! expects.

pub mod redis_stream;

pub use redis_stream::{RedisRevocationMessage, RedisRevocationSource, RedisRevocationSubscription};

//! Business services containing domain logic and use cases.

pub mod auth;
pub mod ingestion;
pub mod token;

// Re-export commonly used types
pub use auth::AuthService;
pub use ingestion::{
    IngestionConfig, IngestorHandle, RevocationIngestor, RevocationMessage,
    RevocationSource, RevocationSubscription,
};
pub use token::{Clock, SystemClock, TokenCodec, TokenConfig, TokenService};

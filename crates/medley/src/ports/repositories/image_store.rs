//! Image Store Port
//!
//! Abstract interface for persisting uploaded and filtered images.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, StorageKey};

/// Storage interface for images served back to the browser
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Write `bytes` under `key`, replacing any previous content
    async fn put(&self, key: &StorageKey, bytes: &[u8]) -> Result<(), DomainError>;

    /// Delete whatever is stored under `key`; a missing entry is not an error
    async fn remove(&self, key: &StorageKey) -> Result<(), DomainError>;

    /// URL the browser can load the stored image from
    fn public_url(&self, key: &StorageKey) -> String;
}

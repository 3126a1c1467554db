//! GIF Search Service Port
//!
//! Abstract interface for GIF search providers.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, GifSearchQuery, GifSearchResults};

/// Service interface for GIF search
#[async_trait]
pub trait GifSearchService: Send + Sync {
    /// Run one search against the provider
    async fn search(&self, query: &GifSearchQuery) -> Result<GifSearchResults, DomainError>;
}

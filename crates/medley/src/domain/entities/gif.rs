//! GifSearch - validated query and the raw results returned by the provider

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Largest page size the GIF provider accepts
pub const MAX_GIF_LIMIT: u32 = 50;

/// Page size used when the form leaves the quantity blank
pub const DEFAULT_GIF_LIMIT: u32 = 10;

/// A validated GIF search request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GifSearchQuery {
    pub query: String,
    pub limit: u32,
}

impl GifSearchQuery {
    /// Validate a free-text query and requested result count
    pub fn new(query: &str, limit: Option<u32>) -> Result<Self, DomainError> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation(
                "Search query cannot be empty".to_string(),
            ));
        }

        let limit = limit.unwrap_or(DEFAULT_GIF_LIMIT);
        if !(1..=MAX_GIF_LIMIT).contains(&limit) {
            return Err(DomainError::Validation(format!(
                "Number of GIFs must be between 1 and {MAX_GIF_LIMIT}, got {limit}"
            )));
        }

        Ok(Self {
            query: trimmed.to_string(),
            limit,
        })
    }
}

/// Results exactly as the provider returned them
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GifSearchResults {
    pub query: String,
    pub results: Vec<serde_json::Value>,
}

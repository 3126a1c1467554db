//! Tenor GIF search client.
//!
//! Calls the v1 `search` endpoint and hands back its `results` array untouched.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use serde::Deserialize;

use medley::{DomainError, GifSearchQuery, GifSearchResults, GifSearchService};

const MAX_ERROR_MESSAGE_CHARS: usize = 200;

/// Client for the Tenor search API
#[derive(Clone)]
pub struct TenorGifSearch {
    client: Client,
    api_key: String,
    base_url: String,
}

impl TenorGifSearch {
    /// Creates a client whose requests give up after `timeout`.
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, GifSearchError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("medley/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GifSearchError::Client(e.to_string()))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into(),
        })
    }

    /// Execute one search request
    pub async fn fetch(&self, query: &GifSearchQuery) -> Result<GifSearchResults, GifSearchError> {
        let limit = query.limit.to_string();

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("q", query.query.as_str()),
                ("key", self.api_key.as_str()),
                ("limit", limit.as_str()),
            ])
            .send()
            .await
            .map_err(|err| {
                if err.is_timeout() {
                    GifSearchError::Timeout
                } else {
                    GifSearchError::RequestFailed(err.to_string())
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let retry_after = retry_after(response.headers());
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(map_http_error(status, body, retry_after));
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| GifSearchError::RequestFailed(err.to_string()))?;

        let payload: SearchResponse = serde_json::from_slice(&body)
            .map_err(|err| GifSearchError::ParseError(err.to_string()))?;

        Ok(GifSearchResults {
            query: query.query.clone(),
            results: payload.results,
        })
    }
}

#[async_trait]
impl GifSearchService for TenorGifSearch {
    async fn search(&self, query: &GifSearchQuery) -> Result<GifSearchResults, DomainError> {
        self.fetch(query).await.map_err(DomainError::from)
    }
}

// ============================================
// Response Types
// ============================================

#[derive(Deserialize)]
struct SearchResponse {
    results: Vec<serde_json::Value>,
}

/// Tenor client error types
#[derive(Debug, Clone, thiserror::Error)]
pub enum GifSearchError {
    #[error("Failed to build HTTP client: {0}")]
    Client(String),
    #[error("Request failed: {0}")]
    RequestFailed(String),
    #[error("Request timed out")]
    Timeout,
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("API error ({status}): {message}")]
    ApiError { status: u16, message: String },
    #[error("Rate limited{}", retry_suffix(.retry_after))]
    RateLimited { retry_after: Option<Duration> },
}

impl From<GifSearchError> for DomainError {
    fn from(err: GifSearchError) -> Self {
        match err {
            GifSearchError::RateLimited { .. } => DomainError::RateLimited,
            other => DomainError::ExternalService(format!("GIF search: {other}")),
        }
    }
}

// ============================================
// Helper Functions
// ============================================

fn retry_suffix(retry_after: &Option<Duration>) -> String {
    retry_after
        .map(|d| format!(", retry after {}s", d.as_secs()))
        .unwrap_or_default()
}

fn retry_after(headers: &header::HeaderMap) -> Option<Duration> {
    headers
        .get(header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
}

fn map_http_error(status: StatusCode, body: String, retry_after: Option<Duration>) -> GifSearchError {
    if status == StatusCode::TOO_MANY_REQUESTS {
        return GifSearchError::RateLimited { retry_after };
    }

    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|json| {
            json.get("error")
                .and_then(|err| err.as_str().or_else(|| err.get("message")?.as_str()))
                .map(|msg| msg.to_string())
        })
        .unwrap_or(body);

    GifSearchError::ApiError {
        status: status.as_u16(),
        message: truncate_message(message.trim()),
    }
}

/// Keep upstream error text short enough to show on a page
fn truncate_message(message: &str) -> String {
    match message.char_indices().nth(MAX_ERROR_MESSAGE_CHARS) {
        Some((cut, _)) => format!("{}...", &message[..cut]),
        None => message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_from_json_string() {
        let err = map_http_error(
            StatusCode::UNAUTHORIZED,
            r#"{"error": "Invalid API key"}"#.to_string(),
            None,
        );
        match err {
            GifSearchError::ApiError { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Invalid API key");
            }
            other => panic!("Expected ApiError, got {other:?}"),
        }
    }

    #[test]
    fn test_error_message_from_json_object() {
        let err = map_http_error(
            StatusCode::BAD_REQUEST,
            r#"{"error": {"code": 3, "message": "Bad limit"}}"#.to_string(),
            None,
        );
        assert!(matches!(err, GifSearchError::ApiError { message, .. } if message == "Bad limit"));
    }

    #[test]
    fn test_plain_body_is_kept() {
        let err = map_http_error(StatusCode::BAD_GATEWAY, "upstream down".to_string(), None);
        assert!(matches!(err, GifSearchError::ApiError { message, .. } if message == "upstream down"));
    }

    #[test]
    fn test_long_body_is_truncated() {
        let page = format!("<html><body>{}</body></html>", "é".repeat(500));
        let err = map_http_error(StatusCode::SERVICE_UNAVAILABLE, page, None);
        match err {
            GifSearchError::ApiError { message, .. } => {
                assert!(message.starts_with("<html><body>é"));
                assert!(message.ends_with("..."));
                assert_eq!(message.chars().count(), MAX_ERROR_MESSAGE_CHARS + 3);
            }
            other => panic!("Expected ApiError, got {other:?}"),
        }
    }

    #[test]
    fn test_too_many_requests() {
        let err = map_http_error(
            StatusCode::TOO_MANY_REQUESTS,
            String::new(),
            Some(Duration::from_secs(30)),
        );
        assert_eq!(err.to_string(), "Rate limited, retry after 30s");
        assert!(matches!(DomainError::from(err), DomainError::RateLimited));
    }

    #[test]
    fn test_other_errors_are_external() {
        let err = DomainError::from(GifSearchError::Timeout);
        assert!(matches!(err, DomainError::ExternalService(msg) if msg.contains("timed out")));
    }
}

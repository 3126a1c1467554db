//! Page errors
//!
//! Every handler failure ends up here and is shown to the user as an HTML
//! page with a status code, never as a panic.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use minijinja::context;

use medley::DomainError;

/// A user-visible error page
#[derive(Debug, Clone)]
pub struct PageError {
    pub status: StatusCode,
    pub message: String,
    /// Page to offer as the way back
    pub back: Option<&'static str>,
}

impl PageError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            back: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// Map a domain error to its page
    pub fn from_domain(err: DomainError, back: &'static str) -> Self {
        let status = match &err {
            DomainError::Validation(_)
            | DomainError::NotFound { .. }
            | DomainError::UnsupportedImage(_) => StatusCode::BAD_REQUEST,
            DomainError::ExternalService(_) | DomainError::RateLimited => StatusCode::BAD_GATEWAY,
            DomainError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            DomainError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if err.is_client_error() {
            tracing::info!("Rejected request: {}", err);
        } else {
            tracing::error!("Request failed: {}", err);
        }

        Self::new(status, err.to_string()).with_back(back)
    }

    pub fn with_back(mut self, back: &'static str) -> Self {
        self.back = Some(back);
        self
    }
}

impl From<DomainError> for PageError {
    fn from(err: DomainError) -> Self {
        Self::from_domain(err, "/")
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let page = crate::views::render_string(
            "error.html",
            context! {
                status => self.status.as_u16(),
                reason => self.status.canonical_reason().unwrap_or("Error"),
                message => &self.message,
                back => self.back.unwrap_or("/"),
            },
        );

        match page {
            Ok(html) => (self.status, Html(html)).into_response(),
            Err(e) => {
                tracing::error!("Failed to render error page: {:#}", e);
                (self.status, self.message).into_response()
            }
        }
    }
}

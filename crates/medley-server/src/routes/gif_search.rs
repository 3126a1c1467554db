//! GIF Search Routes - GIF search via Tenor

use axum::{extract::State, response::Html, routing::get, Form, Router};
use minijinja::context;
use serde::Deserialize;
use utoipa::ToSchema;

use medley::{DomainError, GifSearchQuery, MAX_GIF_LIMIT};

use crate::error::PageError;
use crate::views;
use crate::AppState;

const FORM_PATH: &str = "/gif_search";

/// Search form
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct GifSearchForm {
    pub search_query: Option<String>,
    /// Number of GIFs, 1 to 50
    pub quantity: Option<String>,
}

/// Show the search form
#[utoipa::path(
    get,
    path = "/gif_search",
    responses(
        (status = 200, description = "Search form", content_type = "text/html", body = String)
    ),
    tag = "GIF Search"
)]
pub async fn gif_search_form() -> Result<Html<String>, PageError> {
    views::render("gif_search.html", context! { max_limit => MAX_GIF_LIMIT })
}

/// Search for GIFs and show the results
#[utoipa::path(
    post,
    path = "/gif_search",
    request_body(content = GifSearchForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Search results", content_type = "text/html", body = String),
        (status = 400, description = "Empty query or bad quantity", content_type = "text/html", body = String),
        (status = 502, description = "GIF provider failed", content_type = "text/html", body = String),
        (status = 503, description = "GIF search not configured", content_type = "text/html", body = String)
    ),
    tag = "GIF Search"
)]
pub async fn gif_search(
    State(state): State<AppState>,
    Form(form): Form<GifSearchForm>,
) -> Result<Html<String>, PageError> {
    let limit = parse_quantity(form.quantity.as_deref())
        .map_err(|e| PageError::from_domain(e, FORM_PATH))?;
    let query = GifSearchQuery::new(form.search_query.as_deref().unwrap_or_default(), limit)
        .map_err(|e| PageError::from_domain(e, FORM_PATH))?;

    let service = state.gif_search.as_ref().ok_or_else(|| {
        PageError::from_domain(
            DomainError::Unavailable("GIF search is not configured".to_string()),
            FORM_PATH,
        )
    })?;

    let found = service
        .search(&query)
        .await
        .map_err(|e| PageError::from_domain(e, FORM_PATH))?;

    tracing::info!("🔍 GIF search: {} -> {} results", query.query, found.results.len());

    views::render(
        "gif_search.html",
        context! {
            query => query.query,
            limit => query.limit,
            max_limit => MAX_GIF_LIMIT,
            gifs => found.results,
        },
    )
}

fn parse_quantity(raw: Option<&str>) -> Result<Option<u32>, DomainError> {
    match raw.map(str::trim).filter(|q| !q.is_empty()) {
        None => Ok(None),
        Some(q) => q.parse().map(Some).map_err(|_| {
            DomainError::Validation(format!("'{q}' is not a valid number of GIFs"))
        }),
    }
}

pub fn router() -> Router<AppState> {
    Router::new().route(FORM_PATH, get(gif_search_form).post(gif_search))
}

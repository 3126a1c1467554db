//! Home Route

use axum::{response::Html, routing::get, Router};
use minijinja::context;

use crate::error::PageError;
use crate::views;
use crate::AppState;

/// Home page with links to every demo
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Home page", content_type = "text/html", body = String)
    ),
    tag = "Pages"
)]
pub async fn homepage() -> Result<Html<String>, PageError> {
    views::render("home.html", context! {})
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(homepage))
}

//! Compliments Routes - Random compliments for the user

use axum::{extract::Query, response::Html, routing::get, Router};
use minijinja::context;
use serde::Deserialize;

use medley::{sample_compliments, wants_compliments, DomainError, COMPLIMENTS};

use crate::error::PageError;
use crate::views;
use crate::AppState;

const FORM_PATH: &str = "/compliments";

/// Query string of the compliments form
#[derive(Debug, Default, Deserialize)]
pub struct ComplimentsQuery {
    pub users_name: Option<String>,
    pub wants_compliments: Option<String>,
    /// Kept as text so a bad number gets a proper error page
    pub num_compliments: Option<String>,
}

/// Show the compliments form
#[utoipa::path(
    get,
    path = "/compliments",
    responses(
        (status = 200, description = "Compliments form", content_type = "text/html", body = String)
    ),
    tag = "Compliments"
)]
pub async fn compliments_form() -> Result<Html<String>, PageError> {
    views::render(
        "compliments_form.html",
        context! { max_compliments => COMPLIMENTS.len() },
    )
}

/// Show the user some compliments
#[utoipa::path(
    get,
    path = "/compliments_results",
    params(
        ("users_name" = Option<String>, Query, description = "Name to greet"),
        ("wants_compliments" = Option<String>, Query, description = "`yes` to receive compliments"),
        ("num_compliments" = Option<u32>, Query, description = "Number of distinct compliments")
    ),
    responses(
        (status = 200, description = "Compliments page", content_type = "text/html", body = String),
        (status = 400, description = "Missing or too large count", content_type = "text/html", body = String)
    ),
    tag = "Compliments"
)]
pub async fn compliments_results(
    Query(params): Query<ComplimentsQuery>,
) -> Result<Html<String>, PageError> {
    let users_name = params
        .users_name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty());
    let wants = wants_compliments(params.wants_compliments.as_deref());

    let compliments = if wants {
        let count = parse_count(params.num_compliments.as_deref())
            .map_err(|e| PageError::from_domain(e, FORM_PATH))?;
        sample_compliments(&mut rand::thread_rng(), count)
            .map_err(|e| PageError::from_domain(e, FORM_PATH))?
    } else {
        Vec::new()
    };

    tracing::info!(
        "💐 Compliments for {}: {:?}",
        users_name.unwrap_or("anonymous"),
        compliments
    );

    views::render(
        "compliments_results.html",
        context! {
            users_name,
            wants_compliments => wants,
            compliments,
        },
    )
}

fn parse_count(raw: Option<&str>) -> Result<usize, DomainError> {
    let raw = raw.map(str::trim).unwrap_or_default();
    if raw.is_empty() {
        return Err(DomainError::Validation(
            "Please say how many compliments you would like".to_string(),
        ));
    }
    raw.parse().map_err(|_| {
        DomainError::Validation(format!(
            "'{raw}' is not a valid number of compliments"
        ))
    })
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/compliments", get(compliments_form))
        .route("/compliments_results", get(compliments_results))
}

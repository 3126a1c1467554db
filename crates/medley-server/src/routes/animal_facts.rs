//! Animal Facts Routes

use axum::{extract::Query, response::Html, routing::get, Router};
use minijinja::context;

use medley::{lookup_animals, AnimalFact};

use crate::error::PageError;
use crate::views;
use crate::AppState;

/// Show the animal form and facts for every chosen animal
#[utoipa::path(
    get,
    path = "/animal_facts",
    params(
        ("animal" = Option<Vec<String>>, Query, description = "Animal to show facts for, repeatable")
    ),
    responses(
        (status = 200, description = "Animal facts page", content_type = "text/html", body = String),
        (status = 400, description = "Unknown animal", content_type = "text/html", body = String)
    ),
    tag = "Animal Facts"
)]
pub async fn animal_facts(
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Html<String>, PageError> {
    let chosen: Vec<String> = params
        .into_iter()
        .filter(|(key, _)| key == "animal")
        .map(|(_, value)| value.trim().to_string())
        .collect();

    let facts = lookup_animals(&chosen).map_err(|e| PageError::from_domain(e, "/animal_facts"))?;

    if !facts.is_empty() {
        tracing::info!(
            "🐨 Animal facts: {:?}",
            facts.iter().map(|f| f.name).collect::<Vec<_>>()
        );
    }

    views::render(
        "animal_facts.html",
        context! {
            animals => AnimalFact::names().collect::<Vec<_>>(),
            chosen,
            facts,
        },
    )
}

pub fn router() -> Router<AppState> {
    Router::new().route("/animal_facts", get(animal_facts))
}

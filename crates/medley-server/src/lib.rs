//! Medley Server
//!
//! HTTP front end for the Medley demo pages.
//!
//! - `routes/`: axum handlers, one module per page
//! - `views/`: minijinja templates
//! - `application/`: use cases coordinating domain and storage
//! - `adapters/`: Tenor client and local image store
//! - `config`: settings read from Shuttle secrets

use std::sync::Arc;

use axum::{
    extract::{DefaultBodyLimit, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use medley::{DomainError, GifSearchService};

pub mod adapters;
pub mod application;
pub mod config;
pub mod error;
pub mod routes;
pub mod views;

use adapters::{LocalImageStore, TenorGifSearch};
use application::ImageFilterService;
use config::{AppConfig, IMAGES_URL_PREFIX};

/// Image filter service backed by the local filesystem
pub type AppImageFilterService = ImageFilterService<LocalImageStore>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub image_filter: Arc<AppImageFilterService>,
    pub gif_search: Option<Arc<dyn GifSearchService>>,
}

impl AppState {
    /// Wire up services from configuration
    pub fn from_config(config: AppConfig) -> Result<Self, DomainError> {
        let store = Arc::new(LocalImageStore::new(
            config.images_dir.clone(),
            IMAGES_URL_PREFIX,
        ));
        let image_filter = Arc::new(ImageFilterService::new(store));

        let gif_search = match &config.tenor_api_key {
            Some(key) => {
                let client = TenorGifSearch::new(
                    key.clone(),
                    config.tenor_base_url.clone(),
                    config.gif_search_timeout,
                )?;
                Some(Arc::new(client) as Arc<dyn GifSearchService>)
            }
            None => None,
        };

        Ok(Self {
            config: Arc::new(config),
            image_filter,
            gif_search,
        })
    }
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
    gif_search: bool,
}

async fn health_check(State(state): State<AppState>) -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Medley is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        gif_search: state.gif_search.is_some(),
    })
}

/// Build the router with every page, static images and API docs
pub fn build_router(state: AppState) -> Router {
    let openapi = routes::swagger::ApiDoc::openapi();
    let images = ServeDir::new(&state.config.images_dir);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::home::router())
        .merge(routes::compliments::router())
        .merge(routes::animal_facts::router())
        .merge(routes::image_filter::router())
        .merge(routes::gif_search::router())
        .nest_service(IMAGES_URL_PREFIX, images)
        .layer(DefaultBodyLimit::max(state.config.max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

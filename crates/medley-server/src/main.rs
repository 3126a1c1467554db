use medley_server::{build_router, config::AppConfig, AppState};

#[shuttle_runtime::main]
async fn main(
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("🎪 Medley initializing...");

    let config = AppConfig::from_lookup(|key| secrets.get(key));

    if config.tenor_api_key.is_some() {
        tracing::info!("🔍 GIF search enabled ({})", config.tenor_base_url);
    } else {
        tracing::warn!("⚠️  No TENOR_API_KEY set - GIF search disabled");
    }

    tokio::fs::create_dir_all(&config.images_dir)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create {}: {e}", config.images_dir.display()))?;
    tracing::info!("🖼️  Serving images from {}", config.images_dir.display());

    let state = AppState::from_config(config).map_err(anyhow::Error::from)?;
    let router = build_router(state);

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Medley ready");

    Ok(router.into())
}

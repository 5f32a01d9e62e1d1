use std::sync::Arc;

use foxbriar_sips::{
    config::Config,
    db::{create_redis_client, InMemoryLoreStore, LoreStore, LoreWriter, RedisLoreStore},
    models::MenuDataset,
    routes::{create_router, AppState},
    services::{CocktailGenerator, OpenAiConfig, OpenAiGenerator, RuleBasedGenerator},
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let menu = match &config.menu_path {
        Some(path) => MenuDataset::from_path(path)?,
        None => MenuDataset::bundled()?,
    };
    tracing::info!(
        source = config.menu_path.as_deref().unwrap_or("bundled"),
        "Menu loaded"
    );

    let recommender: Arc<dyn CocktailGenerator> =
        Arc::new(RuleBasedGenerator::new(Arc::new(menu), config.rng_seed));

    let generator: Arc<dyn CocktailGenerator> = match &config.openai_api_key {
        Some(api_key) => Arc::new(OpenAiGenerator::new(OpenAiConfig {
            api_key: api_key.clone(),
            base_url: config.openai_base_url.clone(),
            model: config.openai_model.clone(),
            timeout: config.openai_timeout(),
        })?),
        None => {
            tracing::warn!("OPENAI_API_KEY not set, cocktail generation uses the rule engine");
            recommender.clone()
        }
    };

    let lore: Arc<dyn LoreStore> = match &config.redis_url {
        Some(redis_url) => {
            let client = create_redis_client(redis_url)?;
            Arc::new(RedisLoreStore::new(client).await?)
        }
        None => Arc::new(InMemoryLoreStore::new()),
    };
    tracing::info!(
        lore_store = lore.name(),
        generator = generator.name(),
        "Services configured"
    );

    let (lore_writer, writer_handle) = LoreWriter::new(lore.clone());

    let state = Arc::new(AppState {
        recommender,
        generator,
        lore,
        lore_writer,
    });
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!(address = %config.bind_address(), "Server running");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    writer_handle.shutdown().await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutdown signal received");
}

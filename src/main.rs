use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use event_scout::{
    api::{create_router, AppState},
    config::Config,
    services::MockCatalog,
    storage::{create_redis_client, DeviceStorage, RedisStore},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .init();

    let catalog = match &config.catalog_path {
        Some(path) => MockCatalog::from_file(path).await?,
        None => MockCatalog::bundled()?,
    };

    let storage = match &config.redis_url {
        Some(url) => {
            let client = create_redis_client(url)?;
            let store = RedisStore::connect(client, config.storage_namespace.clone()).await?;
            DeviceStorage::new(Arc::new(store))
        }
        None => DeviceStorage::in_memory(),
    };

    tracing::info!(
        events = catalog.len(),
        storage = storage.backend(),
        "Initializing application state"
    );

    // Initialize application state
    let state = AppState::new(Arc::new(catalog), storage);

    // Create the router with all routes
    let app = create_router(state);

    // Start the server
    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(address = %address, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}

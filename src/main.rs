use dotenvy::dotenv;
use storefront::{
    api::{self, AppState},
    config,
    core::{CartStore, ProductStore},
    errors::{Error, Result},
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();

    // 3. Load the application configuration
    let settings = config::load_app_configuration()
        .inspect_err(|e| error!("Failed to load configuration: {}", e))?;

    // 4. Open both stores; each is fully loaded before any request is served
    let products = ProductStore::open(&settings.storage.products_file).await;
    let carts = CartStore::open(&settings.storage.carts_file).await;
    let state = AppState::new(products, carts, settings.carts.validate_products);

    // 5. Serve until Ctrl-C
    let listener = tokio::net::TcpListener::bind(settings.server.addr)
        .await
        .map_err(|source| Error::Server { source })
        .inspect_err(|e| error!("Failed to bind {}: {}", settings.server.addr, e))?;
    info!("Listening on {}", settings.server.addr);

    axum::serve(listener, api::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|source| Error::Server { source })?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

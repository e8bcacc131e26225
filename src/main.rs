//! Chain pricing HTTP server.

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use tokio::signal;
use tracing::info;

use chain_pricing::adapters::http::PricingAppState;
use chain_pricing::adapters::{InMemoryPricingTierReader, PostgresPricingTierReader};
use chain_pricing::config::{AppConfig, DatabaseConfig};
use chain_pricing::domain::pricing::CatalogFile;
use chain_pricing::ports::PricingTierReader;
use chain_pricing::{build_router, init_tracing};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config.server);

    let catalog_path = config.pricing.catalog_path();
    let (catalog, catalog_tiers) = CatalogFile::load(catalog_path)?.into_parts()?;
    info!(
        path = %catalog_path.display(),
        plans = catalog.len(),
        tiers = catalog_tiers.len(),
        "Loaded pricing catalog"
    );

    let tier_reader: Arc<dyn PricingTierReader> = match &config.database {
        Some(database) => Arc::new(connect_postgres(database).await?),
        None => {
            info!("No database configured, serving tiers from the catalog file");
            Arc::new(InMemoryPricingTierReader::with_tiers(catalog_tiers))
        }
    };

    let state = PricingAppState::new(tier_reader, Arc::new(catalog));
    let app = build_router(state, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, environment = ?config.server.environment, "Chain pricing server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn connect_postgres(
    database: &DatabaseConfig,
) -> Result<PostgresPricingTierReader, Box<dyn Error>> {
    info!(
        max_connections = database.max_connections,
        min_connections = database.min_connections,
        "Connecting to PostgreSQL"
    );

    let pool = PgPoolOptions::new()
        .max_connections(database.max_connections)
        .min_connections(database.min_connections)
        .acquire_timeout(database.acquire_timeout())
        .connect(&database.url)
        .await?;

    if database.run_migrations {
        info!("Running database migrations");
        sqlx::migrate!("./migrations").run(&pool).await?;
    }

    Ok(PostgresPricingTierReader::new(pool))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }

    tokio::time::sleep(Duration::from_millis(250)).await;
}

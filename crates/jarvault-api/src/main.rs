//! # jarvault-api — Binary Entry Point
//!
//! Starts the Axum HTTP server. Startup order matters: the bucket is
//! ensured before the service accepts traffic, and a bucket that cannot
//! be ensured for any reason other than "not created yet" aborts startup
//! rather than letting every later request fail.

use std::sync::Arc;

use anyhow::Context;

use jarvault_api::catalog::{self, VersionCatalog};
use jarvault_api::state::{AppConfig, AppState};
use jarvault_engine::{EngineConfig, JarCache};
use jarvault_origin::{OriginClient, OriginConfig};
use jarvault_store::{JarStore, StoreConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();
    let store_config = StoreConfig::from_env().context("object store configuration")?;
    let origin_config = OriginConfig::from_env().context("origin configuration")?;
    let engine_config = EngineConfig::from_env();

    // Ensure the bucket before serving: a store that cannot be set up is
    // a configuration failure, not a per-request 500.
    let store = JarStore::new(&store_config);
    store.ensure_bucket().await.map_err(|e| {
        tracing::error!("bucket initialization failed: {e}");
        anyhow::anyhow!(e)
    })?;

    let origin =
        OriginClient::new(origin_config.clone()).context("origin client construction")?;
    let engine = JarCache::new(origin, store, engine_config).context("engine construction")?;

    // Background vanilla catalog refresh; the first tick fires at startup.
    // The task runs for the life of the process, so its handle is dropped.
    let catalog = VersionCatalog::new();
    let _refresher =
        catalog::spawn_refresher(origin_config, catalog.clone(), config.catalog_refresh_secs);

    let state = AppState {
        engine: Arc::new(engine),
        catalog,
    };
    let app = jarvault_api::app(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("jarvault API listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

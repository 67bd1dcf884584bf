// rest_api/src/main.rs

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use dotenv::dotenv;
use tokio::net::TcpListener;
use tracing::info;

use portal::{RecordStore, SledRecordStore};
use rest_api::config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt().with_target(false).init();

    let config = ServerConfig::from_env().context("Failed to load server configuration")?;

    let store = SledRecordStore::open(&config.store_path, &config.store_db_name)
        .with_context(|| format!("Failed to open record store at {}", config.store_path))?;
    let store: Arc<dyn RecordStore> = Arc::new(store);

    let app = rest_api::app(store).layer(config.cors_layer());

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .with_context(|| format!("Invalid bind address {}:{}", config.host, config.port))?;

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to address: {addr}"))?;
    info!("Patient portal API listening on {addr}");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Patient portal API failed to start or run")?;

    info!("Patient portal API stopped.");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Received shutdown signal.");
    }
}

//! Seat-booking server
//!
//! # Usage
//!
//! ```bash
//! # In-memory store on 127.0.0.1:8080
//! cargo run
//!
//! # PostgreSQL with a config file
//! SEATBOOK_CONFIG=seatbook.yaml cargo run --features postgres
//! ```

use anyhow::Result;
use seatbook::config::{AppConfig, StorageBackend};
use seatbook::server::ServerBuilder;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("SEATBOOK_CONFIG").ok());
    let config = match path {
        Some(path) => AppConfig::from_yaml_file(&path)?,
        None => AppConfig::default(),
    }
    .with_env_overrides()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&config.log.filter).unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        address = %config.bind_address(),
        backend = ?config.storage.backend,
        "Starting seatbook"
    );

    let builder = match config.storage.backend {
        StorageBackend::InMemory => ServerBuilder::new().with_in_memory_store(),
        StorageBackend::Postgres => postgres_builder(&config).await?,
    };

    builder.serve(&config.bind_address()).await
}

#[cfg(feature = "postgres")]
async fn postgres_builder(config: &AppConfig) -> Result<ServerBuilder> {
    use anyhow::Context;
    use seatbook::storage::PostgresStore;
    use seatbook::storage::postgres::ensure_schema;

    let url = config
        .storage
        .database_url
        .as_deref()
        .context("storage.database_url is required for the postgres backend")?;
    let store = PostgresStore::connect(url, config.storage.max_connections).await?;
    ensure_schema(store.pool()).await?;
    tracing::info!("PostgreSQL schema up to date");

    Ok(ServerBuilder::new().with_store(store))
}

#[cfg(not(feature = "postgres"))]
async fn postgres_builder(_config: &AppConfig) -> Result<ServerBuilder> {
    anyhow::bail!("the postgres backend requires building with `--features postgres`")
}

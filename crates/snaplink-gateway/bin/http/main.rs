mod cli;

use crate::cli::{StorageBackendArg, CLI};
use anyhow::Context;
use clap::Parser;
use snaplink_core::Store;
use snaplink_gateway::{App, AppState};
use snaplink_generator::{GeneratorSettings, RandomGenerator};
use snaplink_resolver::ResolverService;
use snaplink_shortener::ShortenerService;
use snaplink_store::{MemoryStore, SqliteStore};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = CLI::try_parse()?;

    info!(
        listen_addr = %config.listen_addr,
        base_url = %config.base_url,
        storage_backend = %config.storage,
        code_length = config.code_length,
        "starting snaplink gateway"
    );

    let generator = RandomGenerator::new(
        GeneratorSettings::builder()
            .length(config.code_length)
            .build(),
    )
    .context("invalid code length")?;

    match config.storage {
        StorageBackendArg::InMemory => {
            run_server(config, MemoryStore::new(), generator).await?;
        }
        StorageBackendArg::Sqlite => {
            let dsn = config
                .sqlite_dsn
                .clone()
                .context("sqlite dsn is required when storage backend is sqlite")?;
            let store = SqliteStore::connect(&dsn)
                .await
                .context("failed to open sqlite store")?;
            run_server(config, store, generator).await?;
        }
    }

    Ok(())
}

async fn run_server<S: Store + Clone>(
    config: CLI,
    store: S,
    generator: RandomGenerator,
) -> anyhow::Result<()> {
    let shortener =
        ShortenerService::new(store.clone(), generator).with_max_attempts(config.max_attempts);
    let resolver = ResolverService::new(store);
    let state = AppState::new(Arc::new(shortener), Arc::new(resolver), config.base_url);

    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .context("failed to bind listen address")?;
    info!(listen_addr = %listener.local_addr()?, "gateway listening");

    axum::serve(listener, App::router(state))
        .await
        .context("server error")?;

    Ok(())
}

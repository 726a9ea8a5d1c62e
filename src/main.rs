use address_registry::config::{Config, LogFormat};
use address_registry::dataset::DatasetCache;
use address_registry::server;
use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    init_logging(&config);

    tracing::info!("Initializing registry service");
    tracing::info!("Registry file: {}", config.csv_path.display());

    // 1. Dataset, loaded once before the listener comes up:
    let cache = Arc::new(DatasetCache::new(&config.csv_path));
    let dataset = cache.get();

    tracing::info!("Loaded records: {}", dataset.len());
    if let Some(first) = dataset.first() {
        tracing::info!(
            address = first.address.as_deref().unwrap_or("-"),
            houseguid = first.houseguid.as_deref().unwrap_or("-"),
            "Sample record"
        );
    } else {
        tracing::warn!("Registry is empty; searches will return no results");
    }

    // 2. HTTP server:
    server::serve(&config, cache).await
}

fn init_logging(config: &Config) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(config.log_level())
    };

    match config.log_format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(fmt::layer().json())
                .with(filter)
                .init();
        }
        LogFormat::Text => {
            tracing_subscriber::registry()
                .with(fmt::layer())
                .with(filter)
                .init();
        }
    }
}

// File: server/src/main.rs
use anyhow::Result;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use server::config::Config;
use server::database::Store;
use server::web::start_web_server;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging with reduced verbosity
    let env_filter = EnvFilter::from_default_env()
        .add_directive("server=info".parse()?)
        .add_directive("tower_http=warn".parse()?)
        .add_directive("hyper=warn".parse()?)
        .add_directive("mongodb=warn".parse()?);

    fmt().with_env_filter(env_filter).init();

    info!("Starting WarmPaws booking server");

    // Load configuration
    let config = Arc::new(Config::from_env()?);
    info!(
        "Configuration loaded: listening on {}:{}, database '{}'",
        config.host, config.port, config.database
    );

    // Connect storage once; every handler shares this client
    let store = Arc::new(Store::connect(&config).await?);
    info!("Storage initialized");

    // Serves until the shutdown signal arrives
    start_web_server(config, store.clone()).await?;

    // Router and state are dropped once serving stops, leaving the last
    // reference here for a clean teardown.
    match Arc::into_inner(store) {
        Some(store) => {
            store.close().await;
            info!("Storage connection closed");
        }
        None => warn!("Storage still referenced at shutdown, skipping close"),
    }

    Ok(())
}

use anyhow::Context;
use dotenvy::dotenv;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use roster::config::AppConfig;
use roster::database::RosterStore;
use roster::web;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = AppConfig::from_env();

    let store = Arc::new(RosterStore::from_seed(config.capacity));
    info!(
        activities = store.len(),
        capacity = ?config.capacity,
        "Roster seeded"
    );

    if !config.static_dir.is_dir() {
        warn!(
            "Static directory {} not found; the front end will not be served",
            config.static_dir.display()
        );
    }

    let app = web::build_router(store, &config.static_dir);

    let addr = config.bind_addr()?;
    let listener = match TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback = config.fallback_bind_addr()?;
            warn!("Could not bind {}: {}. Trying fallback {}", addr, e, fallback);
            TcpListener::bind(fallback)
                .await
                .with_context(|| format!("cannot bind fallback address {}", fallback))?
        }
    };

    let bound_addr = listener.local_addr()?;
    info!("Roster server running on http://{}", bound_addr);

    axum::serve(listener, app).await?;
    Ok(())
}

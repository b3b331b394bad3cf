use std::error::Error;
use std::sync::Arc;

use dotenvy::dotenv;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use mergington_activities::config::AppConfig;
use mergington_activities::database::activity_directory::ActivityDirectory;
use mergington_activities::database::seed;
use mergington_activities::web;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv().ok();

    // 1. Logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // 2. Configuration and seed
    let config = AppConfig::from_env()?;
    let activities = seed::load(config.seed_path.as_deref())?;
    info!(
        activities = activities.len(),
        seed = ?config.seed_path,
        "activity directory loaded"
    );
    let directory = Arc::new(ActivityDirectory::new(activities));

    // 3. Router
    let app = web::router(directory, &config.static_dir);

    // 4. Bind, with one fallback port
    let addr = config.addr()?;
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback = config.fallback_addr()?;
            warn!(%addr, %fallback, error = %e, "bind failed, trying fallback port");
            tokio::net::TcpListener::bind(fallback).await?
        }
    };

    let bound_addr = listener.local_addr()?;
    info!("server listening on http://{}", bound_addr);

    axum::serve(listener, app).await?;
    Ok(())
}

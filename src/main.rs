use std::sync::Arc;

use dotenvy::dotenv;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use activity_directory::config::{AppConfig, StartupError};
use activity_directory::database::activity_store::ActivityStore;
use activity_directory::web::app;

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    // Load .env if present
    dotenv().ok();

    // 1. Start logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")),
        )
        .init();

    // 2. Seed the directory
    let config = AppConfig::from_env();
    let store = Arc::new(ActivityStore::seeded());
    info!(
        "Loaded {} activities (build {})",
        store.list().await.len(),
        env!("ACTIVITY_DIRECTORY_BUILD_ID")
    );

    // 3. Build the application
    let app = app::router(store, &config.static_dir);

    // 4. Start the server (with fallback port)
    let addr = config.addr()?;
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback = config.fallback_addr()?;
            warn!(
                "Could not bind {}: {}. Trying fallback {}",
                addr, e, fallback
            );
            tokio::net::TcpListener::bind(fallback)
                .await
                .map_err(|source| StartupError::Bind {
                    addr: fallback,
                    source,
                })?
        }
    };

    let bound_addr = listener.local_addr().map_err(StartupError::LocalAddr)?;
    println!("🚀 Server running at http://{}", bound_addr);
    println!("📍 Open http://{}/ to browse activities", bound_addr);

    axum::serve(listener, app).await?;
    Ok(())
}

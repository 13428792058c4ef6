use server_http::{AppState, build_router};
use shared::config::Config;
use std::sync::Arc;
use std::time::Duration;
use tracing::{Level, info};
use vortex::facade::CacheFacade;
use vortex::sync::{CoinsSync, NewsSync, SyncJob, SyncScheduler};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    info!("Starting Vortex Cache Service...");

    // Load environment variables from .env file (if exists)
    match dotenvy::dotenv() {
        Ok(_) => info!("Loaded environment variables from .env file"),
        Err(_) => info!("No .env file found, using system environment variables"),
    }

    // Load configuration from environment variables
    let config = Config::from_env();

    // Wire up the cache facade; an unreachable store degrades, never aborts
    let cache = Arc::new(
        CacheFacade::connect(
            &config.redis_url,
            Duration::from_secs(config.default_ttl_secs),
        )
        .await,
    );

    // Start the background sync loop
    let jobs: Vec<Arc<dyn SyncJob>> = vec![
        Arc::new(CoinsSync::new(cache.clone())),
        Arc::new(NewsSync::new(cache.clone())),
    ];
    let sync_handle =
        SyncScheduler::new(jobs, Duration::from_secs(config.sync_interval_secs)).spawn();
    info!(
        "Sync scheduler started (interval: {}s)",
        config.sync_interval_secs
    );

    // Build router
    let state = AppState::new(cache);
    let router = build_router(state, &config);

    // Start server
    let addr = format!("{}:{}", config.host, config.http_port);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();

    info!("HTTP Server listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    // Stop the sync loop before exiting
    sync_handle.shutdown().await;
    info!("Server shutdown complete");
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received terminate signal");
        },
    }

    info!("Shutting down gracefully...");
}

//! BinSight server entry point

use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use binsight_server::{config, create_router, store, AppState};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "binsight_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    tracing::info!("BinSight detection server starting...");
    tracing::info!("Storage document: {}", config.storage_path);
    tracing::info!("Snapshot directory: {}", config.snapshot_dir);

    // Bootstrap persisted state and the snapshot directory
    let store = store::Store::new(store::JsonFileBackend::new(&config.storage_path));
    store
        .bootstrap()
        .expect("Failed to initialize storage document");
    std::fs::create_dir_all(&config.snapshot_dir).expect("Failed to create snapshot directory");

    let port = config.port;
    let state = AppState::new(store, config);
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

use axum::Json;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::{
    Form, Router,
    extract::Extension,
    routing::{get, post},
};
use hatbox::config::ServerConfig;
use hatbox::intake::handlers::{handle_get_record, handle_push, handle_status};
use hatbox::intake::types::{PushForm, StatusResponse};
use hatbox::storage::fs::FileStore;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let config = match ServerConfig::from_args(&args[1..]) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            eprintln!(
                "Usage: {} [--bind <addr:port>] [--data-dir <path>] [--max-entries <n>]",
                args[0]
            );
            std::process::exit(1);
        }
    };

    tracing::info!("Data directory: {}", config.data_dir.display());
    tracing::info!("Capacity ceiling: {} directory entries", config.max_entries);

    // 1. Storage layer:
    let store = Arc::new(FileStore::open(&config.data_dir)?);
    let config = Arc::new(config);

    // 2. HTTP Router:
    let app = Router::new()
        .route("/push", post(handle_push_file))
        .route("/status", get(handle_status_file))
        .route("/records/:index", get(handle_get_record_file))
        .layer(Extension(store))
        .layer(Extension(config.clone()));

    // 3. Start HTTP server:
    tracing::info!("HTTP server listening on {}", config.bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// Concrete wrappers binding the generic intake handlers to the file store.

async fn handle_push_file(
    store: Extension<Arc<FileStore>>,
    config: Extension<Arc<ServerConfig>>,
    form: Form<PushForm>,
) -> (StatusCode, String) {
    handle_push::<FileStore>(store, config, form).await
}

async fn handle_status_file(
    store: Extension<Arc<FileStore>>,
    config: Extension<Arc<ServerConfig>>,
) -> (StatusCode, Json<StatusResponse>) {
    handle_status::<FileStore>(store, config).await
}

async fn handle_get_record_file(
    index: Path<usize>,
    store: Extension<Arc<FileStore>>,
) -> (StatusCode, String) {
    handle_get_record::<FileStore>(index, store).await
}

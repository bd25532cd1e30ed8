//! Server runtime: state graph, router assembly and startup.

use std::sync::Arc;

use axum::{
    Router,
    http::Method,
    routing::{get, post},
};
use thiserror::Error;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::Config;
use crate::infrastructure::hf::HfError;
use crate::ui::{handler, signal, state::AppState};

/// Fatal startup errors. Once the server is serving, nothing here is fatal.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Could not bind the listen address
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// The accept loop failed
    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The upstream HTTP client could not be constructed
    #[error("failed to build upstream client: {0}")]
    Upstream(#[from] HfError),
}

/// Run the relay server until shutdown.
pub async fn run(config: Config) -> Result<(), ServerError> {
    let state = Arc::new(AppState::new(&config)?);

    // The front end runs on a separate dev origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(handler::health_check))
        .route("/api/ipc-search", post(handler::ipc_search))
        .route("/ws", get(handler::websocket_handler))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;

    tracing::info!("Server running on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(signal::shutdown_signal())
        .await?;

    Ok(())
}

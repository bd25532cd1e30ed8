//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};

use crate::{
    infrastructure::dto::http::{ErrorEnvelope, HealthResponse, IpcSearchRequest},
    infrastructure::hf::HfError,
    ui::state::AppState,
};

/// Health check endpoint
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let connected_users = state.repository.count_registered().await;
    Json(HealthResponse {
        status: "ok".to_string(),
        connected_users,
    })
}

/// Statute search proxy endpoint.
///
/// Forwards the query to the configured text-generation model and returns
/// its raw JSON. Any upstream failure becomes a 500 with a generic error
/// envelope; there is no retry.
pub async fn ipc_search(
    State(state): State<Arc<AppState>>,
    Json(request): Json<IpcSearchRequest>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<ErrorEnvelope>)> {
    let prompt = format!(
        "Give me details and related cases for IPC section or topic: {}",
        request.query
    );

    match state.hf.generate(&prompt).await {
        Ok(body) => Ok(Json(body)),
        Err(e) => {
            tracing::warn!("ipc-search upstream call failed: {e}");
            let error = match e {
                HfError::Status(_) => "Hugging Face API error",
                HfError::Request(_) => "Server error",
            };
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorEnvelope {
                    error: error.to_string(),
                }),
            ))
        }
    }
}

//! HTTP API DTOs.

use serde::{Deserialize, Serialize};

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(rename = "connectedUsers")]
    pub connected_users: usize,
}

/// Request body of the statute search proxy endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpcSearchRequest {
    pub query: String,
}

/// Generic error envelope returned on upstream failures
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: String,
}

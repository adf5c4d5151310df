use serde::{Deserialize, Serialize};

/// Response type for the root endpoint
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct IndexResponse {
    pub message: String,
    pub status: String,
}

/// Response type for health check endpoint
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Response type for the API info endpoint
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct InfoResponse {
    pub app: String,
    pub version: String,
    pub endpoints: Vec<String>,
}

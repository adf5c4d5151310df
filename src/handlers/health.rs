use crate::models::HealthResponse;
use crate::routes;
use axum::{http::StatusCode, Json};

/// GET /health handler - Health check endpoint
///
/// Liveness probe for container orchestration. The service holds no
/// dependencies, so answering at all means it is ready to serve.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_handler() -> (StatusCode, Json<HealthResponse>) {
    tracing::debug!("Health check passed");
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
        }),
    )
}

use crate::models::IndexResponse;
use crate::routes;
use axum::{http::StatusCode, Json};

pub const WELCOME_MESSAGE: &str = "Welcome to Flask CI/CD Pipeline";

/// GET / handler - Welcome message
#[utoipa::path(
    get,
    path = routes::INDEX,
    responses(
        (status = 200, description = "Service is running", body = IndexResponse)
    ),
    tag = "service"
)]
pub async fn index_handler() -> (StatusCode, Json<IndexResponse>) {
    tracing::debug!("Serving welcome message");
    (
        StatusCode::OK,
        Json(IndexResponse {
            message: WELCOME_MESSAGE.to_string(),
            status: "running".to_string(),
        }),
    )
}

use axum::{
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Error response type
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Custom error type for API endpoints
///
/// Maps each failure to an HTTP status code and renders it as a JSON
/// `ErrorResponse`.
#[derive(Debug)]
pub enum ApiError {
    /// No handler for this path, or none for this method on a known path
    RouteNotFound { method: Method, path: String },
    /// Unhandled fault caught by the production panic layer
    Internal,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::RouteNotFound { method, path } => (
                StatusCode::NOT_FOUND,
                format!("Route not found: {} {}", method, path),
            ),
            ApiError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

/// Panic handler for `CatchPanicLayer` in production mode.
///
/// Logs the panic payload and answers with a generic 500 so internal
/// details never reach the client.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };

    tracing::error!(panic = %detail, "Handler panicked");

    ApiError::Internal.into_response()
}

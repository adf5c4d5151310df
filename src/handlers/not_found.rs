use crate::error::ApiError;
use axum::http::{Method, Uri};

/// Fallback handler for unknown paths and for non-GET methods on known paths
pub async fn not_found_handler(method: Method, uri: Uri) -> ApiError {
    tracing::info!("No route for {} {}", method, uri.path());
    ApiError::RouteNotFound {
        method,
        path: uri.path().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorResponse;
    use axum::{body::Body, http::Request, http::StatusCode, Router};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_fallback_returns_404() {
        let app = Router::new().fallback(not_found_handler);

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/nonexistent?x=1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error_response: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert!(error_response.error.contains("Route not found"));
        assert!(error_response.error.contains("/nonexistent"));
        assert!(!error_response.error.contains("x=1"));
    }
}

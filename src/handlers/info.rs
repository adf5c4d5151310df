use crate::models::InfoResponse;
use crate::routes;
use axum::{http::StatusCode, Json};

pub const APP_NAME: &str = "Flask CI/CD Demo";
pub const APP_VERSION: &str = "1.0.0";

/// GET /api/v1/info handler - API information
///
/// `endpoints` lists every routed path in declaration order.
#[utoipa::path(
    get,
    path = routes::API_INFO,
    responses(
        (status = 200, description = "Application name, version and endpoints", body = InfoResponse)
    ),
    tag = "service"
)]
pub async fn info_handler() -> (StatusCode, Json<InfoResponse>) {
    tracing::debug!("Serving API info");
    (
        StatusCode::OK,
        Json(InfoResponse {
            app: APP_NAME.to_string(),
            version: APP_VERSION.to_string(),
            endpoints: routes::ENDPOINTS.iter().map(|p| p.to_string()).collect(),
        }),
    )
}

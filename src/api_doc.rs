use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::handlers;
use crate::models::{HealthResponse, IndexResponse, InfoResponse};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Flask CI/CD Demo API",
        version = "1.0.0",
        description = "Static JSON endpoints for a CI/CD pipeline demo service"
    ),
    paths(
        handlers::index::index_handler,
        handlers::health::health_handler,
        handlers::info::info_handler
    ),
    components(
        schemas(
            IndexResponse,
            HealthResponse,
            InfoResponse,
            ErrorResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "service", description = "Service information")
    )
)]
pub struct ApiDoc;

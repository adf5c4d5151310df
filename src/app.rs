use crate::error;
use crate::handlers;
use crate::routes;
use anyhow::bail;
use axum::{routing::get, Router};
use std::fmt;
use std::str::FromStr;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

/// Construction mode for the service
///
/// `Testing` only changes how unhandled faults are presented: they
/// propagate raw instead of being rendered as a generic 500. Route
/// responses are identical in both modes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AppMode {
    #[default]
    Production,
    Testing,
}

impl AppMode {
    pub fn is_testing(self) -> bool {
        self == AppMode::Testing
    }
}

impl FromStr for AppMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" => Ok(AppMode::Production),
            "testing" => Ok(AppMode::Testing),
            other => bail!("unknown mode '{}', expected 'production' or 'testing'", other),
        }
    }
}

impl fmt::Display for AppMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppMode::Production => write!(f, "production"),
            AppMode::Testing => write!(f, "testing"),
        }
    }
}

/// Build a fully routed service.
///
/// The route table is fixed here and never mutated afterwards. Unknown
/// paths, and known paths hit with a method other than GET, answer 404.
pub fn create_app(mode: AppMode) -> Router {
    let router = Router::new()
        .route(routes::INDEX, get(handlers::index_handler))
        .route(routes::HEALTH, get(handlers::health_handler))
        .route(routes::API_INFO, get(handlers::info_handler));

    with_middleware(router, mode)
}

fn with_middleware(router: Router, mode: AppMode) -> Router {
    let router = router
        .fallback(handlers::not_found_handler)
        .method_not_allowed_fallback(handlers::not_found_handler)
        .layer(TraceLayer::new_for_http());

    if mode.is_testing() {
        router
    } else {
        router.layer(CatchPanicLayer::custom(error::handle_panic))
    }
}

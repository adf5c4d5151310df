pub mod api_doc;
pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;

pub use app::{create_app, AppMode};

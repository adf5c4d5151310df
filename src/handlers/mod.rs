pub mod health;
pub mod index;
pub mod info;
pub mod not_found;

pub use health::health_handler;
pub use index::index_handler;
pub use info::info_handler;
pub use not_found::not_found_handler;

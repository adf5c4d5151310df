// Route path constants - single source of truth for all API paths

pub const INDEX: &str = "/";
pub const HEALTH: &str = "/health";
pub const API_INFO: &str = "/api/v1/info";

/// Every routed path, in the order advertised by the info endpoint
pub const ENDPOINTS: [&str; 3] = [INDEX, HEALTH, API_INFO];

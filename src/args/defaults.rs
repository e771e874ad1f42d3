pub(crate) const DEFAULT_USER_AGENT: &str = concat!("leitner-stress/", env!("CARGO_PKG_VERSION"));

/// Backend the scenarios are aimed at unless overridden.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
/// Concurrent leaderboard GETs per run.
pub const DEFAULT_LEADERBOARD_REQUESTS: usize = 1000;
/// Concurrent GETs per dashboard endpoint.
pub const DEFAULT_DASHBOARD_REQUESTS: usize = 1000;
/// Upper bound on requests in flight at once. Matches the largest default fan-out.
pub const DEFAULT_MAX_IN_FLIGHT: &str = "1000";
pub const DEFAULT_REQUEST_TIMEOUT: &str = "30s";
pub const DEFAULT_CONNECT_TIMEOUT: &str = "10s";

/// Largest in-flight bound the limiter can hold.
pub const MAX_IN_FLIGHT_LIMIT: usize = tokio::sync::Semaphore::MAX_PERMITS;

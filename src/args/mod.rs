//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod parsers;
mod types;


pub use cli::StressArgs;
pub use defaults::{
    DEFAULT_BASE_URL, DEFAULT_CONNECT_TIMEOUT, DEFAULT_DASHBOARD_REQUESTS,
    DEFAULT_LEADERBOARD_REQUESTS, DEFAULT_MAX_IN_FLIGHT, DEFAULT_REQUEST_TIMEOUT,
    MAX_IN_FLIGHT_LIMIT,
};
pub use parsers::parse_duration_arg;
pub use types::{HttpMethod, PositiveUsize, ScenarioKind};

pub(crate) use defaults::DEFAULT_USER_AGENT;

use clap::Parser;
use std::time::Duration;

use super::defaults::{
    DEFAULT_BASE_URL, DEFAULT_CONNECT_TIMEOUT, DEFAULT_DASHBOARD_REQUESTS,
    DEFAULT_LEADERBOARD_REQUESTS, DEFAULT_MAX_IN_FLIGHT, DEFAULT_REQUEST_TIMEOUT,
};
use super::parsers::{parse_bool_env, parse_duration_arg, parse_max_in_flight};
use super::types::{PositiveUsize, ScenarioKind};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Fire concurrent GET/PUT bursts at the Leitner trainer backend and print per-request timing and PASS/FAIL status."
)]
pub struct StressArgs {
    /// Path to config file (TOML or JSON)
    #[arg(long, short = 'c')]
    pub config: Option<String>,

    /// Base URL that relative endpoint templates are joined onto
    #[arg(long = "base-url", short = 'u', default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Scenarios to run, comma separated (always executed in canonical order)
    #[arg(long = "scenario", short = 's', value_enum, value_delimiter = ',')]
    pub scenarios: Vec<ScenarioKind>,

    /// Number of users for update-words/get-words (defaults to the whole user list)
    #[arg(long = "user-count")]
    pub user_count: Option<usize>,

    /// Concurrent GETs against the leaderboard endpoint
    #[arg(long = "leaderboard-requests", default_value_t = DEFAULT_LEADERBOARD_REQUESTS)]
    pub leaderboard_requests: usize,

    /// Concurrent GETs against each dashboard endpoint
    #[arg(long = "dashboard-requests", default_value_t = DEFAULT_DASHBOARD_REQUESTS)]
    pub dashboard_requests: usize,

    /// Maximum number of requests in flight at once
    #[arg(
        long = "max-in-flight",
        default_value = DEFAULT_MAX_IN_FLIGHT,
        value_parser = parse_max_in_flight
    )]
    pub max_in_flight: PositiveUsize,

    /// Total timeout per request (supports ms/s/m/h)
    #[arg(
        long = "timeout",
        default_value = DEFAULT_REQUEST_TIMEOUT,
        value_parser = parse_duration_arg
    )]
    pub request_timeout: Duration,

    /// Connect timeout per request (supports ms/s/m/h)
    #[arg(
        long = "connect-timeout",
        default_value = DEFAULT_CONNECT_TIMEOUT,
        value_parser = parse_duration_arg
    )]
    pub connect_timeout: Duration,

    /// Print a pass/fail and latency summary after every scenario step
    #[arg(long)]
    pub summary: bool,

    /// Enable verbose logging (debug level unless LEITNER_STRESS_LOG or RUST_LOG is set)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Disable colored log output
    #[arg(long = "no-color", env = "NO_COLOR", value_parser = parse_bool_env)]
    pub no_color: bool,
}

impl StressArgs {
    /// Selected scenarios in canonical order, or all of them when none were named.
    #[must_use]
    pub fn selected_scenarios(&self) -> Vec<ScenarioKind> {
        if self.scenarios.is_empty() {
            return ScenarioKind::ALL.to_vec();
        }
        ScenarioKind::ALL
            .into_iter()
            .filter(|kind| self.scenarios.contains(kind))
            .collect()
    }
}

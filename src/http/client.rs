use reqwest::Client;

use crate::{
    args::{DEFAULT_USER_AGENT, StressArgs},
    error::{AppError, AppResult, HttpError},
};

/// Builds the shared HTTP client. Every request carries the configured total
/// and connect timeouts.
///
/// # Errors
///
/// Returns an error when the underlying client cannot be constructed.
pub fn build_client(args: &StressArgs) -> AppResult<Client> {
    Client::builder()
        .timeout(args.request_timeout)
        .connect_timeout(args.connect_timeout)
        .user_agent(DEFAULT_USER_AGENT)
        .build()
        .map_err(|err| AppError::http(HttpError::BuildClientFailed { source: err }))
}

use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::parsers::check_max_in_flight;
use crate::args::{PositiveUsize, StressArgs};
use crate::catalog::{Catalog, EndpointTemplate};
use crate::error::{AppError, AppResult, ConfigError};

use super::types::{ConfigFile, DurationValue, EndpointsConfig};

/// Applies configuration values to CLI arguments. Values given on the command
/// line take precedence.
///
/// # Errors
///
/// Returns an error when config values are invalid.
pub fn apply_config(
    args: &mut StressArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> AppResult<()> {
    if !is_cli(matches, "base_url")
        && let Some(base_url) = config.base_url.clone()
    {
        args.base_url = base_url;
    }

    if !is_cli(matches, "scenarios")
        && let Some(scenarios) = config.scenarios.clone()
    {
        args.scenarios = scenarios;
    }

    if !is_cli(matches, "user_count")
        && let Some(user_count) = config.user_count
    {
        args.user_count = Some(user_count);
    }

    if !is_cli(matches, "leaderboard_requests")
        && let Some(count) = config.leaderboard_requests
    {
        args.leaderboard_requests = count;
    }

    if !is_cli(matches, "dashboard_requests")
        && let Some(count) = config.dashboard_requests
    {
        args.dashboard_requests = count;
    }

    if !is_cli(matches, "max_in_flight")
        && let Some(max_in_flight) = config.max_in_flight
    {
        args.max_in_flight = ensure_max_in_flight(max_in_flight, "max_in_flight")?;
    }

    if !is_cli(matches, "request_timeout")
        && let Some(timeout) = config.timeout.as_ref()
    {
        args.request_timeout = to_duration(timeout, "timeout")?;
    }

    if !is_cli(matches, "connect_timeout")
        && let Some(timeout) = config.connect_timeout.as_ref()
    {
        args.connect_timeout = to_duration(timeout, "connect_timeout")?;
    }

    if !is_cli(matches, "summary")
        && let Some(summary) = config.summary
    {
        args.summary = summary;
    }

    Ok(())
}

/// Builds the request catalog, overlaying any user list or endpoint groups
/// from the config on top of the built-in defaults.
///
/// # Errors
///
/// Returns an error when an override is empty.
pub fn build_catalog(config: Option<&ConfigFile>) -> AppResult<Catalog> {
    let mut catalog = Catalog::default();
    let Some(config) = config else {
        return Ok(catalog);
    };

    if let Some(users) = config.users.as_ref() {
        if users.is_empty() {
            return Err(AppError::config(ConfigError::EmptyUserList));
        }
        catalog.users.clone_from(users);
    }

    if let Some(endpoints) = config.endpoints.as_ref() {
        apply_endpoints(&mut catalog, endpoints)?;
    }

    Ok(catalog)
}

fn apply_endpoints(catalog: &mut Catalog, endpoints: &EndpointsConfig) -> AppResult<()> {
    let table = &mut catalog.endpoints;
    let groups = [
        ("leaderboard", endpoints.leaderboard.as_ref(), &mut table.leaderboard),
        ("dashboard", endpoints.dashboard.as_ref(), &mut table.dashboard),
        ("update_word", endpoints.update_word.as_ref(), &mut table.update_word),
        ("get_words", endpoints.get_words.as_ref(), &mut table.get_words),
    ];
    for (group, overrides, target) in groups {
        let Some(overrides) = overrides else {
            continue;
        };
        if overrides.is_empty() {
            return Err(AppError::config(ConfigError::EmptyEndpointGroup { group }));
        }
        *target = overrides
            .iter()
            .map(|raw| EndpointTemplate::new(raw.as_str()))
            .collect();
    }
    Ok(())
}

fn is_cli(matches: &ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(ValueSource::CommandLine)
}

fn ensure_max_in_flight(value: usize, field: &str) -> AppResult<PositiveUsize> {
    PositiveUsize::try_from(value)
        .and_then(check_max_in_flight)
        .map_err(|err| {
            AppError::config(ConfigError::FieldOutOfRange {
                field: field.to_owned(),
                source: err,
            })
        })
}

fn to_duration(value: &DurationValue, field: &'static str) -> AppResult<std::time::Duration> {
    value
        .to_duration()
        .map_err(|err| AppError::config(ConfigError::InvalidDuration { field, source: err }))
}

use std::time::Duration;

use serde::Deserialize;

use crate::args::ScenarioKind;
use crate::args::parsers::parse_duration_value;
use crate::error::ValidationError;

#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    pub base_url: Option<String>,
    pub scenarios: Option<Vec<ScenarioKind>>,
    pub user_count: Option<usize>,
    pub leaderboard_requests: Option<usize>,
    pub dashboard_requests: Option<usize>,
    #[serde(alias = "concurrency")]
    pub max_in_flight: Option<usize>,
    pub timeout: Option<DurationValue>,
    pub connect_timeout: Option<DurationValue>,
    pub summary: Option<bool>,
    pub users: Option<Vec<String>>,
    pub endpoints: Option<EndpointsConfig>,
}

/// Replacement templates per endpoint group. Omitted groups keep their defaults.
#[derive(Debug, Default, Deserialize)]
pub struct EndpointsConfig {
    pub leaderboard: Option<Vec<String>>,
    pub dashboard: Option<Vec<String>>,
    pub update_word: Option<Vec<String>>,
    pub get_words: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    Seconds(u64),
    Text(String),
}

impl DurationValue {
    pub(crate) fn to_duration(&self) -> Result<Duration, ValidationError> {
        match self {
            DurationValue::Seconds(secs) => {
                if *secs == 0 {
                    Err(ValidationError::DurationZero)
                } else {
                    Ok(Duration::from_secs(*secs))
                }
            }
            DurationValue::Text(text) => parse_duration_value(text),
        }
    }
}

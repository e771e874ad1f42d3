use std::time::Duration;

use url::Url;

use crate::args::HttpMethod;

/// The only status counted as a pass.
pub const EXPECTED_STATUS: u16 = 200;

/// A fully formed request: method plus resolved URL. No body, no extra headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSpec {
    pub method: HttpMethod,
    pub url: Url,
}

impl RequestSpec {
    #[must_use]
    pub const fn new(method: HttpMethod, url: Url) -> Self {
        Self { method, url }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    Pass,
    Fail,
}

impl RequestOutcome {
    #[must_use]
    pub const fn from_status(status: u16) -> Self {
        if status == EXPECTED_STATUS {
            RequestOutcome::Pass
        } else {
            RequestOutcome::Fail
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            RequestOutcome::Pass => "PASS",
            RequestOutcome::Fail => "FAIL",
        }
    }
}

impl std::fmt::Display for RequestOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one completed call attempt. `status` is `None` when no response
/// arrived; such attempts are always `Fail`.
#[derive(Debug, Clone)]
pub struct RequestResult {
    pub method: HttpMethod,
    pub url: Url,
    pub elapsed: Duration,
    pub outcome: RequestOutcome,
    pub status: Option<u16>,
    pub timed_out: bool,
    pub transport_error: bool,
}

impl RequestResult {
    #[must_use]
    pub const fn passed(&self) -> bool {
        matches!(self.outcome, RequestOutcome::Pass)
    }
}

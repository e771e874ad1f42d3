use crate::error::SinkError;
use crate::http::RequestResult;

use super::histogram::LatencyHistogram;

/// Running counts for the scenario step currently in progress.
#[derive(Debug)]
pub struct StepTally {
    pub total: u64,
    pub passed: u64,
    pub failed: u64,
    pub timeouts: u64,
    pub transport_errors: u64,
    pub latency: LatencyHistogram,
}

impl StepTally {
    /// # Errors
    ///
    /// Returns an error if the latency histogram cannot be created.
    pub fn new() -> Result<Self, SinkError> {
        Ok(Self {
            total: 0,
            passed: 0,
            failed: 0,
            timeouts: 0,
            transport_errors: 0,
            latency: LatencyHistogram::new()?,
        })
    }

    /// # Errors
    ///
    /// Returns an error if the latency cannot be recorded.
    pub fn record(&mut self, result: &RequestResult) -> Result<(), SinkError> {
        self.total = self.total.saturating_add(1);
        if result.passed() {
            self.passed = self.passed.saturating_add(1);
        } else {
            self.failed = self.failed.saturating_add(1);
        }
        if result.timed_out {
            self.timeouts = self.timeouts.saturating_add(1);
        }
        if result.transport_error {
            self.transport_errors = self.transport_errors.saturating_add(1);
        }
        let latency_ms = u64::try_from(result.elapsed.as_millis()).unwrap_or(u64::MAX);
        self.latency.record(latency_ms)
    }

    pub fn reset(&mut self) {
        self.total = 0;
        self.passed = 0;
        self.failed = 0;
        self.timeouts = 0;
        self.transport_errors = 0;
        self.latency.reset();
    }
}

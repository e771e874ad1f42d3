use hdrhistogram::Histogram;

use crate::error::SinkError;

/// Millisecond latency histogram with 3 significant digits.
#[derive(Debug)]
pub struct LatencyHistogram {
    hist: Histogram<u64>,
}

impl LatencyHistogram {
    /// Create a new latency histogram.
    ///
    /// # Errors
    ///
    /// Returns an error if the histogram cannot be created.
    pub fn new() -> Result<Self, SinkError> {
        let hist = Histogram::<u64>::new(3)
            .map_err(|err| SinkError::CreateHistogram { source: err })?;
        Ok(Self { hist })
    }

    /// Record a latency value in milliseconds. Zero is recorded as 1ms.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be recorded.
    pub fn record(&mut self, latency_ms: u64) -> Result<(), SinkError> {
        let value = latency_ms.max(1);
        self.hist
            .record(value)
            .map_err(|err| SinkError::RecordLatency { source: err })
    }

    #[must_use]
    pub fn percentiles(&self) -> (u64, u64, u64) {
        if self.count() == 0 {
            return (0, 0, 0);
        }

        (
            self.hist.value_at_quantile(0.5),
            self.hist.value_at_quantile(0.9),
            self.hist.value_at_quantile(0.99),
        )
    }

    #[must_use]
    pub fn count(&self) -> u64 {
        self.hist.len()
    }

    pub fn reset(&mut self) {
        self.hist.reset();
    }
}

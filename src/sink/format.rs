use crate::http::RequestResult;

use super::summary::StepTally;

#[must_use]
pub fn format_result_line(result: &RequestResult) -> String {
    format!(
        "request: {}: Time taken: {:.3} status: {}",
        result.url,
        result.elapsed.as_secs_f64(),
        result.outcome
    )
}

#[must_use]
pub fn format_summary_line(label: &str, tally: &StepTally) -> String {
    let (p50, p90, p99) = tally.latency.percentiles();
    format!(
        "summary: {}: total: {} pass: {} fail: {} timeouts: {} transport errors: {} p50: {}ms p90: {}ms p99: {}ms",
        label,
        tally.total,
        tally.passed,
        tally.failed,
        tally.timeouts,
        tally.transport_errors,
        p50,
        p90,
        p99
    )
}

use std::sync::Arc;
use std::time::Instant;

use futures_util::StreamExt;
use reqwest::Client;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::debug;
use url::Url;

use crate::{
    args::{HttpMethod, PositiveUsize},
    error::{AppError, AppResult, HttpError},
    sink::ResultSink,
};

use super::request::{RequestOutcome, RequestResult, RequestSpec};

/// Issues requests concurrently, bounded by an in-flight limit, and forwards
/// every result to the output sink.
#[derive(Debug, Clone)]
pub struct LoadDriver {
    client: Client,
    in_flight: Arc<Semaphore>,
    sink: ResultSink,
}

impl LoadDriver {
    #[must_use]
    pub fn new(client: Client, max_in_flight: PositiveUsize, sink: ResultSink) -> Self {
        Self {
            client,
            in_flight: Arc::new(Semaphore::new(
                max_in_flight.get().min(Semaphore::MAX_PERMITS),
            )),
            sink,
        }
    }

    #[must_use]
    pub const fn sink(&self) -> &ResultSink {
        &self.sink
    }

    /// Issues `count` concurrent requests to `url` and waits for all of them.
    ///
    /// # Errors
    ///
    /// Returns an error when a request task panics or the sink has shut down.
    pub async fn fan_out(&self, count: usize, method: HttpMethod, url: &Url) -> AppResult<usize> {
        let spec = RequestSpec::new(method, url.clone());
        self.dispatch(std::iter::repeat_n(spec, count)).await
    }

    /// Issues every request concurrently and waits for all of them. Returns the
    /// number of requests issued. Finished tasks are reaped while the batch is
    /// still being spawned. Dropping the future aborts whatever is in flight.
    ///
    /// # Errors
    ///
    /// Returns an error when a request task panics or the sink has shut down.
    pub async fn dispatch<I>(&self, specs: I) -> AppResult<usize>
    where
        I: IntoIterator<Item = RequestSpec>,
    {
        let mut tasks = JoinSet::new();
        let mut issued: usize = 0;

        for spec in specs {
            let permit = Arc::clone(&self.in_flight)
                .acquire_owned()
                .await
                .map_err(|err| AppError::http(HttpError::InFlightLimiterClosed { source: err }))?;
            let client = self.client.clone();
            let sink = self.sink.clone();
            tasks.spawn(async move {
                let result = issue(&client, &spec).await;
                drop(permit);
                sink.record(result).await
            });
            issued = issued.saturating_add(1);

            while let Some(joined) = tasks.try_join_next() {
                joined??;
            }
        }

        while let Some(joined) = tasks.join_next().await {
            joined??;
        }
        Ok(issued)
    }
}

/// Performs one call and classifies it. Transport failures, including
/// timeouts and body read errors, are reported as `Fail` and never returned.
pub async fn issue(client: &Client, spec: &RequestSpec) -> RequestResult {
    let started = Instant::now();
    let sent = client
        .request(spec.method.into(), spec.url.clone())
        .send()
        .await;

    let (status, failure) = match sent {
        Ok(response) => {
            let status = response.status().as_u16();
            match drain_response_body(response).await {
                Ok(_) => (Some(status), None),
                Err(err) => (Some(status), Some(err)),
            }
        }
        Err(err) => (None, Some(err)),
    };
    let elapsed = started.elapsed();

    let (outcome, timed_out, transport_error) = match failure {
        None => (
            status.map_or(RequestOutcome::Fail, RequestOutcome::from_status),
            false,
            false,
        ),
        Some(err) => {
            debug!("{} {} failed: {}", spec.method.as_str(), spec.url, err);
            let timed_out = err.is_timeout();
            (RequestOutcome::Fail, timed_out, !timed_out)
        }
    };

    RequestResult {
        method: spec.method,
        url: spec.url.clone(),
        elapsed,
        outcome,
        status,
        timed_out,
        transport_error,
    }
}

async fn drain_response_body(response: reqwest::Response) -> Result<u64, reqwest::Error> {
    let mut stream = response.bytes_stream();
    let mut total_bytes: u64 = 0;
    while let Some(chunk) = stream.next().await {
        let bytes = chunk?;
        total_bytes = total_bytes.saturating_add(u64::try_from(bytes.len()).unwrap_or(u64::MAX));
    }
    Ok(total_bytes)
}

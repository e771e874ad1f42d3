use super::*;
use crate::args::{HttpMethod, PositiveUsize, StressArgs};
use crate::sink::spawn_writer;
use crate::test_support::{
    Reply, SharedBuffer, run_async_test, spawn_test_server, unreachable_base_url,
};
use clap::Parser;
use url::Url;

fn test_client(timeout: &str) -> Result<reqwest::Client, String> {
    let args = StressArgs::try_parse_from(["leitner-stress", "--timeout", timeout])
        .map_err(|err| format!("args: {}", err))?;
    build_client(&args).map_err(|err| err.to_string())
}

/// Yields `remaining` copies of a spec while claiming to hold `usize::MAX`.
struct OverstatedSpecs {
    spec: RequestSpec,
    remaining: usize,
}

impl Iterator for OverstatedSpecs {
    type Item = RequestSpec;

    fn next(&mut self) -> Option<RequestSpec> {
        self.remaining = self.remaining.checked_sub(1)?;
        Some(self.spec.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

fn join(base: &Url, path: &str) -> Result<Url, String> {
    base.join(path).map_err(|err| format!("join: {}", err))
}

#[test]
fn outcome_passes_only_on_200() -> Result<(), String> {
    for (status, expected) in [
        (200, RequestOutcome::Pass),
        (201, RequestOutcome::Fail),
        (204, RequestOutcome::Fail),
        (404, RequestOutcome::Fail),
        (503, RequestOutcome::Fail),
    ] {
        if RequestOutcome::from_status(status) != expected {
            return Err(format!("Unexpected outcome for {}", status));
        }
    }
    if RequestOutcome::Pass.to_string() != "PASS" || RequestOutcome::Fail.to_string() != "FAIL" {
        return Err("Unexpected outcome labels".to_owned());
    }
    Ok(())
}

#[test]
fn issue_classifies_ok_response_as_pass() -> Result<(), String> {
    run_async_test(async {
        let server = spawn_test_server(Reply::Status(200))?;
        let url = join(&server.base_url()?, "/leaderboard")?;
        let client = test_client("5s")?;

        let result = issue(&client, &RequestSpec::new(HttpMethod::Get, url.clone())).await;

        if !result.passed() || result.status != Some(200) {
            return Err(format!("Expected PASS, got {:?}", result));
        }
        if result.url != url || result.timed_out || result.transport_error {
            return Err(format!("Unexpected result fields {:?}", result));
        }
        if server.requests() != vec!["GET /leaderboard".to_owned()] {
            return Err(format!("Unexpected requests {:?}", server.requests()));
        }
        Ok(())
    })
}

#[test]
fn issue_classifies_error_status_as_fail() -> Result<(), String> {
    run_async_test(async {
        let server = spawn_test_server(Reply::Status(503))?;
        let url = join(&server.base_url()?, "/username/kiwi/wordId/3/result/true")?;
        let client = test_client("5s")?;

        let result = issue(&client, &RequestSpec::new(HttpMethod::Put, url)).await;

        if result.passed() || result.status != Some(503) || result.transport_error {
            return Err(format!("Expected status FAIL, got {:?}", result));
        }
        if server.requests() != vec!["PUT /username/kiwi/wordId/3/result/true".to_owned()] {
            return Err(format!("Unexpected requests {:?}", server.requests()));
        }
        Ok(())
    })
}

#[test]
fn issue_maps_connection_refused_to_fail() -> Result<(), String> {
    run_async_test(async {
        let url = join(&unreachable_base_url()?, "/leaderboard")?;
        let client = test_client("5s")?;

        let result = issue(&client, &RequestSpec::new(HttpMethod::Get, url)).await;

        if result.passed() || result.status.is_some() || !result.transport_error {
            return Err(format!("Expected transport FAIL, got {:?}", result));
        }
        Ok(())
    })
}

#[test]
fn issue_times_out_against_silent_server() -> Result<(), String> {
    run_async_test(async {
        let server = spawn_test_server(Reply::Hang(std::time::Duration::from_secs(3)))?;
        let url = join(&server.base_url()?, "/leaderboard")?;
        let client = test_client("200ms")?;

        let result = issue(&client, &RequestSpec::new(HttpMethod::Get, url)).await;

        if result.passed() || !result.timed_out || result.transport_error {
            return Err(format!("Expected timeout FAIL, got {:?}", result));
        }
        if result.elapsed >= std::time::Duration::from_secs(3) {
            return Err(format!("Timeout not enforced: {:?}", result.elapsed));
        }
        Ok(())
    })
}

#[test]
fn fan_out_issues_exactly_n_requests_and_lines() -> Result<(), String> {
    run_async_test(async {
        let server = spawn_test_server(Reply::Status(200))?;
        let url = join(&server.base_url()?, "/leaderboard")?;
        let buffer = SharedBuffer::default();
        let (sink, writer) = spawn_writer(buffer.clone(), false);
        let max_in_flight = PositiveUsize::try_from(4).map_err(|err| err.to_string())?;
        let driver = LoadDriver::new(test_client("5s")?, max_in_flight, sink);

        let issued = driver
            .fan_out(25, HttpMethod::Get, &url)
            .await
            .map_err(|err| err.to_string())?;
        drop(driver);
        let report = writer
            .await
            .map_err(|err| err.to_string())?
            .map_err(|err| err.to_string())?;

        if issued != 25 || report.lines_written != 25 || report.passed != 25 {
            return Err(format!("Unexpected counts {} {:?}", issued, report));
        }
        if server.requests().len() != 25 {
            return Err(format!("Server saw {} requests", server.requests().len()));
        }
        let prefix = format!("request: {}: Time taken: ", url);
        for line in buffer.lines() {
            if !line.starts_with(&prefix) || !line.ends_with(" status: PASS") {
                return Err(format!("Malformed line: {}", line));
            }
        }
        Ok(())
    })
}

#[test]
fn fan_out_of_zero_issues_nothing() -> Result<(), String> {
    run_async_test(async {
        let url = join(&unreachable_base_url()?, "/leaderboard")?;
        let buffer = SharedBuffer::default();
        let (sink, writer) = spawn_writer(buffer.clone(), false);
        let max_in_flight = PositiveUsize::try_from(1).map_err(|err| err.to_string())?;
        let driver = LoadDriver::new(test_client("5s")?, max_in_flight, sink);

        let issued = driver
            .fan_out(0, HttpMethod::Get, &url)
            .await
            .map_err(|err| err.to_string())?;
        drop(driver);
        let report = writer
            .await
            .map_err(|err| err.to_string())?
            .map_err(|err| err.to_string())?;

        if issued != 0 || report.lines_written != 0 || !buffer.lines().is_empty() {
            return Err(format!("Expected nothing, got {} {:?}", issued, report));
        }
        Ok(())
    })
}

#[test]
fn dispatch_reports_every_failure_from_unavailable_server() -> Result<(), String> {
    run_async_test(async {
        let server = spawn_test_server(Reply::Status(503))?;
        let base = server.base_url()?;
        let specs = vec![
            RequestSpec::new(HttpMethod::Get, join(&base, "/dashboard/globaleasywords")?),
            RequestSpec::new(HttpMethod::Put, join(&base, "/username/lime/wordId/4/result/false")?),
            RequestSpec::new(HttpMethod::Get, join(&base, "/leaderboard")?),
        ];
        let buffer = SharedBuffer::default();
        let (sink, writer) = spawn_writer(buffer.clone(), false);
        let max_in_flight = PositiveUsize::try_from(8).map_err(|err| err.to_string())?;
        let driver = LoadDriver::new(test_client("5s")?, max_in_flight, sink);

        let issued = driver.dispatch(specs).await.map_err(|err| err.to_string())?;
        drop(driver);
        let report = writer
            .await
            .map_err(|err| err.to_string())?
            .map_err(|err| err.to_string())?;

        if issued != 3 || report.failed != 3 || report.passed != 0 {
            return Err(format!("Unexpected report {:?}", report));
        }
        if !buffer.lines().iter().all(|line| line.ends_with("status: FAIL")) {
            return Err(format!("Expected FAIL lines: {:?}", buffer.lines()));
        }
        Ok(())
    })
}

#[test]
fn dispatch_does_not_reserve_from_size_hint() -> Result<(), String> {
    run_async_test(async {
        let server = spawn_test_server(Reply::Status(200))?;
        let url = join(&server.base_url()?, "/leaderboard")?;
        let buffer = SharedBuffer::default();
        let (sink, writer) = spawn_writer(buffer.clone(), false);
        let max_in_flight = PositiveUsize::try_from(2).map_err(|err| err.to_string())?;
        let driver = LoadDriver::new(test_client("5s")?, max_in_flight, sink);

        let specs = OverstatedSpecs {
            spec: RequestSpec::new(HttpMethod::Get, url),
            remaining: 12,
        };
        let issued = driver.dispatch(specs).await.map_err(|err| err.to_string())?;
        drop(driver);
        let report = writer
            .await
            .map_err(|err| err.to_string())?
            .map_err(|err| err.to_string())?;

        if issued != 12 || report.passed != 12 || server.requests().len() != 12 {
            return Err(format!("Unexpected run {} {:?}", issued, report));
        }
        Ok(())
    })
}

#[test]
fn driver_clamps_in_flight_bound_to_limiter_capacity() -> Result<(), String> {
    run_async_test(async {
        let server = spawn_test_server(Reply::Status(200))?;
        let url = join(&server.base_url()?, "/leaderboard")?;
        let buffer = SharedBuffer::default();
        let (sink, writer) = spawn_writer(buffer.clone(), false);
        let max_in_flight = PositiveUsize::try_from(usize::MAX).map_err(|err| err.to_string())?;
        let driver = LoadDriver::new(test_client("5s")?, max_in_flight, sink);

        let issued = driver
            .fan_out(3, HttpMethod::Get, &url)
            .await
            .map_err(|err| err.to_string())?;
        drop(driver);
        let report = writer
            .await
            .map_err(|err| err.to_string())?
            .map_err(|err| err.to_string())?;

        if issued != 3 || report.passed != 3 {
            return Err(format!("Unexpected run {} {:?}", issued, report));
        }
        Ok(())
    })
}

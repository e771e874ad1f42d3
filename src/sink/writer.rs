use std::io::Write;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::error::SinkError;
use crate::http::RequestResult;

use super::format::{format_result_line, format_summary_line};
use super::summary::StepTally;

/// Buffered events between request tasks and the writer.
pub const SINK_CHANNEL_CAPACITY: usize = 1024;

#[derive(Debug)]
pub enum SinkEvent {
    Result(RequestResult),
    /// Every result of the named step has already been sent.
    StepFinished(String),
}

/// Totals across the whole run, returned once the writer drains.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SinkReport {
    pub lines_written: u64,
    pub passed: u64,
    pub failed: u64,
}

/// Cloneable handle request tasks use to hand results to the writer.
#[derive(Debug, Clone)]
pub struct ResultSink {
    tx: mpsc::Sender<SinkEvent>,
}

impl ResultSink {
    /// # Errors
    ///
    /// Returns an error if the writer has stopped.
    pub async fn record(&self, result: RequestResult) -> Result<(), SinkError> {
        self.send(SinkEvent::Result(result)).await
    }

    /// # Errors
    ///
    /// Returns an error if the writer has stopped.
    pub async fn step_finished(&self, label: impl Into<String>) -> Result<(), SinkError> {
        self.send(SinkEvent::StepFinished(label.into())).await
    }

    async fn send(&self, event: SinkEvent) -> Result<(), SinkError> {
        self.tx
            .send(event)
            .await
            .map_err(|_closed| SinkError::ChannelClosed)
    }
}

/// Starts the dedicated writer thread. It exits once every `ResultSink` clone
/// is dropped and the channel is drained.
pub fn spawn_writer<W>(
    writer: W,
    summary: bool,
) -> (ResultSink, JoinHandle<Result<SinkReport, SinkError>>)
where
    W: Write + Send + 'static,
{
    let (tx, rx) = mpsc::channel(SINK_CHANNEL_CAPACITY);
    let handle = tokio::task::spawn_blocking(move || write_events(rx, writer, summary));
    (ResultSink { tx }, handle)
}

fn write_events<W>(
    mut rx: mpsc::Receiver<SinkEvent>,
    mut writer: W,
    summary: bool,
) -> Result<SinkReport, SinkError>
where
    W: Write,
{
    let mut report = SinkReport::default();
    let mut tally = if summary { Some(StepTally::new()?) } else { None };

    while let Some(event) = rx.blocking_recv() {
        match event {
            SinkEvent::Result(result) => {
                write_line(&mut writer, &format_result_line(&result))?;
                report.lines_written = report.lines_written.saturating_add(1);
                if result.passed() {
                    report.passed = report.passed.saturating_add(1);
                } else {
                    report.failed = report.failed.saturating_add(1);
                }
                if let Some(tally) = tally.as_mut() {
                    tally.record(&result)?;
                }
            }
            SinkEvent::StepFinished(label) => {
                if let Some(tally) = tally.as_mut() {
                    write_line(&mut writer, &format_summary_line(&label, tally))?;
                    tally.reset();
                }
            }
        }
    }

    Ok(report)
}

fn write_line<W>(writer: &mut W, line: &str) -> Result<(), SinkError>
where
    W: Write,
{
    writeln!(writer, "{}", line)
        .and_then(|()| writer.flush())
        .map_err(|err| SinkError::WriteLine { source: err })
}

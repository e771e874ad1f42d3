//! Result output: a single writer fed over a channel so lines never interleave.
mod format;
mod histogram;
mod summary;
mod writer;


pub use format::{format_result_line, format_summary_line};
pub use histogram::LatencyHistogram;
pub use summary::StepTally;
pub use writer::{ResultSink, SINK_CHANNEL_CAPACITY, SinkEvent, SinkReport, spawn_writer};

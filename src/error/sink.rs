use thiserror::Error;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("Failed to write result line: {source}")]
    WriteLine {
        #[source]
        source: std::io::Error,
    },
    #[error("Output sink closed before all results were delivered.")]
    ChannelClosed,
    #[error("Failed to record latency: {source}")]
    RecordLatency {
        #[source]
        source: hdrhistogram::RecordError,
    },
    #[error("Failed to create latency histogram: {source}")]
    CreateHistogram {
        #[source]
        source: hdrhistogram::CreationError,
    },
}

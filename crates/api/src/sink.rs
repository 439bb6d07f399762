use thiserror::Error;

/// A write the Output Sink refused or failed. Reported per file, never
/// retried.
#[derive(Debug, Error)]
#[error("failed to write {path}: {reason}")]
pub struct SinkError {
    pub path: String,
    pub reason: String,
}

impl SinkError {
    pub fn new(path: impl Into<String>, reason: impl Into<String>) -> Self {
        SinkError {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Output Sink: persists rendered config artifacts under a destination
/// namespace. Writes are expected to be idempotent and last-write-wins.
pub trait ConfigSink {
    fn write(&mut self, path: &str, contents: &str) -> Result<(), SinkError>;
}

//! Error types for the CSV sink.

use thiserror::Error;

/// Errors that can occur while writing a CSV extract. All are fatal; the
/// run is restarted from scratch rather than retried.
#[derive(Error, Debug)]
pub enum SinkError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

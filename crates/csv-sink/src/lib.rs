//! CSV implementation of the visit-synth record sink.
//!
//! `CsvSink` writes the canonical header once at creation, appends each
//! batch of records as CSV rows, and reports write metrics on finish.

mod error;
mod sink;

pub use error::SinkError;
pub use sink::{csv_header, record_to_fields, CsvSink, WriteMetrics, DEFAULT_BUFFER_SIZE};

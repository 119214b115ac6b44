//! The record-sink seam between generation and output.

use crate::records::VisitRecord;
use anyhow::Result;

/// Destination for generated visit records.
///
/// Implementations write any header at construction time, so `append` only
/// ever sees data rows. The assembler calls `append` once per chunk, in
/// order; the owner calls `finish` exactly once after the last chunk to
/// flush and finalize the output.
pub trait RecordSink {
    /// Write one batch of fully formed rows.
    fn append(&mut self, batch: &[VisitRecord]) -> Result<()>;

    /// Flush buffered output and finalize.
    fn finish(&mut self) -> Result<()>;
}

//! Test support shared by the generator and sink crates.

use crate::records::VisitRecord;
use crate::sink::RecordSink;
use anyhow::Result;

/// In-memory sink that captures appended batches as-is, preserving chunk
/// boundaries for assertions.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub batches: Vec<Vec<VisitRecord>>,
    pub finished: bool,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All captured rows, flattened across batches in append order.
    pub fn rows(&self) -> impl Iterator<Item = &VisitRecord> {
        self.batches.iter().flatten()
    }

    pub fn row_count(&self) -> usize {
        self.batches.iter().map(|b| b.len()).sum()
    }
}

impl RecordSink for MemorySink {
    fn append(&mut self, batch: &[VisitRecord]) -> Result<()> {
        self.batches.push(batch.to_vec());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.finished = true;
        Ok(())
    }
}

//! Dataset assembler.
//!
//! Drives a full extract: builds the pools, picks the exact set of
//! repeat-visit positions, composes rows in index order and forwards them
//! to the sink in bounded chunks.

use crate::composer::VisitComposer;
use crate::pools::{patient, ReferencePools};
use crate::rng::rng_from_seed;
use anyhow::Result;
use chrono::{Local, NaiveDate};
use rand::seq::SliceRandom;
use std::collections::HashSet;
use synth_core::{ConfigError, RecordSink, SynthConfig};
use tracing::{debug, info};

/// Counts reported by a completed generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateSummary {
    pub rows_written: u64,
    pub repeat_rows: u64,
    pub chunks_flushed: u64,
}

/// Orchestrates extract generation for one validated configuration.
///
/// Each `generate_*` call is an independent deterministic run: it creates
/// a fresh random stream from the configured seed, rebuilds the pools, and
/// iterates visit indices in order. Re-running with the same seed and
/// configuration reproduces identical records.
pub struct DatasetAssembler {
    config: SynthConfig,
}

impl DatasetAssembler {
    /// Validate the configuration (including catalog bounds) and build an
    /// assembler. All configuration errors surface here, before any
    /// generation begins.
    pub fn new(config: SynthConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        ReferencePools::check_sizes(&config.pools)?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SynthConfig {
        &self.config
    }

    fn window_end(&self) -> NaiveDate {
        self.config
            .visit_window_end
            .unwrap_or_else(|| Local::now().date_naive())
    }

    /// Generate the bulk extract.
    ///
    /// Exactly `max(1, round(total_rows * repeat_rate))` visit indices,
    /// drawn without replacement from `[1, total_rows]`, reuse a repeat
    /// identity chosen uniformly from the repeat pool. Rows are flushed to
    /// the sink in chunks of at most `chunk_size`; each flushed chunk is a
    /// complete set of fully formed rows.
    pub fn generate_bulk<S: RecordSink>(&self, sink: &mut S) -> Result<GenerateSummary> {
        let total_rows = self.config.total_rows;
        let chunk_size = self.config.chunk_size;

        let mut rng = rng_from_seed(self.config.seed);
        let pools = ReferencePools::generate(&mut rng, &self.config.pools);
        let repeat_pool =
            patient::generate_repeat_pool(&mut rng, total_rows, self.config.repeat_rate);

        // Exact-count selection: a uniform subset of positions, not a
        // per-row probability check
        let repeat_positions: HashSet<u64> =
            rand::seq::index::sample(&mut rng, total_rows as usize, repeat_pool.len())
                .iter()
                .map(|i| i as u64 + 1)
                .collect();

        info!(
            "Generating bulk extract: {} rows, {} repeat positions, chunk size {}",
            total_rows,
            repeat_positions.len(),
            chunk_size
        );

        let composer = VisitComposer::new(&pools, self.window_end(), self.config.visit_window_days);
        let mut summary = GenerateSummary::default();
        let mut buffer = Vec::with_capacity(chunk_size);

        for visit_index in 1..=total_rows {
            let repeat_identity = if repeat_positions.contains(&visit_index) {
                summary.repeat_rows += 1;
                repeat_pool.choose(&mut rng)
            } else {
                None
            };

            buffer.push(composer.compose(&mut rng, visit_index, repeat_identity));
            summary.rows_written += 1;

            if buffer.len() == chunk_size {
                sink.append(&buffer)?;
                buffer.clear();
                summary.chunks_flushed += 1;
                debug!("Flushed chunk {} ({} rows so far)", summary.chunks_flushed, summary.rows_written);
            }
        }

        if !buffer.is_empty() {
            sink.append(&buffer)?;
            summary.chunks_flushed += 1;
        }

        Ok(summary)
    }

    /// Generate the sample extract as a single in-memory batch.
    ///
    /// The sample uses a simplified repeat rule: every 5th row reuses a
    /// repeat identity, cycling through a pool sized by the same formula
    /// applied to `sample_rows`.
    pub fn generate_sample<S: RecordSink>(&self, sink: &mut S) -> Result<GenerateSummary> {
        let sample_rows = self.config.sample_rows;

        let mut rng = rng_from_seed(self.config.seed);
        let pools = ReferencePools::generate(&mut rng, &self.config.pools);
        let repeat_pool =
            patient::generate_repeat_pool(&mut rng, sample_rows, self.config.repeat_rate);

        info!(
            "Generating sample extract: {} rows with {} repeat identities",
            sample_rows,
            repeat_pool.len()
        );

        let composer = VisitComposer::new(&pools, self.window_end(), self.config.visit_window_days);
        let mut summary = GenerateSummary::default();
        let mut batch = Vec::with_capacity(sample_rows as usize);

        for visit_index in 1..=sample_rows {
            let repeat_identity = if visit_index % 5 == 0 {
                summary.repeat_rows += 1;
                let slot = (visit_index / 5 - 1) as usize % repeat_pool.len();
                Some(&repeat_pool[slot])
            } else {
                None
            };

            batch.push(composer.compose(&mut rng, visit_index, repeat_identity));
            summary.rows_written += 1;
        }

        sink.append(&batch)?;
        summary.chunks_flushed = 1;

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pools::patient::is_repeat_id;
    use synth_core::testing::MemorySink;

    fn test_config(total_rows: u64, repeat_rate: f64, chunk_size: usize) -> SynthConfig {
        SynthConfig {
            seed: 42,
            total_rows,
            repeat_rate,
            chunk_size,
            visit_window_end: NaiveDate::from_ymd_opt(2025, 6, 30),
            ..Default::default()
        }
    }

    #[test]
    fn test_bulk_exact_repeat_count() {
        let assembler = DatasetAssembler::new(test_config(10, 0.3, 4)).unwrap();
        let mut sink = MemorySink::new();
        let summary = assembler.generate_bulk(&mut sink).unwrap();

        assert_eq!(summary.rows_written, 10);
        assert_eq!(summary.repeat_rows, 3);

        let repeat_rows: Vec<_> = sink.rows().filter(|r| is_repeat_id(&r.patient.id)).collect();
        assert_eq!(repeat_rows.len(), 3);

        // Repeat ids must come from a pool of exactly 3 identities
        let mut ids: Vec<&str> = repeat_rows.iter().map(|r| r.patient.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert!(ids.len() <= 3);
        assert!(ids.iter().all(|id| ["PT-R00001", "PT-R00002", "PT-R00003"].contains(id)));
    }

    #[test]
    fn test_bulk_chunking_bounds_and_order() {
        let assembler = DatasetAssembler::new(test_config(25, 0.1, 10)).unwrap();
        let mut sink = MemorySink::new();
        let summary = assembler.generate_bulk(&mut sink).unwrap();

        assert_eq!(summary.rows_written, 25);
        assert_eq!(summary.chunks_flushed, 3);
        let sizes: Vec<usize> = sink.batches.iter().map(|b| b.len()).collect();
        assert_eq!(sizes, [10, 10, 5]);

        let ids: Vec<String> = sink.rows().map(|r| r.visit_id.clone()).collect();
        let expected: Vec<String> = (1..=25u64).map(|i| format!("VIS-{i:07}")).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_bulk_is_deterministic() {
        let config = test_config(40, 0.25, 7);

        let mut sink1 = MemorySink::new();
        DatasetAssembler::new(config.clone())
            .unwrap()
            .generate_bulk(&mut sink1)
            .unwrap();
        let mut sink2 = MemorySink::new();
        DatasetAssembler::new(config)
            .unwrap()
            .generate_bulk(&mut sink2)
            .unwrap();

        assert_eq!(sink1.batches, sink2.batches);
    }

    #[test]
    fn test_sample_every_fifth_row_repeats() {
        let assembler = DatasetAssembler::new(test_config(100, 0.2, 10)).unwrap();
        let mut sink = MemorySink::new();
        let summary = assembler.generate_sample(&mut sink).unwrap();

        // Default sample_rows = 10, emitted as one batch
        assert_eq!(summary.rows_written, 10);
        assert_eq!(sink.batches.len(), 1);

        for (i, row) in sink.rows().enumerate() {
            let index = i as u64 + 1;
            if index % 5 == 0 {
                assert!(is_repeat_id(&row.patient.id), "row {index} should repeat");
            } else {
                assert_eq!(row.patient.id, format!("PT-E{index:07}"));
            }
        }
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = SynthConfig {
            repeat_rate: 0.0,
            ..Default::default()
        };
        assert!(DatasetAssembler::new(config).is_err());

        let config = SynthConfig {
            pools: synth_core::PoolSizes {
                diagnoses: 99,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(
            DatasetAssembler::new(config),
            Err(ConfigError::CatalogExceeded { .. })
        ));
    }
}

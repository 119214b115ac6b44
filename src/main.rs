//! Command-line interface for visit-synth
//!
//! # Usage Examples
//!
//! ```bash
//! # Small sample extract with defaults (10 rows, seed 42)
//! visit-synth sample
//!
//! # Bulk extract: 100k rows in 5k-row chunks, pinned window end
//! visit-synth bulk \
//!   --rows 100000 \
//!   --chunk-size 5000 \
//!   --repeat-rate 0.15 \
//!   --window-end 2025-06-30 \
//!   --output hospital_visits.csv
//!
//! # Defaults from a YAML file, seed overridden on the command line
//! visit-synth bulk --config synth.yaml --seed 7
//! ```

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use csv_sink::CsvSink;
use std::path::PathBuf;
use synth_core::{RecordSink, SynthConfig};
use synth_generator::{DatasetAssembler, GenerateSummary};
use tracing::info;

#[derive(Parser)]
#[command(name = "visit-synth")]
#[command(about = "A tool for synthesizing denormalized hospital-visit CSV datasets")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the small sample extract as a single batch
    Sample {
        #[command(flatten)]
        args: GenerateArgs,
    },

    /// Generate the bulk extract, flushed in fixed-size chunks
    Bulk {
        #[command(flatten)]
        args: GenerateArgs,
    },
}

/// Flags shared by both subcommands. Unset flags fall back to the config
/// file (if given), then to built-in defaults.
#[derive(Args, Clone, Debug)]
struct GenerateArgs {
    /// YAML config file providing defaults for any unset flag
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Seed for the deterministic random stream
    #[arg(long, env = "VISIT_SYNTH_SEED")]
    seed: Option<u64>,

    /// Number of data rows to generate
    #[arg(long)]
    rows: Option<u64>,

    /// Rows per flushed batch (bulk extract only)
    #[arg(long)]
    chunk_size: Option<usize>,

    /// Fraction of rows reusing a repeat-pool patient identity
    #[arg(long)]
    repeat_rate: Option<f64>,

    /// Output CSV path
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// Hospital pool size
    #[arg(long)]
    hospitals: Option<usize>,

    /// Department pool size
    #[arg(long)]
    departments: Option<usize>,

    /// Diagnosis pool size
    #[arg(long)]
    diagnoses: Option<usize>,

    /// Doctor pool size
    #[arg(long)]
    doctors: Option<usize>,

    /// Insurer pool size
    #[arg(long)]
    insurers: Option<usize>,

    /// Length of the visit-date window, in days
    #[arg(long)]
    window_days: Option<u32>,

    /// Last day of the visit-date window (YYYY-MM-DD); defaults to today
    #[arg(long)]
    window_end: Option<NaiveDate>,
}

impl GenerateArgs {
    /// Layer configuration: defaults, then the config file, then explicit
    /// flags.
    fn resolve(&self) -> anyhow::Result<SynthConfig> {
        let mut config = match &self.config {
            Some(path) => SynthConfig::from_file(path)
                .with_context(|| format!("Failed to load config from {path:?}"))?,
            None => SynthConfig::default(),
        };

        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(chunk_size) = self.chunk_size {
            config.chunk_size = chunk_size;
        }
        if let Some(repeat_rate) = self.repeat_rate {
            config.repeat_rate = repeat_rate;
        }
        if let Some(hospitals) = self.hospitals {
            config.pools.hospitals = hospitals;
        }
        if let Some(departments) = self.departments {
            config.pools.departments = departments;
        }
        if let Some(diagnoses) = self.diagnoses {
            config.pools.diagnoses = diagnoses;
        }
        if let Some(doctors) = self.doctors {
            config.pools.doctors = doctors;
        }
        if let Some(insurers) = self.insurers {
            config.pools.insurers = insurers;
        }
        if let Some(window_days) = self.window_days {
            config.visit_window_days = window_days;
        }
        if let Some(window_end) = self.window_end {
            config.visit_window_end = Some(window_end);
        }

        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Sample { args } => {
            let mut config = args.resolve()?;
            if let Some(rows) = args.rows {
                config.sample_rows = rows;
            }
            if let Some(output) = args.output {
                config.sample_output = output;
            }

            let output = config.sample_output.clone();
            let assembler = DatasetAssembler::new(config).context("Invalid configuration")?;
            let summary = run_extract(&assembler, &output, |assembler, sink| {
                assembler.generate_sample(sink)
            })?;
            info!("Sample extract complete: {} rows", summary.rows_written);
        }
        Commands::Bulk { args } => {
            let mut config = args.resolve()?;
            if let Some(rows) = args.rows {
                config.total_rows = rows;
            }
            if let Some(output) = args.output {
                config.bulk_output = output;
            }

            let output = config.bulk_output.clone();
            let assembler = DatasetAssembler::new(config).context("Invalid configuration")?;
            let summary = run_extract(&assembler, &output, |assembler, sink| {
                assembler.generate_bulk(sink)
            })?;
            info!(
                "Bulk extract complete: {} rows ({} repeat) in {} chunks",
                summary.rows_written, summary.repeat_rows, summary.chunks_flushed
            );
        }
    }

    Ok(())
}

/// Open the sink, drive one extract through it, then finish and log write
/// metrics.
fn run_extract<F>(
    assembler: &DatasetAssembler,
    output: &std::path::Path,
    generate: F,
) -> anyhow::Result<GenerateSummary>
where
    F: FnOnce(&DatasetAssembler, &mut CsvSink) -> anyhow::Result<GenerateSummary>,
{
    let mut sink = CsvSink::create(output)
        .with_context(|| format!("Failed to create output file {}", output.display()))?;

    let summary = generate(assembler, &mut sink)?;
    sink.finish()
        .with_context(|| format!("Failed to finalize {}", output.display()))?;

    if let Some(metrics) = sink.metrics() {
        info!(
            "Wrote {}: {} rows, {} bytes in {:?} ({:.2} rows/sec)",
            output.display(),
            metrics.rows_written,
            metrics.file_size_bytes,
            metrics.elapsed,
            metrics.rows_per_second()
        );
    }

    Ok(summary)
}

//! Configuration for dataset generation.
//!
//! All knobs have defaults and can be overridden from a YAML file and/or
//! CLI flags. `validate` runs before any generation begins; configuration
//! errors are fatal.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Error type for configuration loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A row count was zero.
    #[error("Invalid {name}: must be at least 1, got {value}")]
    InvalidRowCount { name: &'static str, value: u64 },

    /// Chunk size was zero.
    #[error("Invalid chunk size: must be at least 1, got {0}")]
    InvalidChunkSize(usize),

    /// Repeat rate outside (0.0, 1.0].
    #[error("Invalid repeat rate: must be in (0.0, 1.0], got {0}")]
    InvalidRepeatRate(f64),

    /// A pool cardinality was zero.
    #[error("Invalid {pool} pool size: must be at least 1, got {value}")]
    InvalidPoolSize { pool: &'static str, value: usize },

    /// A positional pool was configured larger than its catalog.
    #[error("{pool} pool size {requested} exceeds catalog of {available} entries")]
    CatalogExceeded {
        pool: &'static str,
        requested: usize,
        available: usize,
    },

    /// Visit window shorter than one day.
    #[error("Invalid visit window: must span at least 1 day, got {0}")]
    InvalidWindow(u32),

    /// Error reading a config file.
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing YAML.
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Cardinalities of the reference pools. Shifts are pinned at 3 and are
/// not configurable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolSizes {
    pub hospitals: usize,
    pub departments: usize,
    pub diagnoses: usize,
    pub doctors: usize,
    pub insurers: usize,
}

impl Default for PoolSizes {
    fn default() -> Self {
        Self {
            hospitals: 30,
            departments: 10,
            diagnoses: 10,
            doctors: 100,
            insurers: 20,
        }
    }
}

/// Full configuration surface for a generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthConfig {
    /// Seed for the single deterministic random stream.
    pub seed: u64,
    /// Row count for the sample extract.
    pub sample_rows: u64,
    /// Row count for the bulk extract.
    pub total_rows: u64,
    /// Rows per flushed batch in the bulk extract.
    pub chunk_size: usize,
    /// Fraction of bulk rows that reuse a repeat-pool patient identity.
    pub repeat_rate: f64,
    pub sample_output: PathBuf,
    pub bulk_output: PathBuf,
    pub pools: PoolSizes,
    /// Length of the visit-date sampling window, in days.
    pub visit_window_days: u32,
    /// Last day of the visit-date window. `None` means today; pin a date
    /// to make runs byte-identical across days.
    pub visit_window_end: Option<NaiveDate>,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            sample_rows: 10,
            total_rows: 10_000,
            chunk_size: 1_000,
            repeat_rate: 0.2,
            sample_output: PathBuf::from("hospital_visits_sample.csv"),
            bulk_output: PathBuf::from("hospital_visits.csv"),
            pools: PoolSizes::default(),
            visit_window_days: 1095,
            visit_window_end: None,
        }
    }
}

impl SynthConfig {
    /// Load configuration from a YAML file. Missing fields fall back to
    /// their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Validate the configuration. Must pass before any generation begins.
    ///
    /// Catalog bounds for the positional pools are checked by the
    /// generator, which owns the catalogs.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sample_rows == 0 {
            return Err(ConfigError::InvalidRowCount {
                name: "sample row count",
                value: self.sample_rows,
            });
        }
        if self.total_rows == 0 {
            return Err(ConfigError::InvalidRowCount {
                name: "total row count",
                value: self.total_rows,
            });
        }
        if self.chunk_size == 0 {
            return Err(ConfigError::InvalidChunkSize(self.chunk_size));
        }
        if !(self.repeat_rate > 0.0 && self.repeat_rate <= 1.0) {
            return Err(ConfigError::InvalidRepeatRate(self.repeat_rate));
        }
        for (pool, value) in [
            ("hospital", self.pools.hospitals),
            ("department", self.pools.departments),
            ("diagnosis", self.pools.diagnoses),
            ("doctor", self.pools.doctors),
            ("insurer", self.pools.insurers),
        ] {
            if value == 0 {
                return Err(ConfigError::InvalidPoolSize { pool, value });
            }
        }
        if self.visit_window_days == 0 {
            return Err(ConfigError::InvalidWindow(self.visit_window_days));
        }
        Ok(())
    }
}

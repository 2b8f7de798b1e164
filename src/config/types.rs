//! Configuration type definitions.

use crate::constants::{DEFAULT_DOMINANT_THRESHOLD, DEFAULT_RANDOM_STATE, DEFAULT_TRAIN_SIZE};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Dataset and output paths.
    #[serde(default)]
    pub paths: PathsConfig,

    /// Dataset selection settings.
    #[serde(default)]
    pub dataset: DatasetConfig,

    /// Train/val split and dominance settings.
    #[serde(default)]
    pub split: SplitConfig,
}

/// Filesystem paths used by a run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Root of the dataset directory tree (class/species/image).
    pub data_dir: Option<PathBuf>,

    /// Directory where manifests and reports are written.
    pub output_dir: Option<PathBuf>,

    /// JSON file mapping class names to per-species image counts.
    pub species_counts: Option<PathBuf>,
}

/// Which classes to include in a run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Target class names. Empty means every class directory found
    /// under the data directory.
    pub classes: Vec<String>,
}

/// Split and dominance-filtering settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitConfig {
    /// Fraction of images assigned to the training subset.
    pub train_size: f64,

    /// Seed for the deterministic split.
    pub random_state: u64,

    /// Cumulative-share threshold for dominant-species selection.
    /// 1.0 disables dominance filtering.
    pub dominant_threshold: f64,

    /// Manifest output formats.
    pub formats: Vec<OutputFormat>,

    /// Write per-species path lists alongside the manifests.
    pub per_species_list: bool,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            train_size: DEFAULT_TRAIN_SIZE,
            random_state: DEFAULT_RANDOM_STATE,
            dominant_threshold: DEFAULT_DOMINANT_THRESHOLD,
            formats: vec![OutputFormat::Parquet],
            per_species_list: false,
        }
    }
}

/// Supported manifest output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Comma-separated values.
    Csv,
    /// Apache Parquet columnar format.
    Parquet,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => write!(f, "csv"),
            Self::Parquet => write!(f, "parquet"),
        }
    }
}

//! JSON report writing.

use crate::config::OutputFormat;
use crate::error::{Error, Result};
use crate::manifest::{ManifestOptions, ManifestSet};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Run report envelope written next to the manifests.
#[derive(Debug, Serialize, Deserialize)]
pub struct ManifestReport {
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// Dataset directory the run read from.
    pub data_dir: String,
    /// Settings used for the run.
    pub settings: ReportSettings,
    /// Result totals.
    pub summary: ReportSummary,
}

/// Settings recorded in the run report.
#[derive(Debug, Serialize, Deserialize)]
pub struct ReportSettings {
    /// Training fraction.
    pub train_size: f64,
    /// Split seed.
    pub random_state: u64,
    /// Dominance threshold.
    pub dominant_threshold: f64,
    /// Manifest formats written.
    pub formats: Vec<OutputFormat>,
    /// Whether per-species lists were written.
    pub per_species_list: bool,
}

/// Totals recorded in the run report.
#[derive(Debug, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Images in the full manifest.
    pub total_images: usize,
    /// Images in the training subset.
    pub train_images: usize,
    /// Images in the validation subset.
    pub val_images: usize,
    /// Distinct labels, including "Other" when present.
    pub total_species: usize,
}

impl ManifestReport {
    /// Build a report from a completed run.
    pub fn new(set: &ManifestSet, options: &ManifestOptions) -> Self {
        Self {
            generated_at: Utc::now(),
            data_dir: options.data_dir.display().to_string(),
            settings: ReportSettings {
                train_size: options.train_size,
                random_state: options.random_state,
                dominant_threshold: options.dominant_threshold,
                formats: options.formats.clone(),
                per_species_list: options.per_species_list,
            },
            summary: ReportSummary {
                total_images: set.images.len(),
                train_images: set.train.len(),
                val_images: set.val.len(),
                total_species: set.species_dict.len(),
            },
        }
    }
}

/// Write any serializable value as pretty-printed JSON.
pub fn write_json_pretty<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, value).map_err(|e| Error::JsonWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

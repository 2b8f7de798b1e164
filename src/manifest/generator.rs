//! Manifest generation orchestration.
//!
//! Sequences dominance resolution, image collection, composition and the
//! train/val split for one end-to-end run, then hands the results to the
//! exporter. Any stage failure aborts the run; partial manifests are never
//! written.

use crate::analysis::{DominantSpecies, JsonCountFile, identify_dominant_species};
use crate::config::OutputFormat;
use crate::constants::threshold;
use crate::error::{Error, Result};
use crate::manifest::collector::collect_images;
use crate::manifest::composition::generate_species_composition;
use crate::manifest::split::split_train_val;
use crate::output::{LabeledImage, export_dataset_files};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Options for one manifest generation run.
#[derive(Debug, Clone)]
pub struct ManifestOptions {
    /// Root of the dataset directory tree.
    pub data_dir: PathBuf,
    /// Directory where artifacts are written.
    pub output_dir: PathBuf,
    /// Species count file for dominance analysis. Required when
    /// `dominant_threshold < 1.0`.
    pub species_counts: Option<PathBuf>,
    /// Target classes; empty means every class directory found.
    pub target_classes: Vec<String>,
    /// Fraction of images assigned to the training subset.
    pub train_size: f64,
    /// Seed for the deterministic split.
    pub random_state: u64,
    /// Cumulative-share threshold; 1.0 skips dominance filtering.
    pub dominant_threshold: f64,
    /// Manifest output formats.
    pub formats: Vec<OutputFormat>,
    /// Write per-species path lists.
    pub per_species_list: bool,
    /// Persist artifacts; false computes the manifest set only.
    pub export: bool,
}

/// Result of a manifest generation run.
#[derive(Debug)]
pub struct ManifestSet {
    /// All collected labeled images.
    pub images: Vec<LabeledImage>,
    /// Training subset.
    pub train: Vec<LabeledImage>,
    /// Validation subset.
    pub val: Vec<LabeledImage>,
    /// Label id to display name mapping.
    pub species_dict: BTreeMap<u32, String>,
    /// Display name to image count mapping.
    pub composition: BTreeMap<String, usize>,
}

/// Run the manifest generation pipeline end to end.
pub fn run_manifest_generator(options: &ManifestOptions) -> Result<ManifestSet> {
    // Negated conjunction so NaN is rejected too
    if !(options.dominant_threshold > threshold::MIN_EXCLUSIVE
        && options.dominant_threshold <= threshold::MAX)
    {
        return Err(Error::InvalidThreshold {
            value: options.dominant_threshold,
        });
    }

    let target_classes = resolve_target_classes(&options.data_dir, &options.target_classes)?;
    debug!("Target classes: {target_classes:?}");

    let dominant = resolve_dominant_species(options, &target_classes)?;

    let accumulator = collect_images(&options.data_dir, &target_classes, dominant.as_ref())?;
    let (images, species_dict) = accumulator.into_parts();
    info!("Collected {} images across {} labels", images.len(), species_dict.len());

    let composition = generate_species_composition(&images, &species_dict);
    let (train, val) = split_train_val(&images, options.train_size, options.random_state);

    let set = ManifestSet {
        images,
        train,
        val,
        species_dict,
        composition,
    };

    if options.export {
        export_dataset_files(&options.output_dir, &set, options)?;
        info!("Artifacts written to {}", options.output_dir.display());
    }

    Ok(set)
}

/// Resolve dominant species when a threshold below 1.0 is requested.
///
/// A threshold of exactly 1.0 is the documented shortcut: dominance
/// filtering is skipped entirely and no "Other" bucket is created.
fn resolve_dominant_species(
    options: &ManifestOptions,
    target_classes: &[String],
) -> Result<Option<DominantSpecies>> {
    if (options.dominant_threshold - threshold::MAX).abs() < f64::EPSILON {
        return Ok(None);
    }

    let counts_path = options
        .species_counts
        .as_deref()
        .ok_or(Error::CountFileMissing)?;
    let source = JsonCountFile::load(counts_path)?;
    let dominant = identify_dominant_species(&source, options.dominant_threshold, target_classes)?;
    Ok(Some(dominant))
}

/// Use the configured classes, or discover class directories when empty.
fn resolve_target_classes(data_dir: &Path, configured: &[String]) -> Result<Vec<String>> {
    if !configured.is_empty() {
        return Ok(configured.to_vec());
    }

    if !data_dir.is_dir() {
        return Err(Error::DatasetDirNotFound {
            path: data_dir.to_path_buf(),
        });
    }

    let dir_read = |source| Error::DirRead {
        path: data_dir.to_path_buf(),
        source,
    };
    let mut classes = Vec::new();
    for entry in std::fs::read_dir(data_dir).map_err(dir_read)? {
        let path = entry.map_err(dir_read)?.path();
        if path.is_dir()
            && let Some(name) = path.file_name()
        {
            classes.push(name.to_string_lossy().into_owned());
        }
    }
    classes.sort();
    Ok(classes)
}

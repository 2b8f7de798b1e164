//! Application-wide constants.
//!
//! All magic numbers and strings are defined here to ensure consistency
//! and make changes easy to track.

/// Application name used for config directories and user-facing messages.
pub const APP_NAME: &str = "speciset";

/// Default fraction of images assigned to the training subset.
pub const DEFAULT_TRAIN_SIZE: f64 = 0.8;

/// Default seed for the train/val split.
pub const DEFAULT_RANDOM_STATE: u64 = 42;

/// Default cumulative-share threshold for dominant-species selection.
///
/// A threshold of 1.0 disables dominance filtering entirely: every species
/// keeps its own label and no "Other" bucket is created.
pub const DEFAULT_DOMINANT_THRESHOLD: f64 = 1.0;

/// Display name of the shared label absorbing non-dominant species.
pub const OTHER_LABEL: &str = "Other";

/// Valid range for the dominance threshold.
pub mod threshold {
    /// Exclusive lower bound.
    pub const MIN_EXCLUSIVE: f64 = 0.0;

    /// Inclusive upper bound.
    pub const MAX: f64 = 1.0;
}

/// Names of the files written under the output directory.
pub mod output_files {
    /// File stem for the full manifest.
    pub const MANIFEST_STEM: &str = "dataset_manifest";

    /// File stem for the training subset manifest.
    pub const TRAIN_STEM: &str = "train";

    /// File stem for the validation subset manifest.
    pub const VAL_STEM: &str = "val";

    /// Label id to display name mapping.
    pub const SPECIES_LABELS: &str = "dataset_species_labels.json";

    /// Display name to image count mapping.
    pub const SPECIES_COMPOSITION: &str = "species_composition.json";

    /// Run report envelope (settings, totals, timestamp).
    pub const MANIFEST_REPORT: &str = "manifest_report.json";

    /// Directory holding optional per-species path lists.
    pub const SPECIES_LISTS_DIR: &str = "species_lists";

    /// Matched species map produced by cross-referencing.
    pub const MATCHED_SPECIES: &str = "matched_species.json";

    /// Cross-reference comparison report.
    pub const CROSSREF_REPORT: &str = "cross_reference_report.json";

    /// File name of the path list inside each per-species directory.
    pub const SPECIES_LIST_FILE: &str = "images.txt";
}

/// File extensions by manifest output format.
pub mod output_extensions {
    /// CSV manifest extension.
    pub const CSV: &str = ".csv";

    /// Parquet manifest extension.
    pub const PARQUET: &str = ".parquet";
}

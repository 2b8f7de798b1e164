//! Species count sources for dominance analysis.

use crate::error::{Error, Result};
use std::path::Path;

/// Ordered per-species image counts for one class.
///
/// Order matters: it is the tie-break order when species are sorted by
/// count descending, so it must reflect the source's original key order.
pub type ClassCounts = Vec<(String, u64)>;

/// Source of per-class species counts.
///
/// Returns `None` when the class is absent or its data is unusable;
/// the dominance analyzer turns that into a per-class error.
pub trait SpeciesCountSource {
    /// Ordered per-species counts for `class`, or `None` if unavailable.
    fn class_counts(&self, class: &str) -> Option<ClassCounts>;
}

/// JSON-backed count source: `{ "class": { "species": count, ... }, ... }`.
///
/// Key order from the file is preserved (serde_json `preserve_order`).
pub struct JsonCountFile {
    classes: serde_json::Map<String, serde_json::Value>,
}

impl JsonCountFile {
    /// Load a count file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| Error::CountFileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        let classes = serde_json::from_str(&contents).map_err(|e| Error::CountFileParse {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(Self { classes })
    }
}

impl SpeciesCountSource for JsonCountFile {
    fn class_counts(&self, class: &str) -> Option<ClassCounts> {
        let entries = self.classes.get(class)?.as_object()?;

        let mut counts = Vec::with_capacity(entries.len());
        for (species, value) in entries {
            if species.is_empty() {
                return None;
            }
            counts.push((species.clone(), value.as_u64()?));
        }
        Some(counts)
    }
}

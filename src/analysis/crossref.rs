//! Cross-referencing of species lists between two datasets.
//!
//! Intersects two `class -> [species]` maps over the target classes,
//! producing the matched map plus a comparison report.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

/// Mapping from class name to species names.
pub type SpeciesMap = BTreeMap<String, Vec<String>>;

/// Per-class comparison of two species maps.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClassComparison {
    /// Species present in both maps, sorted.
    pub matched: Vec<String>,
    /// Species present in exactly one map, sorted.
    pub unmatched: Vec<String>,
}

/// Cross-reference report written alongside the matched map.
#[derive(Debug, Serialize, Deserialize)]
pub struct CrossRefReport {
    /// Species present in both datasets across all target classes.
    pub total_matched: usize,
    /// Species present in exactly one dataset across all target classes.
    pub total_unmatched: usize,
    /// Per-class breakdown.
    pub class_comparison: BTreeMap<String, ClassComparison>,
}

/// Load a `class -> [species]` map from a JSON file.
pub fn load_species_map(path: &Path) -> Result<SpeciesMap> {
    let contents = std::fs::read_to_string(path).map_err(|e| Error::SpeciesMapRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_json::from_str(&contents).map_err(|e| Error::SpeciesMapParse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Cross-reference two species maps over the target classes.
///
/// An empty `target_classes` slice means every class present in either map.
/// Returns the matched map (per-class sorted intersections) and the report.
pub fn cross_reference(
    first: &SpeciesMap,
    second: &SpeciesMap,
    target_classes: &[String],
) -> (SpeciesMap, CrossRefReport) {
    let all_classes: BTreeSet<&String> = first.keys().chain(second.keys()).collect();
    let selected: Vec<&String> = if target_classes.is_empty() {
        all_classes.into_iter().collect()
    } else {
        all_classes
            .into_iter()
            .filter(|class| target_classes.contains(class))
            .collect()
    };

    let aggregate = |map: &SpeciesMap| -> BTreeSet<String> {
        selected
            .iter()
            .filter_map(|class| map.get(*class))
            .flatten()
            .cloned()
            .collect()
    };

    let set_1 = aggregate(first);
    let set_2 = aggregate(second);
    let total_matched = set_1.intersection(&set_2).count();
    let total_unmatched = set_1.symmetric_difference(&set_2).count();

    let mut matched_map = SpeciesMap::new();
    let mut class_comparison = BTreeMap::new();

    for class in selected {
        let species_1: BTreeSet<&String> = first.get(class).into_iter().flatten().collect();
        let species_2: BTreeSet<&String> = second.get(class).into_iter().flatten().collect();

        let matched: Vec<String> = species_1
            .intersection(&species_2)
            .map(|s| (*s).clone())
            .collect();
        let unmatched: Vec<String> = species_1
            .symmetric_difference(&species_2)
            .map(|s| (*s).clone())
            .collect();

        matched_map.insert(class.clone(), matched.clone());
        class_comparison.insert(class.clone(), ClassComparison { matched, unmatched });
    }

    let report = CrossRefReport {
        total_matched,
        total_unmatched,
        class_comparison,
    };

    (matched_map, report)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, &[&str])]) -> SpeciesMap {
        entries
            .iter()
            .map(|(class, species)| {
                (
                    (*class).to_string(),
                    species.iter().map(|s| (*s).to_string()).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn test_cross_reference_basic() {
        let first = map(&[("class_a", &["sp1", "sp2", "sp3"])]);
        let second = map(&[("class_a", &["sp2", "sp3", "sp4"])]);

        let (matched, report) = cross_reference(&first, &second, &["class_a".to_string()]);

        assert_eq!(matched["class_a"], vec!["sp2", "sp3"]);
        assert_eq!(report.total_matched, 2);
        assert_eq!(report.total_unmatched, 2);
        let comparison = &report.class_comparison["class_a"];
        assert_eq!(comparison.matched, vec!["sp2", "sp3"]);
        assert_eq!(comparison.unmatched, vec!["sp1", "sp4"]);
    }

    #[test]
    fn test_classes_outside_target_are_ignored() {
        let first = map(&[("class_a", &["sp1"]), ("class_b", &["sp9"])]);
        let second = map(&[("class_a", &["sp1"]), ("class_b", &["sp9"])]);

        let (matched, report) = cross_reference(&first, &second, &["class_a".to_string()]);

        assert!(!matched.contains_key("class_b"));
        assert_eq!(report.total_matched, 1);
    }

    #[test]
    fn test_empty_target_means_all_classes() {
        let first = map(&[("class_a", &["sp1"]), ("class_b", &["sp2"])]);
        let second = map(&[("class_b", &["sp2"])]);

        let (matched, report) = cross_reference(&first, &second, &[]);

        assert_eq!(matched.len(), 2);
        assert!(matched["class_a"].is_empty());
        assert_eq!(matched["class_b"], vec!["sp2"]);
        assert_eq!(report.total_matched, 1);
        assert_eq!(report.total_unmatched, 1);
    }

    #[test]
    fn test_class_missing_from_one_map() {
        let first = map(&[("class_a", &["sp1", "sp2"])]);
        let second = map(&[]);

        let (matched, report) =
            cross_reference(&first, &second, &["class_a".to_string()]);

        assert!(matched["class_a"].is_empty());
        let comparison = &report.class_comparison["class_a"];
        assert_eq!(comparison.unmatched, vec!["sp1", "sp2"]);
    }

    #[test]
    fn test_load_species_map_errors() {
        let missing = load_species_map(Path::new("/nonexistent/map.json"));
        assert!(matches!(missing, Err(Error::SpeciesMapRead { .. })));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        use std::io::Write;
        write!(file, "[1, 2, 3]").unwrap();
        let malformed = load_species_map(file.path());
        assert!(matches!(malformed, Err(Error::SpeciesMapParse { .. })));
    }
}

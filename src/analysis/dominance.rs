//! Dominant-species identification.
//!
//! A species is dominant for a class when it belongs to the smallest
//! descending-count prefix whose cumulative share of images reaches the
//! configured threshold.

use crate::analysis::counts::SpeciesCountSource;
use crate::constants::threshold;
use crate::error::{Error, Result};
use std::collections::BTreeMap;
use tracing::warn;

/// Mapping from class name to its dominant species, in selection order.
pub type DominantSpecies = BTreeMap<String, Vec<String>>;

/// Identify the dominant species of every target class.
///
/// The threshold must lie in `(0, 1]` and is checked once before any class
/// is processed. A class the source cannot provide usable data for aborts
/// the whole call; a class with no images (or no species at all) yields an
/// empty dominant list and a warning, and processing continues.
pub fn identify_dominant_species(
    source: &dyn SpeciesCountSource,
    threshold_value: f64,
    target_classes: &[String],
) -> Result<DominantSpecies> {
    // Negated conjunction so NaN is rejected too
    if !(threshold_value > threshold::MIN_EXCLUSIVE && threshold_value <= threshold::MAX) {
        return Err(Error::InvalidThreshold {
            value: threshold_value,
        });
    }

    let mut dominant = DominantSpecies::new();

    for class in target_classes {
        let counts = source
            .class_counts(class)
            .ok_or_else(|| Error::DataPreparation {
                class: class.clone(),
            })?;

        let total: u64 = counts.iter().map(|(_, count)| count).sum();
        if counts.is_empty() || total == 0 {
            warn!("No data available for {class}, dominant species list is empty");
            dominant.insert(class.clone(), Vec::new());
            continue;
        }

        dominant.insert(class.clone(), select_dominant(counts, total, threshold_value));
    }

    Ok(dominant)
}

/// Select the minimal descending-count prefix reaching `threshold_value`.
///
/// The sort is stable, so species with equal counts keep the source's
/// original relative order. The species whose inclusion crosses the
/// threshold is part of the result, so the selection is never empty.
fn select_dominant(
    mut counts: Vec<(String, u64)>,
    total: u64,
    threshold_value: f64,
) -> Vec<String> {
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    let mut selected = Vec::new();
    let mut cumulative: u64 = 0;

    for (species, count) in counts {
        cumulative += count;
        selected.push(species);

        #[allow(clippy::cast_precision_loss)]
        let share = cumulative as f64 / total as f64;
        if share >= threshold_value {
            break;
        }
    }

    selected
}

//! Species composition aggregation.

use crate::output::LabeledImage;
use std::collections::BTreeMap;

/// Count images per display name.
///
/// Every registered label appears in the result, with count 0 when no
/// image carries it. Pure function, no I/O.
pub fn generate_species_composition(
    images: &[LabeledImage],
    species_dict: &BTreeMap<u32, String>,
) -> BTreeMap<String, usize> {
    let mut counts_by_label: BTreeMap<u32, usize> = BTreeMap::new();
    for image in images {
        *counts_by_label.entry(image.label).or_insert(0) += 1;
    }

    species_dict
        .iter()
        .map(|(label, name)| {
            let count = counts_by_label.get(label).copied().unwrap_or(0);
            (name.clone(), count)
        })
        .collect()
}

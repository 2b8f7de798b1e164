//! Train/validation splitting.
//!
//! Stratified when every label has at least two images, with a logged
//! fallback to a plain random split otherwise. Deterministic for a given
//! seed and input.

use crate::output::LabeledImage;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::collections::BTreeMap;
use tracing::warn;

/// Partition `images` into train and validation subsets.
///
/// Attempts a stratified split so every label appears on both sides in
/// proportion to `train_size`. When some label has fewer than two images,
/// stratification is infeasible; a warning is logged and a non-stratified
/// split with the same seed is used instead. In both cases the two sides
/// partition the input exactly.
pub fn split_train_val(
    images: &[LabeledImage],
    train_size: f64,
    random_state: u64,
) -> (Vec<LabeledImage>, Vec<LabeledImage>) {
    let mut rng = StdRng::seed_from_u64(random_state);

    let mut groups: BTreeMap<u32, Vec<usize>> = BTreeMap::new();
    for (index, image) in images.iter().enumerate() {
        groups.entry(image.label).or_default().push(index);
    }

    if let Some((label, group)) = groups.iter().find(|(_, group)| group.len() < 2) {
        warn!(
            "Label {label} has only {} image(s), stratified split is infeasible",
            group.len()
        );
        warn!("Falling back to non-stratified split, some species may be missing from one side");
        return plain_split(images, train_size, &mut rng);
    }

    let mut train = Vec::new();
    let mut val = Vec::new();

    for mut group in groups.into_values() {
        group.shuffle(&mut rng);
        let n_train = train_count(group.len(), train_size).clamp(1, group.len() - 1);
        for (position, index) in group.into_iter().enumerate() {
            if position < n_train {
                train.push(images[index].clone());
            } else {
                val.push(images[index].clone());
            }
        }
    }

    (train, val)
}

/// Non-stratified seeded split.
fn plain_split(
    images: &[LabeledImage],
    train_size: f64,
    rng: &mut StdRng,
) -> (Vec<LabeledImage>, Vec<LabeledImage>) {
    let mut indices: Vec<usize> = (0..images.len()).collect();
    indices.shuffle(rng);

    let n_train = train_count(images.len(), train_size).min(images.len());
    let train = indices[..n_train]
        .iter()
        .map(|&index| images[index].clone())
        .collect();
    let val = indices[n_train..]
        .iter()
        .map(|&index| images[index].clone())
        .collect();

    (train, val)
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn train_count(total: usize, train_size: f64) -> usize {
    (total as f64 * train_size).round() as usize
}

//! Manifest building: collection, composition, splitting, orchestration.

mod collector;
mod composition;
mod generator;
mod split;

pub use collector::{LabelAccumulator, collect_class, collect_images};
pub use composition::generate_species_composition;
pub use generator::{ManifestOptions, ManifestSet, run_manifest_generator};
pub use split::split_train_val;

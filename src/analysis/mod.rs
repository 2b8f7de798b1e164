//! Dataset analysis: species counts, dominance, cross-referencing.

mod counts;
mod crossref;
mod dominance;

pub use counts::{ClassCounts, JsonCountFile, SpeciesCountSource};
pub use crossref::{ClassComparison, CrossRefReport, SpeciesMap, cross_reference, load_species_map};
pub use dominance::{DominantSpecies, identify_dominant_species};

//! Image collection and label assignment.
//!
//! Walks the `class/species/image` directory tree and turns every image file
//! into a [`LabeledImage`]. Species selected as dominant keep their own
//! label; everything else collapses into the shared "Other" label.

use crate::analysis::DominantSpecies;
use crate::constants::OTHER_LABEL;
use crate::error::{Error, Result};
use crate::output::LabeledImage;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use tracing::warn;

/// Accumulates labels and images across one collection pass.
///
/// Owns the id assignment state that the collector threads across classes:
/// the first time a display name is seen it receives the next dense id,
/// and "Other" is one shared label for the whole run.
#[derive(Debug, Default)]
pub struct LabelAccumulator {
    species_to_id: HashMap<String, u32>,
    species_dict: BTreeMap<u32, String>,
    images: Vec<LabeledImage>,
    next_id: u32,
}

impl LabelAccumulator {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Label id for a display name, assigning the next id on first sight.
    fn label_for(&mut self, name: &str) -> u32 {
        if let Some(&id) = self.species_to_id.get(name) {
            return id;
        }
        let id = self.next_id;
        self.next_id += 1;
        self.species_to_id.insert(name.to_string(), id);
        self.species_dict.insert(id, name.to_string());
        id
    }

    /// Label id to display name mapping.
    pub fn species_dict(&self) -> &BTreeMap<u32, String> {
        &self.species_dict
    }

    /// Collected labeled images.
    pub fn images(&self) -> &[LabeledImage] {
        &self.images
    }

    /// Consume the accumulator, yielding images and the label map.
    pub fn into_parts(self) -> (Vec<LabeledImage>, BTreeMap<u32, String>) {
        (self.images, self.species_dict)
    }
}

/// Collect labeled images for every target class under `data_dir`.
///
/// `dominant` of `None` means dominance filtering is disabled and every
/// species keeps its own identity. A class directory missing from disk is
/// logged and skipped; it contributes no images.
pub fn collect_images(
    data_dir: &Path,
    target_classes: &[String],
    dominant: Option<&DominantSpecies>,
) -> Result<LabelAccumulator> {
    if !data_dir.is_dir() {
        return Err(Error::DatasetDirNotFound {
            path: data_dir.to_path_buf(),
        });
    }

    let mut accumulator = LabelAccumulator::new();

    for class in target_classes {
        let class_dir = data_dir.join(class);
        if !class_dir.is_dir() {
            warn!("Class directory not found, skipping: {}", class_dir.display());
            continue;
        }
        collect_class(&mut accumulator, &class_dir, class, dominant)?;
    }

    Ok(accumulator)
}

/// Collect one class directory into the accumulator.
///
/// Entries directly under the class directory that are not directories are
/// ignored. No image content is read; any regular file under a species
/// directory counts as one image.
pub fn collect_class(
    accumulator: &mut LabelAccumulator,
    class_dir: &Path,
    class_name: &str,
    dominant: Option<&DominantSpecies>,
) -> Result<()> {
    // Sorted walk so label assignment and split input order are reproducible
    for species_dir in sorted_entries(class_dir)? {
        if !species_dir.is_dir() {
            continue;
        }

        let species_name = species_dir
            .file_name()
            .map_or_else(String::new, |name| name.to_string_lossy().into_owned());

        let display_name = if keeps_identity(dominant, class_name, &species_name) {
            species_name
        } else {
            OTHER_LABEL.to_string()
        };

        let label = accumulator.label_for(&display_name);

        for image in sorted_entries(&species_dir)? {
            if image.is_file() {
                accumulator.images.push(LabeledImage::new(image, label));
            }
        }
    }

    Ok(())
}

/// Whether a species keeps its own label instead of folding into "Other".
///
/// Identity is kept when dominance filtering is off, when the class has no
/// entry in the dominant map, or when the species is listed dominant.
fn keeps_identity(dominant: Option<&DominantSpecies>, class_name: &str, species: &str) -> bool {
    dominant.is_none_or(|map| {
        map.get(class_name)
            .is_none_or(|list| list.iter().any(|name| name == species))
    })
}

/// Directory entries sorted by path for deterministic traversal.
fn sorted_entries(dir: &Path) -> Result<Vec<std::path::PathBuf>> {
    let dir_read = |source| Error::DirRead {
        path: dir.to_path_buf(),
        source,
    };
    let mut entries: Vec<_> = std::fs::read_dir(dir)
        .map_err(dir_read)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<_>>()
        .map_err(dir_read)?;
    entries.sort();
    Ok(entries)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// class_a with sp1 (2 images), sp2 (2 images) and a stray file.
    fn sample_dataset() -> TempDir {
        let dir = TempDir::new().unwrap();
        let class_dir = dir.path().join("class_a");
        for species in ["sp1", "sp2"] {
            let species_dir = class_dir.join(species);
            fs::create_dir_all(&species_dir).unwrap();
            for i in 0..2 {
                fs::write(species_dir.join(format!("img_{i}.jpg")), "").unwrap();
            }
        }
        fs::write(class_dir.join("README.txt"), "not a directory").unwrap();
        dir
    }

    fn classes(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_collect_without_dominance() {
        let dir = sample_dataset();
        let accumulator = collect_images(dir.path(), &classes(&["class_a"]), None).unwrap();

        // Stray README.txt ignored, both species keep identity
        assert_eq!(accumulator.images().len(), 4);
        assert_eq!(accumulator.species_dict().len(), 2);
        let names: Vec<&String> = accumulator.species_dict().values().collect();
        assert_eq!(names, vec!["sp1", "sp2"]);
    }

    #[test]
    fn test_collect_with_dominant_species() {
        let dir = sample_dataset();
        let dominant =
            DominantSpecies::from([("class_a".to_string(), vec!["sp1".to_string()])]);

        let accumulator =
            collect_images(dir.path(), &classes(&["class_a"]), Some(&dominant)).unwrap();

        // 2 images from dominant sp1, 2 from sp2 folded into "Other"
        assert_eq!(accumulator.images().len(), 4);
        assert_eq!(accumulator.species_dict().len(), 2);
        assert_eq!(accumulator.species_dict()[&0], "sp1");
        assert_eq!(accumulator.species_dict()[&1], OTHER_LABEL);
    }

    #[test]
    fn test_collect_all_species_non_dominant() {
        let dir = sample_dataset();
        let dominant = DominantSpecies::from([("class_a".to_string(), Vec::new())]);

        let accumulator =
            collect_images(dir.path(), &classes(&["class_a"]), Some(&dominant)).unwrap();

        assert_eq!(accumulator.images().len(), 4);
        let names: Vec<&String> = accumulator.species_dict().values().collect();
        assert_eq!(names, vec![OTHER_LABEL]);
    }

    #[test]
    fn test_class_absent_from_dominant_map_keeps_identity() {
        let dir = sample_dataset();
        let dominant =
            DominantSpecies::from([("class_z".to_string(), vec!["sp9".to_string()])]);

        let accumulator =
            collect_images(dir.path(), &classes(&["class_a"]), Some(&dominant)).unwrap();

        assert_eq!(accumulator.species_dict().len(), 2);
        assert!(!accumulator.species_dict().values().any(|n| n == OTHER_LABEL));
    }

    #[test]
    fn test_other_label_shared_across_classes() {
        let dir = TempDir::new().unwrap();
        for (class, species) in [("class_a", "sp1"), ("class_b", "sp2")] {
            let species_dir = dir.path().join(class).join(species);
            fs::create_dir_all(&species_dir).unwrap();
            fs::write(species_dir.join("img.jpg"), "").unwrap();
        }
        let dominant = DominantSpecies::from([
            ("class_a".to_string(), Vec::new()),
            ("class_b".to_string(), Vec::new()),
        ]);

        let accumulator =
            collect_images(dir.path(), &classes(&["class_a", "class_b"]), Some(&dominant))
                .unwrap();

        // Both classes fold into the one shared "Other" label
        assert_eq!(accumulator.images().len(), 2);
        assert_eq!(accumulator.species_dict().len(), 1);
    }

    #[test]
    fn test_missing_class_dir_is_skipped() {
        let dir = sample_dataset();
        let accumulator =
            collect_images(dir.path(), &classes(&["class_a", "class_missing"]), None).unwrap();
        assert_eq!(accumulator.images().len(), 4);
    }

    #[test]
    fn test_missing_data_dir_is_an_error() {
        let result = collect_images(Path::new("/nonexistent/dataset"), &classes(&["a"]), None);
        assert!(matches!(result, Err(Error::DatasetDirNotFound { .. })));
    }

    #[test]
    fn test_unreadable_directory_error_names_the_path() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("plain.txt");
        fs::write(&file, "").unwrap();

        // read_dir on a regular file fails regardless of permissions
        match sorted_entries(&file) {
            Err(Error::DirRead { path, .. }) => assert_eq!(path, file),
            other => panic!("expected DirRead error, got {other:?}"),
        }
    }

    #[test]
    fn test_labels_are_dense_in_discovery_order() {
        let dir = sample_dataset();
        let accumulator = collect_images(dir.path(), &classes(&["class_a"]), None).unwrap();

        let mut labels: Vec<u32> = accumulator.images().iter().map(|i| i.label).collect();
        labels.dedup();
        assert_eq!(labels, vec![0, 1]);
    }
}

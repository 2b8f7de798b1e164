//! Manifest writer trait and the dataset export driver.

use crate::config::OutputFormat;
use crate::constants::{output_extensions, output_files};
use crate::error::{Error, Result};
use crate::manifest::{ManifestOptions, ManifestSet};
use crate::output::csv::CsvManifestWriter;
use crate::output::json::{ManifestReport, write_json_pretty};
use crate::output::parquet::ParquetManifestWriter;
use crate::output::types::LabeledImage;
use std::io::Write;
use std::path::Path;

/// Trait for writing manifest records.
pub trait ManifestWriter {
    /// Write the file header (if applicable).
    fn write_header(&mut self) -> Result<()>;

    /// Write a single labeled image record.
    fn write_record(&mut self, image: &LabeledImage) -> Result<()>;

    /// Finalize the output (flush, close, etc.).
    fn finalize(&mut self) -> Result<()>;
}

/// Write all run artifacts under `output_dir`.
///
/// Produces the full/train/val manifests in every requested format, the
/// label and composition JSON files, the run report, and optionally the
/// per-species path lists.
pub fn export_dataset_files(
    output_dir: &Path,
    set: &ManifestSet,
    options: &ManifestOptions,
) -> Result<()> {
    std::fs::create_dir_all(output_dir).map_err(|e| Error::OutputDirCreate {
        path: output_dir.to_path_buf(),
        source: e,
    })?;

    for &format in &options.formats {
        let subsets = [
            (output_files::MANIFEST_STEM, &set.images),
            (output_files::TRAIN_STEM, &set.train),
            (output_files::VAL_STEM, &set.val),
        ];
        for (stem, images) in subsets {
            write_manifest_file(&manifest_path(output_dir, stem, format), images, format)?;
        }
    }

    write_json_pretty(
        &output_dir.join(output_files::SPECIES_LABELS),
        &set.species_dict,
    )?;
    write_json_pretty(
        &output_dir.join(output_files::SPECIES_COMPOSITION),
        &set.composition,
    )?;
    write_json_pretty(
        &output_dir.join(output_files::MANIFEST_REPORT),
        &ManifestReport::new(set, options),
    )?;

    if options.per_species_list {
        write_species_lists(output_dir, set)?;
    }

    Ok(())
}

/// Path of a manifest file for a given subset stem and format.
pub fn manifest_path(output_dir: &Path, stem: &str, format: OutputFormat) -> std::path::PathBuf {
    let extension = match format {
        OutputFormat::Csv => output_extensions::CSV,
        OutputFormat::Parquet => output_extensions::PARQUET,
    };
    output_dir.join(format!("{stem}{extension}"))
}

/// Write one manifest file in the requested format.
fn write_manifest_file(path: &Path, images: &[LabeledImage], format: OutputFormat) -> Result<()> {
    let mut writer: Box<dyn ManifestWriter> = match format {
        OutputFormat::Csv => Box::new(CsvManifestWriter::new(path)?),
        OutputFormat::Parquet => Box::new(ParquetManifestWriter::new(path)?),
    };

    writer.write_header()?;
    for image in images {
        writer.write_record(image)?;
    }
    writer.finalize()
}

/// Write one path-list file per display name under `species_lists/`.
fn write_species_lists(output_dir: &Path, set: &ManifestSet) -> Result<()> {
    let lists_dir = output_dir.join(output_files::SPECIES_LISTS_DIR);

    for (label, name) in &set.species_dict {
        let species_dir = lists_dir.join(name);
        std::fs::create_dir_all(&species_dir).map_err(|e| Error::OutputDirCreate {
            path: species_dir.clone(),
            source: e,
        })?;

        let list_path = species_dir.join(output_files::SPECIES_LIST_FILE);
        let file = std::fs::File::create(&list_path).map_err(|e| Error::ManifestWrite {
            path: list_path.clone(),
            source: e,
        })?;
        let mut writer = std::io::BufWriter::new(file);
        for image in set.images.iter().filter(|image| image.label == *label) {
            writeln!(writer, "{}", image.path.display())?;
        }
        writer.flush()?;
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    fn sample_set() -> ManifestSet {
        let images = vec![
            LabeledImage::new("a/sp1/0.jpg", 0),
            LabeledImage::new("a/sp1/1.jpg", 0),
            LabeledImage::new("a/sp2/0.jpg", 1),
        ];
        let species_dict =
            BTreeMap::from([(0, "sp1".to_string()), (1, "Other".to_string())]);
        let composition =
            BTreeMap::from([("sp1".to_string(), 2), ("Other".to_string(), 1)]);
        ManifestSet {
            train: vec![images[0].clone(), images[2].clone()],
            val: vec![images[1].clone()],
            images,
            species_dict,
            composition,
        }
    }

    fn sample_options(output_dir: &Path) -> ManifestOptions {
        ManifestOptions {
            data_dir: "dataset".into(),
            output_dir: output_dir.to_path_buf(),
            species_counts: None,
            target_classes: Vec::new(),
            train_size: 0.7,
            random_state: 42,
            dominant_threshold: 0.8,
            formats: vec![OutputFormat::Csv],
            per_species_list: true,
            export: true,
        }
    }

    #[test]
    fn test_export_writes_all_artifacts() {
        let dir = TempDir::new().unwrap();
        let output_dir = dir.path().join("out");
        let set = sample_set();
        let options = sample_options(&output_dir);

        export_dataset_files(&output_dir, &set, &options).unwrap();

        for name in [
            "dataset_manifest.csv",
            "train.csv",
            "val.csv",
            "dataset_species_labels.json",
            "species_composition.json",
            "manifest_report.json",
        ] {
            assert!(output_dir.join(name).exists(), "missing {name}");
        }

        let sp1_list = output_dir.join("species_lists/sp1/images.txt");
        assert!(sp1_list.exists());
        let contents = std::fs::read_to_string(sp1_list).unwrap();
        assert_eq!(contents.lines().count(), 2);
    }

    #[test]
    fn test_manifest_path_extensions() {
        let dir = Path::new("/out");
        assert_eq!(
            manifest_path(dir, "train", OutputFormat::Csv),
            Path::new("/out/train.csv")
        );
        assert_eq!(
            manifest_path(dir, "train", OutputFormat::Parquet),
            Path::new("/out/train.parquet")
        );
    }
}

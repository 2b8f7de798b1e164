//! Output format writers and export driver.

mod csv;
mod json;
mod parquet;
mod types;
mod writer;

pub use csv::CsvManifestWriter;
pub use json::{ManifestReport, ReportSettings, ReportSummary, write_json_pretty};
pub use parquet::ParquetManifestWriter;
pub use types::LabeledImage;
pub use writer::{ManifestWriter, export_dataset_files, manifest_path};
